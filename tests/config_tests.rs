//! Configuration tests

use tarjama::infrastructure::config::{resolve_model, Config};

#[test]
fn defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "sands");
    assert!(!config.clear_screen);
    assert!(config.enable_emoji);
    assert_eq!(config.chart_width, 40);
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert_eq!(config.models.general, "Helsinki-NLP/opus-mt-es-ar");
    assert!(config.models.local.is_none());
    assert_eq!(config.models.default, "general");
    assert_eq!(config.worker.command, "python3 translator.py");
}

#[test]
fn toml_with_all_sections() {
    let content = r#"
theme = "canvas"
clear_screen = true
enable_emoji = false
chart_width = 30

[logging]
enable = true
path = "/tmp/tarjama.log"
level = "DEBUG"

[models]
general = "Helsinki-NLP/opus-mt-es-ar"
local = "/srv/models/final_model"
default = "local"

[worker]
command = "python3 /srv/scripts/translator.py"
"#;
    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.theme, "canvas");
    assert!(config.clear_screen);
    assert!(!config.enable_emoji);
    assert_eq!(config.chart_width, 30);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/tarjama.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.models.local.as_deref(), Some("/srv/models/final_model"));
    assert_eq!(config.models.default, "local");
    assert_eq!(config.worker.command, "python3 /srv/scripts/translator.py");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: Config = toml::from_str("theme = \"oasis\"").unwrap();

    assert_eq!(config.theme, "oasis");
    assert_eq!(config.chart_width, 40);
    assert_eq!(config.models.general, "Helsinki-NLP/opus-mt-es-ar");
    assert_eq!(config.worker.command, "python3 translator.py");
}

#[test]
fn resolve_model_selectors() {
    let mut config = Config::default();
    config.models.local = Some("/srv/models/final_model".to_string());

    // explicit selectors
    assert_eq!(
        resolve_model(&config, Some("general")).unwrap(),
        "Helsinki-NLP/opus-mt-es-ar"
    );
    assert_eq!(
        resolve_model(&config, Some("local")).unwrap(),
        "/srv/models/final_model"
    );
    // anything else is an opaque model path, passed through unchanged
    assert_eq!(
        resolve_model(&config, Some("/elsewhere/model")).unwrap(),
        "/elsewhere/model"
    );
    // no selector uses the configured default
    assert_eq!(
        resolve_model(&config, None).unwrap(),
        "Helsinki-NLP/opus-mt-es-ar"
    );
}

#[test]
fn resolve_local_without_path_is_a_config_error() {
    let config = Config::default();

    let err = resolve_model(&config, Some("local")).unwrap_err();
    assert!(err.to_string().contains("no local model path"));
}
