use crate::domain::error::TarjamaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub clear_screen: bool,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

// The two recognized model configurations. Both identifiers are opaque
// strings passed through unchanged to the model-loading collaborator.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelsConfig {
    /// Hosted general-purpose pretrained model name.
    #[serde(default = "default_general_model")]
    pub general: String,
    /// Filesystem path to a fine-tuned model.
    pub local: Option<String>,
    /// Which model to use when the CLI does not pick one: "general" or "local".
    #[serde(default = "default_model_choice")]
    pub default: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkerConfig {
    /// External translator command; the request text and `--model <id>` are
    /// appended as arguments. It must emit one JSON line on stdout.
    #[serde(default = "default_worker_command")]
    pub command: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            general: default_general_model(),
            local: None,
            default: default_model_choice(),
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            command: default_worker_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            clear_screen: false,
            enable_emoji: true,
            chart_width: default_chart_width(),
            logging: Logging::default(),
            models: ModelsConfig::default(),
            worker: WorkerConfig::default(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "sands".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_chart_width() -> usize {
    40
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_general_model() -> String {
    "Helsinki-NLP/opus-mt-es-ar".to_string()
}
fn default_model_choice() -> String {
    "general".to_string()
}
fn default_worker_command() -> String {
    "python3 translator.py".to_string()
}

/// Resolve a model selector to the identifier handed to the runtime.
///
/// `general` and `local` name the two configured models; anything else is
/// treated as an explicit model path and passed through unchanged.
pub fn resolve_model(config: &Config, selector: Option<&str>) -> Result<String, TarjamaError> {
    let choice = selector.unwrap_or(config.models.default.as_str());
    match choice {
        "general" => Ok(config.models.general.clone()),
        "local" => config.models.local.clone().ok_or_else(|| {
            TarjamaError::Config("no local model path configured under [models]".to_string())
        }),
        path => Ok(path.to_string()),
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tarjama").join("config.toml"))
}

pub fn load_config() -> Result<Config, TarjamaError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match toml::from_str::<Config>(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), TarjamaError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| TarjamaError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| TarjamaError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(TarjamaError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
