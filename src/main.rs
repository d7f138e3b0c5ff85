// Main entry point
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use tarjama::application::translate::translate_text;
use tarjama::domain::model::{TranslationRequest, TranslationResult};
use tarjama::domain::traits::TranslationEngine;
use tarjama::infrastructure::config::{self, load_config, resolve_model};
use tarjama::infrastructure::engine::WorkerEngine;
use tarjama::interfaces::cli::Cli;
use tarjama::presentation::{render, theme::Theme};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Spawn signal handler task
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            eprintln!("\nInterrupted, shutting down...");
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let config_path_clone = config_path.clone();
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path_clone)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    // Handle translation
    if cli.text.is_empty() {
        eprintln!("{}", "Please enter some text to translate".red());
        std::process::exit(1);
    }

    let source_text = cli.text.join(" ");
    let model = resolve_model(&config, cli.model.as_deref())?;
    let request = TranslationRequest::new(source_text, model);

    let engine = WorkerEngine::from_command(&config.worker.command)?;

    // Spinner while the model loads and generates; stderr keeps stdout clean
    // for JSON mode.
    let spinner = if cli.json {
        None
    } else {
        Some(make_spinner())
    };

    // Race translation against the shutdown signal; a request runs to
    // completion or not at all, there is no cancellation mid-result.
    let result = tokio::select! {
        result = run_translation(&engine, &request) => result,
        _ = shutdown_rx => {
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            eprintln!("Translation interrupted");
            return Ok(());
        }
    };

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    // Load theme
    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    // Clear screen if configured
    if config.clear_screen && !cli.json {
        clear_screen();
    }

    // Output result
    if cli.json {
        // One line only, per the worker protocol.
        println!("{}", serde_json::to_string(&result)?);
    } else {
        let output = render::format_result(&result, &theme, config.enable_emoji, config.chart_width);
        print!("{}", output);
    }

    // In JSON mode the failure travels inside the JSON itself, so the exit
    // code stays zero for the consuming process.
    if !result.success && !cli.json {
        std::process::exit(1);
    }

    Ok(())
}

async fn run_translation(
    engine: &dyn TranslationEngine,
    request: &TranslationRequest,
) -> TranslationResult {
    translate_text(engine, request).await
}

fn make_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape sequence: clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
    std::io::Write::flush(&mut std::io::stdout()).ok();
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(config: &config::Config) {
    println!("{}", "tarjama Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    println!("General model: {}", config.models.general);
    match &config.models.local {
        Some(path) => println!("Local model: {}", path),
        None => println!("Local model: Not configured"),
    }
    println!("Default model: {}", config.models.default);
    println!("Worker command: {}", config.worker.command);
    println!("Theme: {}", config.theme);
}
