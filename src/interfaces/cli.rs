use clap::Parser;

#[derive(Parser)]
#[command(name = "tarjama")]
#[command(about = "Spanish to Arabic translation with per-word confidence scores.")]
#[command(version)]
pub struct Cli {
    /// Model to use: "general", "local", or an explicit model path
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Output the result as a single JSON line
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Spanish text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
