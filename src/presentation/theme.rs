use colored::Colorize;

/// Confidence tier used for word blocks and chart bars.
///
/// Thresholds: above 75 is high, above 50 is medium, the rest is low. The
/// boundary values 75 and 50 belong to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn of(confidence: u8) -> Self {
        if confidence > 75 {
            Tier::High
        } else if confidence > 50 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Color a fragment by tier: green / orange (yellow on terminals) / red.
    pub fn paint(self, s: &str) -> String {
        match self {
            Tier::High => s.green().to_string(),
            Tier::Medium => s.yellow().to_string(),
            Tier::Low => s.red().to_string(),
        }
    }
}

pub struct Theme {
    pub title: fn(&str) -> String,
    pub translation: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub banner: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "sands" | "" => Self::sands(),
            "oasis" => Self::oasis(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::sands() // Fallback to default
            }
        }
    }

    fn sands() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            translation: |s| s.bright_white().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            label: |s| s.cyan().to_string(),
            banner: |s| s.green().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn oasis() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            translation: |s| s.bright_yellow().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            label: |s| s.green().italic().to_string(),
            banner: |s| s.bright_green().to_string(),
            error: |s| s.bright_red().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            translation: |s| s.black().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.cyan().to_string(),
            label: |s| s.bright_blue().to_string(),
            banner: |s| s.green().bold().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
