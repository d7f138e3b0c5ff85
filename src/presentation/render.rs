use crate::domain::model::{TranslationResult, WordConfidence};
use crate::presentation::theme::{Theme, Tier};

/// Format a result as a string for terminal display.
///
/// Pure rendering over the result: a banner with the overall confidence, the
/// Arabic text, one labeled block per word colored by tier, then a horizontal
/// bar chart. Failures render the error string and nothing else.
pub fn format_result(
    result: &TranslationResult,
    theme: &Theme,
    enable_emoji: bool,
    chart_width: usize,
) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    if !result.success {
        let prefix = if enable_emoji { "✘ " } else { "" };
        let message = result.error.as_deref().unwrap_or("Unknown error");
        writeln!(
            output,
            "{}",
            (theme.error)(&format!("{}Translation failed: {}", prefix, message))
        )
        .ok();
        return output;
    }

    let overall = result.overall_confidence.unwrap_or(0);
    let banner_prefix = if enable_emoji { "🌍 " } else { "" };
    writeln!(
        output,
        "{}",
        (theme.banner)(&format!(
            "{}Translation complete with {}% overall confidence",
            banner_prefix, overall
        ))
    )
    .ok();

    if let Some(translation) = &result.translation {
        writeln!(output).ok();
        writeln!(output, "{}", (theme.title)("Arabic Translation")).ok();
        writeln!(output, "  {}", (theme.translation)(translation)).ok();
    }

    if let Some(words) = &result.word_confidence {
        if !words.is_empty() {
            writeln!(output).ok();
            writeln!(output, "{}", (theme.title)("Word Confidence")).ok();
            writeln!(output, "  {}", format_word_blocks(words)).ok();
            writeln!(output).ok();

            let cutoff = "⸺".repeat(chart_width.max(10));
            writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
            write_chart(&mut output, words, theme, chart_width);
        }
    }

    writeln!(output).ok();
    output
}

/// One inline block per word: the word followed by its tier-colored percent.
fn format_word_blocks(words: &[WordConfidence]) -> String {
    words
        .iter()
        .map(|wc| {
            let tier = Tier::of(wc.confidence);
            format!("{} {}", wc.word, tier.paint(&format!("{}%", wc.confidence)))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Horizontal bar chart, one row per word, bar length proportional to
/// confidence and colored by tier.
fn write_chart(output: &mut String, words: &[WordConfidence], theme: &Theme, width: usize) {
    use std::fmt::Write;

    let width = width.max(10);
    let label_width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);

    for (i, wc) in words.iter().enumerate() {
        let filled = (usize::from(wc.confidence) * width).div_ceil(100);
        let bar = "█".repeat(filled);
        let tier = Tier::of(wc.confidence);
        writeln!(
            output,
            "  {}. {:<label_width$}  {} {}",
            (theme.idx)(&(i + 1).to_string()),
            wc.word,
            tier.paint(&bar),
            (theme.label)(&format!("{}%", wc.confidence)),
        )
        .ok();
    }
}
