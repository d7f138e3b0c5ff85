use crate::domain::error::TarjamaError;
use crate::domain::model::{GenerationOutput, TranslationResult, WordConfidence};

/// Prefix marking a subword fragment that attaches to the preceding token.
const CONTINUATION_PREFIX: &str = "##";

/// Turn one generation output into a display-ready result.
///
/// Single pass: log-softmax each score row, pick the log-probability of the
/// chosen token at every step, convert to integer percentages, drop the start
/// marker and control tokens, then reassemble subword fragments into words
/// with a running confidence average.
pub fn derive(output: &GenerationOutput) -> Result<TranslationResult, TarjamaError> {
    let log_probs = chosen_log_probs(output)?;
    let scores: Vec<u8> = log_probs.iter().map(|&lp| token_confidence(lp)).collect();

    // The first token is a fixed start marker with no score row; skip it so
    // tokens and scores line up one-to-one.
    let generated = output.tokens.iter().skip(1).map(String::as_str);
    let pairs: Vec<(&str, u8)> = generated
        .zip(scores)
        .filter(|&(token, _)| !output.special_tokens.iter().any(|s| s.as_str() == token))
        .collect();

    let words = merge_subwords(&pairs);
    let overall = overall_confidence(&words);

    tracing::debug!(
        tokens = output.tokens.len(),
        words = words.len(),
        overall,
        "confidence derived"
    );

    Ok(TranslationResult::ok(output.decoded.clone(), words, overall))
}

/// Log-probability of the chosen token at each generated position:
/// `row_i[token_ids[i + 1]]` after a log-softmax over the vocabulary axis.
fn chosen_log_probs(output: &GenerationOutput) -> Result<Vec<f32>, TarjamaError> {
    if output.token_ids.len() != output.tokens.len() {
        return Err(TarjamaError::Derive(format!(
            "token ids and tokens differ in length: {} vs {}",
            output.token_ids.len(),
            output.tokens.len()
        )));
    }
    if output.token_ids.is_empty()
        || output.per_step_scores.len() != output.token_ids.len() - 1
    {
        return Err(TarjamaError::Derive(format!(
            "expected {} score rows for {} tokens, got {}",
            output.token_ids.len().saturating_sub(1),
            output.token_ids.len(),
            output.per_step_scores.len()
        )));
    }

    output
        .per_step_scores
        .iter()
        .zip(output.token_ids.iter().skip(1))
        .map(|(row, &chosen)| {
            let log_probs = log_softmax_row(row);
            log_probs.get(chosen as usize).copied().ok_or_else(|| {
                TarjamaError::Derive(format!(
                    "chosen token id {} out of range for vocabulary of {}",
                    chosen,
                    row.len()
                ))
            })
        })
        .collect()
}

/// Numerically stable log-softmax over one vocabulary row.
fn log_softmax_row(scores: &[f32]) -> Vec<f32> {
    if scores.is_empty() {
        return Vec::new();
    }

    let max_score = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let sum_exp: f64 = scores.iter().map(|&x| ((x - max_score) as f64).exp()).sum();
    let log_denom = if sum_exp > 0.0 && sum_exp.is_finite() {
        max_score + sum_exp.ln() as f32
    } else {
        f32::INFINITY
    };

    scores.iter().map(|&x| x - log_denom).collect()
}

/// Percentage shown for one generated token.
///
/// Note the inversion: low probability mass on the chosen token displays as
/// high confidence. This reproduces the model demo's original formula, which
/// is kept as-is rather than the `exp(log_p) * 100` reading.
fn token_confidence(log_p: f32) -> u8 {
    let pct = (1.0 - (log_p as f64).exp()) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

/// Reassemble subword fragments into whole words.
///
/// A `##`-prefixed token appends to the current word and folds its score into
/// a running average; any other token flushes the current word and starts a
/// new one seeded with its own score.
fn merge_subwords(pairs: &[(&str, u8)]) -> Vec<WordConfidence> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut average = 0.0f64;
    let mut fragments = 0u32;

    for &(token, score) in pairs {
        if let Some(fragment) = token.strip_prefix(CONTINUATION_PREFIX) {
            current.push_str(fragment);
            average = (average * f64::from(fragments) + f64::from(score))
                / f64::from(fragments + 1);
            fragments += 1;
        } else {
            flush_word(&mut words, &mut current, average);
            current.push_str(token);
            average = f64::from(score);
            fragments = 1;
        }
    }
    flush_word(&mut words, &mut current, average);

    words
}

fn flush_word(words: &mut Vec<WordConfidence>, current: &mut String, average: f64) {
    if current.is_empty() {
        return;
    }
    words.push(WordConfidence {
        word: std::mem::take(current),
        confidence: average.round().clamp(0.0, 100.0) as u8,
    });
}

/// Arithmetic mean of the per-word confidences, 0 when there are no words.
fn overall_confidence(words: &[WordConfidence]) -> u8 {
    if words.is_empty() {
        return 0;
    }
    let sum: u32 = words.iter().map(|w| u32::from(w.confidence)).sum();
    (f64::from(sum) / words.len() as f64).round() as u8
}
