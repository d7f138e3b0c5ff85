use serde::{Deserialize, Serialize};

// One translation request, created per user action and discarded after use.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub model_identifier: String,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, model_identifier: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            model_identifier: model_identifier.into(),
        }
    }
}

/// Raw output of one generation call, handed over by the model runtime.
///
/// `token_ids` and `tokens` are parallel and include the leading start marker.
/// `per_step_scores` holds one row per generated position (so one fewer row
/// than tokens), one column per vocabulary entry; row `i` is the distribution
/// used to pick token `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub token_ids: Vec<u32>,
    pub tokens: Vec<String>,
    pub per_step_scores: Vec<Vec<f32>>,
    /// Detokenized text with special tokens stripped.
    pub decoded: String,
    /// Control tokens (padding, sequence boundaries) to exclude from words.
    pub special_tokens: Vec<String>,
}

// One reassembled word with its averaged confidence percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordConfidence {
    pub word: String,
    pub confidence: u8, // 0..=100
}

/// The sole object crossing the process boundary, immutable once produced.
///
/// Serialized shape matches the worker protocol exactly: absent fields are
/// omitted, so a failure carries only `success` and `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_confidence: Option<Vec<WordConfidence>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn ok(translation: String, word_confidence: Vec<WordConfidence>, overall: u8) -> Self {
        Self {
            success: true,
            translation: Some(translation),
            word_confidence: Some(word_confidence),
            overall_confidence: Some(overall),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            translation: None,
            word_confidence: None,
            overall_confidence: None,
            error: Some(error.into()),
        }
    }
}
