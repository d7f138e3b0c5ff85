use crate::domain::error::TarjamaError;
use crate::domain::model::{GenerationOutput, TranslationRequest, TranslationResult};
use async_trait::async_trait;

/// Trait for translation engines
///
/// An engine turns a request into a structured result. Implementations can be
/// swapped without changing the calling code: an in-process engine over a
/// model runtime, or a worker engine that shells out to an external command.
#[async_trait]
pub trait TranslationEngine {
    /// Run one translation request to completion.
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TarjamaError>;
}

/// Trait for model runtimes
///
/// The runtime owns model loading, tokenization and generation; this crate
/// only consumes its output. Weights are loaded fresh per call, there is no
/// caching layer.
#[async_trait]
pub trait Generator {
    /// Generate a translation for `text`, returning the token sequence and
    /// per-step score matrix.
    async fn generate(&self, text: &str) -> Result<GenerationOutput, TarjamaError>;
}
