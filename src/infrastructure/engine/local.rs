use crate::application::confidence;
use crate::domain::error::TarjamaError;
use crate::domain::model::{TranslationRequest, TranslationResult};
use crate::domain::traits::{Generator, TranslationEngine};
use async_trait::async_trait;

/// In-process engine over a model runtime.
///
/// Replaces the subprocess-per-request pattern with a direct call into a
/// `Generator` followed by confidence derivation. Runtime failures (model
/// load, tokenization, generation) surface as a failed result.
pub struct LocalEngine {
    generator: Box<dyn Generator + Send + Sync>,
}

impl LocalEngine {
    pub fn new(generator: Box<dyn Generator + Send + Sync>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl TranslationEngine for LocalEngine {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TarjamaError> {
        let output = match self.generator.generate(&request.source_text).await {
            Ok(output) => output,
            Err(e) => return Ok(TranslationResult::fail(e.to_string())),
        };

        match confidence::derive(&output) {
            Ok(result) => Ok(result),
            Err(e) => Ok(TranslationResult::fail(e.to_string())),
        }
    }
}
