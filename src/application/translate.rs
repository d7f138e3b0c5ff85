use crate::domain::model::{TranslationRequest, TranslationResult};
use crate::domain::traits::TranslationEngine;

/// Run one request against an engine.
///
/// Errors are terminal for the request and never propagate as a crash: any
/// engine failure is folded into a `success = false` result with its message.
pub async fn translate_text(
    engine: &dyn TranslationEngine,
    request: &TranslationRequest,
) -> TranslationResult {
    tracing::debug!(
        model = %request.model_identifier,
        chars = request.source_text.len(),
        "translation requested"
    );

    match engine.translate(request).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "translation failed");
            TranslationResult::fail(e.to_string())
        }
    }
}
