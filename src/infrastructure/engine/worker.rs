use crate::domain::error::TarjamaError;
use crate::domain::model::{TranslationRequest, TranslationResult};
use crate::domain::traits::TranslationEngine;
use async_trait::async_trait;
use tokio::process::Command;

/// Fixed message for unparseable worker output.
const PARSE_ERROR: &str = "Failed to parse translator output";

/// Engine that shells out to an external translator command per request.
///
/// The command receives the source text and `--model <id>` as trailing
/// arguments and must emit exactly one JSON line matching the
/// `TranslationResult` shape. Each invocation loads model weights fresh and
/// terminates; there is no shared state between requests.
pub struct WorkerEngine {
    argv: Vec<String>,
}

impl WorkerEngine {
    /// Build from a command string (e.g. "python3 translator.py").
    pub fn from_command(command: &str) -> Result<Self, TarjamaError> {
        let argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        if argv.is_empty() {
            return Err(TarjamaError::Config(
                "worker command is empty".to_string(),
            ));
        }
        Ok(Self { argv })
    }
}

#[async_trait]
impl TranslationEngine for WorkerEngine {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TarjamaError> {
        let mut cmd = Command::new(&self.argv[0]);
        if self.argv.len() > 1 {
            cmd.args(&self.argv[1..]);
        }
        cmd.arg(&request.source_text)
            .arg("--model")
            .arg(&request.model_identifier);

        tracing::debug!(command = %self.argv.join(" "), "spawning translator worker");

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => {
                // Missing binary and similar spawn failures are reported to
                // the user as a failed result, not a crash.
                return Ok(TranslationResult::fail(format!("Unexpected error: {}", e)));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Ok(TranslationResult::fail(format!(
                "Process error: {}",
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().next().unwrap_or_default();
        match serde_json::from_str::<TranslationResult>(line) {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::warn!(error = %e, "worker emitted malformed output");
                Ok(TranslationResult::fail(PARSE_ERROR))
            }
        }
    }
}
