pub mod groq;

use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use crate::core::prompts::RAW_JSON_RETRY_SUFFIX;

/// Narrow contract over the language-model inference service. `json_mode`
/// asks the backend for a single JSON object; implementations must tolerate
/// being re-invoked without it.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, system: &str, user: &str, json_mode: bool) -> Result<String>;
}

/// Model output is untrusted text. Strip reasoning markup and any fenced
/// code-block wrapper before attempting to parse it as JSON.
pub fn extract_json(content: &str) -> String {
    let think = Regex::new(r"(?s)<think>.*?</think>").unwrap();
    let stripped = think.replace_all(content, "");
    let trimmed = stripped.trim();

    let fence = Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap();
    match fence.captures(trimmed) {
        Some(caps) => caps[1].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// One structured-output attempt, then a single retry with the format
/// requirement relaxed and an explicit raw-JSON-only instruction appended.
pub async fn generate_json_with_retry(
    backend: &dyn GenerationBackend,
    system: &str,
    user: &str,
) -> Result<String> {
    match backend.generate(system, user, true).await {
        Ok(content) => Ok(content),
        Err(err) => {
            warn!("generation call failed ({err}); retrying without structured output");
            let relaxed = format!("{system}{RAW_JSON_RETRY_SUFFIX}");
            backend.generate(&relaxed, user, false).await
        }
    }
}
