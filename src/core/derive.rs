use regex::Regex;
use tracing::info;

use super::DeriveError;
use super::fields::expand_fields;
use super::normalize::{RawSchema, normalize};
use super::prompts;
use super::schema::FormSchema;
use crate::llm::{GenerationBackend, extract_json, generate_json_with_retry};

pub const MAX_TEXT_LEN: usize = 15000;
pub const MAX_HINT_LEN: usize = 2000;

/// Inputs are pasted from event pages and chat messages; markup tags carry
/// no signal for the model.
fn strip_markup(text: &str) -> String {
    Regex::new(r"<[^>]*>")
        .unwrap()
        .replace_all(text, "")
        .to_string()
}

fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Hint text is a free-form list; accept newlines, commas and semicolons as
/// separators.
pub fn parse_hint_names(hint: &str) -> Vec<String> {
    hint.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Derive a canonical schema from raw event text. The generation backend
/// supplies the title, description, participant bounds and event-specific
/// field candidates; the participant tiers and field order are rebuilt
/// deterministically afterwards.
pub async fn derive_schema(
    backend: &dyn GenerationBackend,
    text: &str,
    custom_hint: &str,
    required_hint: &str,
) -> Result<FormSchema, DeriveError> {
    if text.trim().is_empty() {
        return Err(DeriveError::client(
            "Request must include a non-empty \"text\" field.",
        ));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(DeriveError::client(format!(
            "Event text is too long (max {MAX_TEXT_LEN} characters)."
        )));
    }

    let text = strip_markup(text);
    if text.trim().is_empty() {
        return Err(DeriveError::client(
            "Event text contains no content after markup removal.",
        ));
    }
    let custom_hint = strip_markup(&clip(custom_hint, MAX_HINT_LEN));
    let required_hint = strip_markup(&clip(required_hint, MAX_HINT_LEN));

    let user_prompt = prompts::build_schema_user_prompt(&text, &custom_hint, &required_hint);
    let content = generate_json_with_retry(backend, prompts::SCHEMA_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|err| DeriveError::backend(format!("Generation backend call failed: {err}")))?;

    if content.trim().is_empty() {
        return Err(DeriveError::backend(
            "Generation backend returned an empty response.",
        ));
    }

    let json = extract_json(&content);
    let raw: RawSchema = serde_json::from_str(&json).map_err(|_| {
        DeriveError::backend(format!(
            "Generation backend returned invalid JSON: {}",
            clip(&json, 200)
        ))
    })?;

    let mut schema = normalize(raw)?;
    let expanded = expand_fields(
        schema.event_type,
        schema.min_participants,
        schema.max_participants,
        &schema.fields,
        &parse_hint_names(&custom_hint),
        &parse_hint_names(&required_hint),
    );
    schema.fields = expanded;
    info!(
        title = %schema.title,
        fields = schema.fields.len(),
        "derived form schema"
    );
    Ok(schema)
}
