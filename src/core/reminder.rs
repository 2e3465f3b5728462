use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::DeriveError;
use super::prompts;
use crate::llm::{GenerationBackend, extract_json, generate_json_with_retry};

pub const MAX_EVENT_NAME: usize = 200;
pub const MAX_ROUND_NAME: usize = 100;
pub const MAX_ROUNDS: usize = 20;
pub const MAX_SUBJECT: usize = 300;
pub const MAX_BODY: usize = 3000;

/// One discrete stage of an event, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round_name: String,
    /// Calendar date string, `YYYY-MM-DD` or RFC 3339.
    pub round_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// A generated reminder email, editable by the user before confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    pub round_name: String,
    #[serde(default)]
    pub round_date: String,
    pub subject: String,
    pub body: String,
}

/// Accepts `YYYY-MM-DD`, optionally with a time suffix (RFC 3339 or similar);
/// anything else is treated as unparseable.
pub fn parse_round_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed);
    }
    // Date with a time portion: take the calendar-date prefix.
    let prefix = date.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Client-side validation shared by preview and create.
pub fn validate_rounds(event_name: &str, rounds: &[RoundInfo]) -> Result<(), DeriveError> {
    if event_name.trim().is_empty() {
        return Err(DeriveError::client("Missing or empty \"eventName\"."));
    }
    if event_name.chars().count() > MAX_EVENT_NAME {
        return Err(DeriveError::client(format!(
            "Event name too long (max {MAX_EVENT_NAME} chars)."
        )));
    }
    if rounds.is_empty() {
        return Err(DeriveError::client("At least one round is required."));
    }
    if rounds.len() > MAX_ROUNDS {
        return Err(DeriveError::client(format!(
            "Too many rounds (max {MAX_ROUNDS})."
        )));
    }
    for (i, round) in rounds.iter().enumerate() {
        let n = i + 1;
        if round.round_name.trim().is_empty() {
            return Err(DeriveError::client(format!("Round {n}: missing \"roundName\".")));
        }
        if round.round_name.chars().count() > MAX_ROUND_NAME {
            return Err(DeriveError::client(format!(
                "Round {n}: name too long (max {MAX_ROUND_NAME})."
            )));
        }
        if parse_round_date(&round.round_date).is_none() {
            return Err(DeriveError::client(format!(
                "Round {n} (\"{}\"): missing or invalid date.",
                round.round_name
            )));
        }
    }
    Ok(())
}

/// Validation for confirmed drafts arriving at the create endpoint.
pub fn validate_drafts(event_name: &str, drafts: &[ReminderDraft]) -> Result<(), DeriveError> {
    if event_name.trim().is_empty() {
        return Err(DeriveError::client("Missing or empty \"eventName\"."));
    }
    if drafts.is_empty() {
        return Err(DeriveError::client("No reminder drafts provided."));
    }
    if drafts.len() > MAX_ROUNDS {
        return Err(DeriveError::client(format!(
            "Too many reminders (max {MAX_ROUNDS})."
        )));
    }
    for (i, draft) in drafts.iter().enumerate() {
        let n = i + 1;
        if draft.round_name.trim().is_empty()
            || draft.round_date.trim().is_empty()
            || draft.subject.trim().is_empty()
            || draft.body.trim().is_empty()
        {
            return Err(DeriveError::client(format!(
                "Reminder {n}: missing required fields."
            )));
        }
        if draft.subject.chars().count() > MAX_SUBJECT {
            return Err(DeriveError::client(format!(
                "Reminder {n}: subject too long (max {MAX_SUBJECT})."
            )));
        }
        if draft.body.chars().count() > MAX_BODY {
            return Err(DeriveError::client(format!(
                "Reminder {n}: body too long (max {MAX_BODY})."
            )));
        }
    }
    Ok(())
}

/// Keys tried, in order, when the model wraps its array in an object.
const ARRAY_KEYS: [&str; 4] = ["reminders", "data", "emails", "results"];

fn recover_array(parsed: &Value) -> Option<&Vec<Value>> {
    if let Some(array) = parsed.as_array() {
        return Some(array);
    }
    let object = parsed.as_object()?;
    for key in ARRAY_KEYS {
        if let Some(array) = object.get(key).and_then(Value::as_array)
            && !array.is_empty()
        {
            return Some(array);
        }
    }
    object
        .values()
        .find_map(|v| v.as_array().filter(|a| !a.is_empty()))
}

fn parse_drafts(content: &str, rounds: &[RoundInfo]) -> Result<Vec<ReminderDraft>, DeriveError> {
    let json = extract_json(content);
    let parsed: Value = serde_json::from_str(&json).map_err(|_| {
        DeriveError::backend("Generation backend returned invalid JSON for reminders.")
    })?;

    let array = recover_array(&parsed).ok_or_else(|| {
        DeriveError::backend("Generation backend returned zero reminder drafts. Please try again.")
    })?;

    let mut drafts = Vec::with_capacity(array.len());
    for value in array {
        let mut draft: ReminderDraft = serde_json::from_value(value.clone()).map_err(|_| {
            DeriveError::backend("Generation backend returned an incomplete reminder draft.")
        })?;
        if draft.round_name.trim().is_empty()
            || draft.subject.trim().is_empty()
            || draft.body.trim().is_empty()
        {
            return Err(DeriveError::backend(
                "Generation backend returned an incomplete reminder draft.",
            ));
        }
        // Models occasionally drop the date; restore it from the matching
        // input round.
        if draft.round_date.trim().is_empty()
            && let Some(round) = rounds.iter().find(|r| r.round_name == draft.round_name)
        {
            draft.round_date = round.round_date.clone();
        }
        drafts.push(draft);
    }
    if drafts.is_empty() {
        return Err(DeriveError::backend(
            "Generation backend returned zero reminder drafts. Please try again.",
        ));
    }
    Ok(drafts)
}

/// Produce one subject+body draft per round.
pub async fn generate_reminder_drafts(
    backend: &dyn GenerationBackend,
    event_name: &str,
    rounds: &[RoundInfo],
) -> Result<Vec<ReminderDraft>, DeriveError> {
    validate_rounds(event_name, rounds)?;

    let rounds_json = serde_json::to_string_pretty(rounds)
        .map_err(|err| DeriveError::backend(format!("Failed to encode rounds: {err}")))?;
    let user_prompt = prompts::build_reminder_user_prompt(event_name.trim(), &rounds_json);

    let content = generate_json_with_retry(backend, prompts::REMINDER_SYSTEM_PROMPT, &user_prompt)
        .await
        .map_err(|err| DeriveError::backend(format!("Generation backend call failed: {err}")))?;
    if content.trim().is_empty() {
        return Err(DeriveError::backend(
            "Generation backend returned an empty response.",
        ));
    }

    let drafts = parse_drafts(&content, rounds)?;
    info!(event = event_name, drafts = drafts.len(), "generated reminder drafts");
    Ok(drafts)
}
