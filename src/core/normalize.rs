use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::DeriveError;
use super::schema::{EventType, FieldType, FormField, FormSchema};

/// A candidate schema as the generation backend produced it. Every field is
/// permissive so the normalizer can repair type drift instead of failing on
/// deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSchema {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<Value>,
    pub min_participants: Option<Value>,
    pub max_participants: Option<Value>,
    pub fields: Option<Value>,
}

fn positive_int(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                (i >= 1).then(|| u32::try_from(i).unwrap_or(u32::MAX))
            } else {
                let f = n.as_f64()?;
                (f >= 1.0 && f.fract() == 0.0).then(|| f as u32)
            }
        }
        _ => None,
    }
}

fn numeric(value: Option<&Value>) -> Option<f64> {
    value?.as_f64()
}

fn parse_field(value: &Value) -> Option<FormField> {
    let obj = value.as_object()?;
    let label = obj.get("label")?.as_str()?.trim();
    if label.is_empty() {
        return None;
    }
    let field_type = match obj.get("type")?.as_str()? {
        "SHORT_ANSWER" => FieldType::ShortAnswer,
        "CHECKBOX" => FieldType::Checkbox,
        "FILE_UPLOAD" => FieldType::FileUpload,
        "SECTION_HEADER" => FieldType::SectionHeader,
        other => {
            debug!("dropping field {label:?} with unknown type {other:?}");
            return None;
        }
    };
    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from);
    Some(FormField {
        label: label.to_string(),
        field_type,
        required: obj.get("required").and_then(Value::as_bool).unwrap_or(false),
        description,
    })
}

/// Coerce a candidate schema into canonical form. Count and event-type drift
/// is repaired; a missing title or a non-array `fields` value means the
/// generation step produced an unusable result and is reported as such.
pub fn normalize(raw: RawSchema) -> Result<FormSchema, DeriveError> {
    let title = raw
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            DeriveError::backend("Generation response missing required fields (title, fields).")
        })?
        .to_string();

    let field_values = raw
        .fields
        .as_ref()
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DeriveError::backend("Generation response missing required fields (title, fields).")
        })?;

    let fields: Vec<FormField> = field_values.iter().filter_map(parse_field).collect();

    // Rule 1: invalid event type falls back to whatever the raw max implies.
    let declared = raw
        .event_type
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| match s {
            "SOLO" => Some(EventType::Solo),
            "TEAM" => Some(EventType::Team),
            _ => None,
        });
    let mut event_type = declared.unwrap_or_else(|| {
        if numeric(raw.max_participants.as_ref()).is_some_and(|m| m > 1.0) {
            EventType::Team
        } else {
            EventType::Solo
        }
    });

    // Rules 2-4: repair counts, then clamp.
    let max_participants = positive_int(raw.max_participants.as_ref()).unwrap_or(1);
    let mut min_participants = positive_int(raw.min_participants.as_ref()).unwrap_or(1);
    if min_participants > max_participants {
        min_participants = max_participants;
    }

    // The canonical invariant is SOLO iff max == 1; the counts win over a
    // contradicting label.
    let consistent = if max_participants == 1 {
        EventType::Solo
    } else {
        EventType::Team
    };
    if event_type != consistent {
        debug!("repairing eventType {event_type:?} to match maxParticipants {max_participants}");
        event_type = consistent;
    }

    Ok(FormSchema {
        title,
        description: raw.description.unwrap_or_default(),
        event_type,
        min_participants,
        max_participants,
        fields,
    })
}
