use serde::{Deserialize, Serialize};

/// Closed set of form field types. Unknown wire values are rejected at the
/// boundary by serde rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "SHORT_ANSWER")]
    ShortAnswer,
    #[serde(rename = "CHECKBOX")]
    Checkbox,
    #[serde(rename = "FILE_UPLOAD")]
    FileUpload,
    #[serde(rename = "SECTION_HEADER")]
    SectionHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "SOLO")]
    Solo,
    #[serde(rename = "TEAM")]
    Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormField {
    pub fn new(label: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            label: label.into(),
            field_type,
            required,
            description: None,
        }
    }
}

/// Canonical form definition. Field order is semantically meaningful and
/// drives the rendered question order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_type: EventType,
    pub min_participants: u32,
    pub max_participants: u32,
    pub fields: Vec<FormField>,
}

pub const MAX_FIELDS: usize = 100;

impl FormSchema {
    /// Boundary validation for schemas arriving from outside (the UI lets
    /// users edit fields freely before submitting for materialization).
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Missing or empty \"title\".".to_string());
        }
        if self.fields.len() > MAX_FIELDS {
            return Err(format!("Too many fields (max {MAX_FIELDS})."));
        }
        if self.min_participants < 1 || self.max_participants < 1 {
            return Err("Participant counts must be at least 1.".to_string());
        }
        if self.min_participants > self.max_participants {
            return Err("minParticipants cannot exceed maxParticipants.".to_string());
        }
        for (i, field) in self.fields.iter().enumerate() {
            if field.label.trim().is_empty() {
                return Err(format!("Field {i}: missing or empty \"label\"."));
            }
        }
        Ok(())
    }
}
