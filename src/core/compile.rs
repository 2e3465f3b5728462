use serde::Serialize;

use super::schema::{FieldType, FormField, FormSchema};

/// Wording appended to the help text of a file-reference field. The form
/// backend cannot create native upload questions through its API, so the
/// field is compiled to a paragraph question asking for a shareable link.
pub const LINK_INSTRUCTION: &str =
    "Please paste a shareable link to your uploaded file (Google Drive, Imgur or similar).";

// ── Form-builder batchUpdate wire types ──

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub create_item: CreateItem,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateItem {
    pub item: Item,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Location {
    pub index: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_break_item: Option<PageBreakItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_item: Option<QuestionItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageBreakItem {}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionItem {
    pub question: Question,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_question: Option<TextQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_question: Option<ChoiceQuestion>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextQuestion {
    pub paragraph: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoiceQuestion {
    #[serde(rename = "type")]
    pub choice_type: String,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoiceOption {
    pub value: String,
}

fn text_item(field: &FormField, paragraph: bool, description: String) -> Item {
    Item {
        title: field.label.clone(),
        description,
        page_break_item: None,
        question_item: Some(QuestionItem {
            question: Question {
                required: field.required,
                text_question: Some(TextQuestion { paragraph }),
                choice_question: None,
            },
        }),
    }
}

fn build_item(field: &FormField) -> Item {
    let description = field.description.clone().unwrap_or_default();
    match field.field_type {
        FieldType::SectionHeader => Item {
            title: field.label.clone(),
            description,
            page_break_item: Some(PageBreakItem {}),
            question_item: None,
        },
        FieldType::ShortAnswer => text_item(field, false, description),
        FieldType::FileUpload => {
            let description = if description.is_empty() {
                LINK_INSTRUCTION.to_string()
            } else {
                format!("{description}\n{LINK_INSTRUCTION}")
            };
            text_item(field, true, description)
        }
        FieldType::Checkbox => Item {
            title: field.label.clone(),
            description,
            page_break_item: None,
            question_item: Some(QuestionItem {
                question: Question {
                    required: field.required,
                    text_question: None,
                    choice_question: Some(ChoiceQuestion {
                        choice_type: "CHECKBOX".to_string(),
                        options: vec![ChoiceOption {
                            value: "Yes".to_string(),
                        }],
                    }),
                },
            }),
        },
    }
}

/// Map a canonical schema to an ordered sequence of create-item operations,
/// one per field, with gapless monotone indices. Pure: nothing remote
/// happens here.
pub fn compile_items(schema: &FormSchema) -> Vec<CreateItemRequest> {
    schema
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| CreateItemRequest {
            create_item: CreateItem {
                item: build_item(field),
                location: Location {
                    index: index as u32,
                },
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{EventType, FormField};

    fn schema_with(fields: Vec<FormField>) -> FormSchema {
        FormSchema {
            title: "T".into(),
            description: String::new(),
            event_type: EventType::Solo,
            min_participants: 1,
            max_participants: 1,
            fields,
        }
    }

    #[test]
    fn indices_are_gapless_and_monotone() {
        let schema = schema_with(vec![
            FormField::new("Header", FieldType::SectionHeader, false),
            FormField::new("Name", FieldType::ShortAnswer, true),
            FormField::new("Consent", FieldType::Checkbox, false),
        ]);
        let items = compile_items(&schema);
        let indices: Vec<u32> = items.iter().map(|r| r.create_item.location.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn section_header_compiles_to_page_break() {
        let schema = schema_with(vec![FormField::new(
            "Team Leader Details",
            FieldType::SectionHeader,
            false,
        )]);
        let item = &compile_items(&schema)[0].create_item.item;
        assert!(item.page_break_item.is_some());
        assert!(item.question_item.is_none());
    }

    #[test]
    fn short_answer_is_a_single_line_question_with_required_flag() {
        let schema = schema_with(vec![FormField::new("Full Name", FieldType::ShortAnswer, true)]);
        let item = &compile_items(&schema)[0].create_item.item;
        let question = &item.question_item.as_ref().unwrap().question;
        assert!(question.required);
        assert_eq!(question.text_question, Some(TextQuestion { paragraph: false }));
    }

    #[test]
    fn checkbox_is_a_single_yes_option() {
        let schema = schema_with(vec![FormField::new(
            "Need Accommodation",
            FieldType::Checkbox,
            false,
        )]);
        let item = &compile_items(&schema)[0].create_item.item;
        let choice = item
            .question_item
            .as_ref()
            .unwrap()
            .question
            .choice_question
            .as_ref()
            .unwrap();
        assert_eq!(choice.choice_type, "CHECKBOX");
        assert_eq!(choice.options.len(), 1);
        assert_eq!(choice.options[0].value, "Yes");
    }

    #[test]
    fn file_upload_becomes_paragraph_question_asking_for_a_link() {
        let mut field = FormField::new("Payment Screenshot", FieldType::FileUpload, true);
        field.description = Some("JPEG or PNG.".into());
        let schema = schema_with(vec![field]);
        let item = &compile_items(&schema)[0].create_item.item;
        let question = &item.question_item.as_ref().unwrap().question;
        assert!(question.required);
        assert_eq!(question.text_question, Some(TextQuestion { paragraph: true }));
        assert!(item.description.starts_with("JPEG or PNG.\n"));
        assert!(item.description.contains("shareable link"));
    }

    #[test]
    fn wire_shape_matches_the_batch_update_contract() {
        let schema = schema_with(vec![FormField::new("Name", FieldType::ShortAnswer, true)]);
        let json = serde_json::to_value(&compile_items(&schema)).unwrap();
        assert_eq!(
            json[0]["createItem"]["item"]["questionItem"]["question"]["textQuestion"]["paragraph"],
            false
        );
        assert_eq!(json[0]["createItem"]["location"]["index"], 0);
    }
}
