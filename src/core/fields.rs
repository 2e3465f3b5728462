use super::schema::{EventType, FieldType, FormField};

/// The six per-participant attributes, in tier order (identity, contact,
/// academic).
pub const PARTICIPANT_ATTRIBUTES: [&str; 6] = [
    "Full Name",
    "Email ID",
    "Phone Number",
    "Enrollment Number",
    "Course",
    "Institute Name",
];

/// Rule table for contextual field typing: a label containing one of these
/// fragments (after normalization) maps to the given type instead of
/// free text.
pub const CONTEXT_RULES: &[(&str, FieldType)] = &[
    ("screenshot", FieldType::FileUpload),
    ("upload", FieldType::FileUpload),
    ("resume", FieldType::FileUpload),
    ("receipt", FieldType::FileUpload),
    ("paymentproof", FieldType::FileUpload),
    ("idcard", FieldType::FileUpload),
    ("accommodation", FieldType::Checkbox),
    ("consent", FieldType::Checkbox),
    ("iagree", FieldType::Checkbox),
    ("individualparticipation", FieldType::Checkbox),
    ("willingto", FieldType::Checkbox),
];

/// Labels that identify participant-tier fields the engine regenerates
/// itself, so model echoes of them are discarded from the custom tier.
const PARTICIPANT_ALIASES: &[&str] = &[
    "fullname",
    "name",
    "email",
    "emailid",
    "emailaddress",
    "phone",
    "phonenumber",
    "mobile",
    "mobilenumber",
    "contactnumber",
    "enrollmentnumber",
    "rollnumber",
    "enrollmentrollnumber",
    "registrationnumber",
    "course",
    "coursebranch",
    "branch",
    "institutename",
    "institute",
    "institution",
    "college",
    "collegename",
    "university",
];

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Case-insensitive, typo-tolerant label comparison: exact normalized match,
/// containment, or a small edit distance for labels long enough that two
/// edits cannot turn one word into another.
pub fn labels_match(a: &str, b: &str) -> bool {
    let (na, nb) = (normalize_label(a), normalize_label(b));
    if na.is_empty() || nb.is_empty() {
        return false;
    }
    if na == nb || na.contains(&nb) || nb.contains(&na) {
        return true;
    }
    if na.len() >= 5 && nb.len() >= 5 && levenshtein(&na, &nb) <= 2 {
        return true;
    }
    // A misspelled prefix of a longer label ("github profle" against
    // "GitHub Profile URL") still counts. Normalized labels are ASCII.
    let (short, long) = if na.len() <= nb.len() { (&na, &nb) } else { (&nb, &na) };
    short.len() >= 6 && levenshtein(short, &long[..short.len()]) <= 2
}

/// Contextual type inference for a custom field name.
pub fn infer_field_type(label: &str) -> FieldType {
    let normalized = normalize_label(label);
    for (fragment, field_type) in CONTEXT_RULES {
        if normalized.contains(fragment) {
            return *field_type;
        }
    }
    FieldType::ShortAnswer
}

fn is_participant_label(label: &str) -> bool {
    let normalized = normalize_label(label);
    let rest = if let Some(rest) = normalized.strip_prefix("teamleader") {
        rest
    } else if let Some(rest) = normalized.strip_prefix("member") {
        rest.trim_start_matches(|c: char| c.is_ascii_digit())
    } else {
        normalized.as_str()
    };
    PARTICIPANT_ALIASES.contains(&rest)
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn section_header(label: String) -> FormField {
    FormField::new(label, FieldType::SectionHeader, false)
}

fn participant_block(prefix: Option<&str>, required: bool) -> impl Iterator<Item = FormField> {
    let prefix = prefix.map(str::to_string);
    PARTICIPANT_ATTRIBUTES.into_iter().map(move |attr| {
        let label = match &prefix {
            Some(p) => format!("{p} - {attr}"),
            None => attr.to_string(),
        };
        FormField::new(label, FieldType::ShortAnswer, required)
    })
}

/// Compute the complete ordered field list for an event.
///
/// `candidates` are event-specific fields proposed by the generation backend
/// (participant-tier echoes and section headers among them are discarded);
/// `custom_names` and `required_names` are the user's hint lists. The result
/// is a total order: participant tiers, then custom fields, then checkboxes
/// and file-reference fields last.
pub fn expand_fields(
    event_type: EventType,
    min_participants: u32,
    max_participants: u32,
    candidates: &[FormField],
    custom_names: &[String],
    required_names: &[String],
) -> Vec<FormField> {
    let mut out: Vec<FormField> = Vec::new();

    match event_type {
        EventType::Solo => out.extend(participant_block(None, true)),
        EventType::Team => {
            out.push(section_header("Team Leader Details".to_string()));
            out.extend(participant_block(Some("Team Leader"), true));
            for n in 2..=max_participants {
                let required = n <= min_participants;
                let prefix = format!("Member {n}");
                out.push(section_header(format!("Member {n} Details")));
                out.extend(participant_block(Some(prefix.as_str()), required));
            }
        }
    }

    let mut custom: Vec<FormField> = Vec::new();
    for candidate in candidates {
        if candidate.field_type == FieldType::SectionHeader
            || is_participant_label(&candidate.label)
            || custom.iter().any(|f| labels_match(&f.label, &candidate.label))
        {
            continue;
        }
        let mut field = candidate.clone();
        if field.field_type == FieldType::ShortAnswer {
            field.field_type = infer_field_type(&field.label);
        }
        custom.push(field);
    }

    for name in custom_names {
        let name = name.trim();
        if name.is_empty() || is_participant_label(name) {
            continue;
        }
        if !custom.iter().any(|f| labels_match(&f.label, name)) {
            custom.push(FormField::new(title_case(name), infer_field_type(name), false));
        }
    }

    for name in required_names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match custom.iter_mut().find(|f| labels_match(&f.label, name)) {
            Some(field) => field.required = true,
            None => custom.push(FormField::new(title_case(name), infer_field_type(name), true)),
        }
    }

    let mut checkboxes = Vec::new();
    let mut uploads = Vec::new();
    for field in custom {
        match field.field_type {
            FieldType::Checkbox => checkboxes.push(field),
            FieldType::FileUpload => uploads.push(field),
            _ => out.push(field),
        }
    }

    if event_type == EventType::Team
        && !checkboxes
            .iter()
            .any(|f| labels_match(&f.label, "Individual Participation"))
    {
        checkboxes.push(FormField::new(
            "Individual Participation",
            FieldType::Checkbox,
            false,
        ));
    }

    out.extend(checkboxes);
    out.extend(uploads);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(fields: &[FormField]) -> Vec<&str> {
        fields.iter().map(|f| f.label.as_str()).collect()
    }

    #[test]
    fn solo_event_gets_one_required_identity_block() {
        let fields = expand_fields(EventType::Solo, 1, 1, &[], &[], &[]);
        assert_eq!(labels(&fields), PARTICIPANT_ATTRIBUTES.to_vec());
        assert!(fields.iter().all(|f| f.required));
    }

    #[test]
    fn team_two_to_four_marks_member_two_required_and_rest_optional() {
        let fields = expand_fields(EventType::Team, 2, 4, &[], &[], &[]);

        // Leader header + 6, three member headers + 6 each, plus the
        // individual-participation checkbox.
        assert_eq!(fields.len(), 7 + 3 * 7 + 1);

        let leader = &fields[1..7];
        assert!(leader.iter().all(|f| f.required));
        assert!(leader.iter().all(|f| f.label.starts_with("Team Leader - ")));

        let member = |n: u32| &fields[(7 * n as usize - 6)..(7 * n as usize)];
        assert!(member(2).iter().all(|f| f.required));
        assert!(member(3).iter().all(|f| !f.required));
        assert!(member(4).iter().all(|f| !f.required));
        assert_eq!(fields[7].label, "Member 2 Details");
        assert_eq!(fields[7].field_type, FieldType::SectionHeader);
    }

    #[test]
    fn equal_min_and_max_leaves_no_optional_member_blocks() {
        let fields = expand_fields(EventType::Team, 3, 3, &[], &[], &[]);
        assert!(
            fields
                .iter()
                .filter(|f| f.field_type != FieldType::SectionHeader)
                .filter(|f| f.label.starts_with("Member") || f.label.starts_with("Team Leader"))
                .all(|f| f.required)
        );
    }

    #[test]
    fn custom_fields_follow_participant_blocks_and_uploads_go_last() {
        let candidates = vec![
            FormField::new("Payment Screenshot", FieldType::ShortAnswer, false),
            FormField::new("Preferred Track", FieldType::ShortAnswer, false),
            FormField::new("Need Accommodation", FieldType::ShortAnswer, false),
        ];
        let fields = expand_fields(EventType::Solo, 1, 1, &candidates, &[], &[]);
        let tail = labels(&fields)[6..].to_vec();
        assert_eq!(
            tail,
            vec!["Preferred Track", "Need Accommodation", "Payment Screenshot"]
        );
        assert_eq!(fields[7].field_type, FieldType::Checkbox);
        assert_eq!(fields[8].field_type, FieldType::FileUpload);
    }

    #[test]
    fn model_echoes_of_participant_fields_are_discarded() {
        let candidates = vec![
            FormField::new("Full Name", FieldType::ShortAnswer, true),
            FormField::new("Team Leader - Email ID", FieldType::ShortAnswer, true),
            FormField::new("Member 2 - Phone Number", FieldType::ShortAnswer, false),
            FormField::new("Team Leader Details", FieldType::SectionHeader, false),
            FormField::new("T-shirt Size", FieldType::ShortAnswer, false),
        ];
        let fields = expand_fields(EventType::Solo, 1, 1, &candidates, &[], &[]);
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[6].label, "T-shirt Size");
    }

    #[test]
    fn required_names_override_matching_custom_fields_fuzzily() {
        let candidates = vec![FormField::new(
            "GitHub Profile URL",
            FieldType::ShortAnswer,
            false,
        )];
        let fields = expand_fields(
            EventType::Solo,
            1,
            1,
            &candidates,
            &[],
            &["github profle".to_string()],
        );
        let github = fields.iter().find(|f| f.label.contains("GitHub")).unwrap();
        assert!(github.required);
    }

    #[test]
    fn unmatched_required_names_are_synthesized() {
        let fields = expand_fields(
            EventType::Solo,
            1,
            1,
            &[],
            &[],
            &["project abstract".to_string()],
        );
        let synthesized = fields.last().unwrap();
        assert_eq!(synthesized.label, "Project Abstract");
        assert_eq!(synthesized.field_type, FieldType::ShortAnswer);
        assert!(synthesized.required);
    }

    #[test]
    fn custom_name_hints_are_added_once() {
        let candidates = vec![FormField::new("T-shirt Size", FieldType::ShortAnswer, false)];
        let fields = expand_fields(
            EventType::Solo,
            1,
            1,
            &candidates,
            &["tshirt size".to_string(), "dietary preference".to_string()],
            &[],
        );
        let tail = labels(&fields)[6..].to_vec();
        assert_eq!(tail, vec!["T-shirt Size", "Dietary Preference"]);
    }

    #[test]
    fn team_events_get_an_optional_individual_participation_checkbox() {
        let fields = expand_fields(EventType::Team, 1, 2, &[], &[], &[]);
        let checkbox = fields.last().unwrap();
        assert_eq!(checkbox.label, "Individual Participation");
        assert_eq!(checkbox.field_type, FieldType::Checkbox);
        assert!(!checkbox.required);
    }

    #[test]
    fn context_rules_type_uploads_and_checkboxes() {
        assert_eq!(infer_field_type("Payment Screenshot"), FieldType::FileUpload);
        assert_eq!(infer_field_type("Need Accommodation"), FieldType::Checkbox);
        assert_eq!(infer_field_type("Preferred Track"), FieldType::ShortAnswer);
    }

    #[test]
    fn label_matching_tolerates_case_and_typos() {
        assert!(labels_match("T-shirt Size", "tshirt size"));
        assert!(labels_match("Dietary Preference", "dieatry preference"));
        assert!(!labels_match("Course", "Phone Number"));
    }
}
