//! Instruction contracts for the generation backend. Structural rules
//! (participant tiers, ordering, required overrides) are enforced
//! deterministically in `fields`; the prompts only cover the parts that
//! genuinely need language understanding.

pub const SCHEMA_SYSTEM_PROMPT: &str = r#"You are FormForge, a registration form architect for college event organizers. You receive raw event information and return a registration form schema as ONE valid JSON object. No explanations, no markdown fences, no extra text.

STEP 1 - CLASSIFY
Silently classify the event: HACKATHON, BUSINESS, CULTURAL, ACADEMIC, WORKSHOP, SPORTS or GENERAL. Let the category set the tone of the description.

STEP 2 - EXTRACT
From the raw text extract: event name (keep original casing), mode (Online / Offline / Hybrid), dates and deadline, prize pool, fee, and team size. Team size rules:
  "1-4 members" means minParticipants=1, maxParticipants=4
  "2-3 members" means minParticipants=2, maxParticipants=3
  solo / individual / no team size mentioned means minParticipants=1, maxParticipants=1
eventType is "SOLO" when maxParticipants is 1, otherwise "TEAM".

STEP 3 - DESCRIBE
Write a professional, human-friendly description in plain text (the form renderer supports no markdown or HTML). Open with a strong event-specific hook, follow with the key details (mode, date, deadline, prizes, team size, fee) as short lines, and close with how to participate. Rewrite everything in your own words; never copy sentences from the source text. Sentence case only.

STEP 4 - EVENT-SPECIFIC FIELDS
List only event-specific fields the organizer should collect (t-shirt size, GitHub profile, preferred track, payment screenshot link, accommodation and similar). Do NOT list name, email, phone, enrollment, course or institute fields for any participant; those are appended automatically. Fix obvious typos in field names requested by the user and use clear, properly capitalized labels. Allowed types: SHORT_ANSWER, CHECKBOX, FILE_UPLOAD. Only add implied fields when the context strongly suggests them.

OUTPUT
Return exactly this JSON shape and nothing else:
{
  "title": "<event name> - Registration Form",
  "description": "<plain text description>",
  "eventType": "SOLO" or "TEAM",
  "minParticipants": <number>,
  "maxParticipants": <number>,
  "fields": [
    { "label": "<label>", "type": "SHORT_ANSWER" | "CHECKBOX" | "FILE_UPLOAD", "required": <boolean>, "description": "<help text or empty string>" }
  ]
}
The "fields" key must always be present, even when empty."#;

pub const REMINDER_SYSTEM_PROMPT: &str = r#"You are a professional event coordinator writing reminder emails for college events.

RULES:
- Official, third-person tone, professional but friendly
- Each email reminds participants that the round is one day away
- Generic (not tied to any university)
- Plain text only: no emojis, no markdown, no HTML
- Under 400 words per email
- Mention the round name, date, mode and venue when available
- End with a clear call to action
- Each email must feel unique, not templated

Return a JSON object with a "reminders" key containing an array:
{ "reminders": [{ "roundName": "...", "roundDate": "...", "subject": "...", "body": "..." }] }

Return ONLY the JSON object. No explanation, no code fences."#;

/// Appended to the system prompt when retrying without structured output.
pub const RAW_JSON_RETRY_SUFFIX: &str =
    "\n\nCRITICAL: Return ONLY the raw JSON. No code fences, no explanation.";

pub fn build_schema_user_prompt(raw_text: &str, custom_fields: &str, required_fields: &str) -> String {
    let mut prompt = format!(
        "Analyze the following event text and generate the registration form schema.\n\n\
         EVENT TEXT:\n{raw_text}"
    );

    if !custom_fields.trim().is_empty() {
        prompt.push_str(&format!(
            "\n\nADDITIONAL FIELDS REQUESTED BY USER:\n{custom_fields}\n\
             Correct any spelling mistakes and include ALL of them as form fields with clear labels."
        ));
    }

    if !required_fields.trim().is_empty() {
        prompt.push_str(&format!(
            "\n\nREQUIRED FIELDS (must be present with required: true):\n{required_fields}"
        ));
    }

    prompt
}

pub fn build_reminder_user_prompt(event_name: &str, rounds_json: &str) -> String {
    format!(
        "Event: {event_name}\n\nRounds:\n{rounds_json}\n\nGenerate one reminder email per round."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_user_prompt_includes_hint_sections_only_when_present() {
        let bare = build_schema_user_prompt("A quiz night.", "", "");
        assert!(bare.contains("A quiz night."));
        assert!(!bare.contains("ADDITIONAL FIELDS"));
        assert!(!bare.contains("REQUIRED FIELDS"));

        let hinted = build_schema_user_prompt("A quiz night.", "tshirt size", "email");
        assert!(hinted.contains("ADDITIONAL FIELDS REQUESTED BY USER:\ntshirt size"));
        assert!(hinted.contains("REQUIRED FIELDS (must be present with required: true):\nemail"));
    }

    #[test]
    fn reminder_user_prompt_embeds_event_and_rounds() {
        let prompt = build_reminder_user_prompt("HackVerse", "[{\"roundName\":\"Finals\"}]");
        assert!(prompt.starts_with("Event: HackVerse"));
        assert!(prompt.contains("Finals"));
    }
}
