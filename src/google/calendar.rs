use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Serialize;
use serde_json::json;

use super::Session;

const CALENDAR_EVENTS_URL: &str =
    "https://www.googleapis.com/calendar/v3/calendars/primary/events";

/// Private extended property carrying the deduplication key. Only events
/// tagged with it are ever read back.
const DEDUP_PROPERTY: &str = "formforgeId";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub event_id: String,
    pub event_url: String,
}

#[derive(Debug, Clone)]
pub enum EventTime {
    AllDay(NaiveDate),
    Timed(NaiveDateTime),
}

#[derive(Debug, Clone)]
pub struct EventSpec {
    pub summary: String,
    pub description: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub timezone: String,
    pub dedup_key: String,
    /// Popup reminder offset, minutes before the event.
    pub popup_minutes: u32,
}

/// Narrow contract over the calendar service.
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    async fn find_event_by_key(&self, key: &str) -> Result<Option<EventRef>>;
    async fn create_event(&self, spec: &EventSpec) -> Result<EventRef>;
}

pub struct HttpCalendarBackend {
    client: Client,
    session: Session,
}

impl HttpCalendarBackend {
    pub fn new(client: Client, session: Session) -> Self {
        Self { client, session }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.session.access_token)
    }
}

fn time_body(time: &EventTime, timezone: &str) -> serde_json::Value {
    match time {
        EventTime::AllDay(date) => json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "timeZone": timezone,
        }),
        EventTime::Timed(datetime) => json!({
            "dateTime": datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "timeZone": timezone,
        }),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventResource {
    id: String,
    html_link: Option<String>,
}

#[derive(serde::Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<EventResource>,
}

fn event_ref(resource: EventResource) -> EventRef {
    let event_url = resource.html_link.unwrap_or_else(|| {
        format!(
            "https://calendar.google.com/calendar/event?eid={}",
            resource.id
        )
    });
    EventRef {
        event_id: resource.id,
        event_url,
    }
}

#[async_trait]
impl CalendarBackend for HttpCalendarBackend {
    async fn find_event_by_key(&self, key: &str) -> Result<Option<EventRef>> {
        let property = format!("{DEDUP_PROPERTY}={key}");
        let res = self
            .client
            .get(CALENDAR_EVENTS_URL)
            .header("Authorization", self.bearer())
            .query(&[
                ("privateExtendedProperty", property.as_str()),
                ("maxResults", "1"),
            ])
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Calendar API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: EventList = res.json().await?;
        Ok(parsed.items.into_iter().next().map(event_ref))
    }

    async fn create_event(&self, spec: &EventSpec) -> Result<EventRef> {
        let mut body = json!({
            "summary": spec.summary,
            "start": time_body(&spec.start, &spec.timezone),
            "end": time_body(&spec.end, &spec.timezone),
            "reminders": {
                "useDefault": false,
                "overrides": [{ "method": "popup", "minutes": spec.popup_minutes }],
            },
            "extendedProperties": {
                "private": { DEDUP_PROPERTY: spec.dedup_key },
            },
        });
        if let Some(description) = &spec.description {
            body["description"] = json!(description);
        }

        let res = self
            .client
            .post(CALENDAR_EVENTS_URL)
            .header("Authorization", self.bearer())
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Calendar API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: EventResource = res.json().await?;
        Ok(event_ref(parsed))
    }
}
