use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::reminder::{ReminderDraft, parse_round_date};
use crate::google::calendar::{CalendarBackend, EventRef, EventSpec, EventTime};
use crate::google::drive::{DriveBackend, file_view_url, folder_url};

pub const ROOT_FOLDER_NAME: &str = "FormForge";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

const MAX_ARTIFACT_NAME: usize = 200;

#[derive(Debug, Clone, Copy)]
pub enum ArtifactKind {
    Round,
    Reminder,
}

impl ArtifactKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Reminder => "reminder",
        }
    }
}

/// Deterministic deduplication key for one external resource:
/// `lowercase(event::round::kind)` with non-alphanumeric runs collapsed to
/// hyphens (the `::` separators survive).
pub fn dedup_key(event_name: &str, round_name: &str, kind: ArtifactKind) -> String {
    let raw = format!("{event_name}::{round_name}::{}", kind.as_str()).to_lowercase();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == ':' {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.chars().take(MAX_ARTIFACT_NAME).collect()
}

/// Folder and file names must survive the storage backend's path rules.
pub fn sanitize_artifact_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '-'
            } else {
                c
            }
        })
        .collect::<String>()
        .trim()
        .chars()
        .take(MAX_ARTIFACT_NAME)
        .collect()
}

/// Start and end of a round event. With a time the round is assumed to run
/// two hours, capped at the end of the day; without one it is all-day.
pub fn build_event_times(date: NaiveDate, time: Option<NaiveTime>) -> (EventTime, EventTime) {
    match time {
        Some(t) => {
            let end_hour = (t.hour() + 2).min(23);
            let end = NaiveTime::from_hms_opt(end_hour, t.minute(), 0).unwrap_or(t);
            (
                EventTime::Timed(date.and_time(t)),
                EventTime::Timed(date.and_time(end)),
            )
        }
        None => (EventTime::AllDay(date), EventTime::AllDay(date)),
    }
}

// ── Outcome types ──

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFileRef {
    pub file_id: String,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_file: Option<DriveFileRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_round_event: Option<EventRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_reminder_event: Option<EventRef>,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    pub errors: Vec<String>,
}

impl RoundResult {
    fn new(round_name: String) -> Self {
        Self {
            round_name,
            drive_file: None,
            calendar_round_event: None,
            calendar_reminder_event: None,
            skipped: false,
            skip_reason: None,
            errors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub total: u32,
    pub succeeded: u32,
    pub skipped: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Success,
    Partial,
    Failure,
}

impl SyncSummary {
    pub fn status(&self) -> SyncStatus {
        if self.failed == 0 {
            SyncStatus::Success
        } else if self.succeeded + self.skipped > 0 {
            SyncStatus::Partial
        } else {
            SyncStatus::Failure
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub event_name: String,
    pub rounds: Vec<RoundResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_folder_url: Option<String>,
    pub summary: SyncSummary,
}

impl SyncOutcome {
    pub fn overall_success(&self) -> bool {
        self.summary.failed == 0
    }
}

struct StorageResult {
    folder_url: String,
    files: HashMap<String, DriveFileRef>,
}

enum RoundCalendar {
    Skipped(String),
    Created {
        round_event: EventRef,
        reminder_event: Option<EventRef>,
    },
}

/// Ensures the storage hierarchy and the two calendar events per round exist
/// exactly once. Safe to re-run: every create is preceded by a lookup, and
/// re-running for the same event and rounds reuses what the first run made.
pub struct Synchronizer<'a> {
    drive: &'a dyn DriveBackend,
    calendar: &'a dyn CalendarBackend,
}

impl<'a> Synchronizer<'a> {
    pub fn new(drive: &'a dyn DriveBackend, calendar: &'a dyn CalendarBackend) -> Self {
        Self { drive, calendar }
    }

    /// Rounds are processed sequentially: each round's calendar writes are
    /// preceded by an existence check against the same calendar, and
    /// concurrent writers could race past each other's duplicate check.
    pub async fn run(
        &self,
        event_name: &str,
        timezone: &str,
        drafts: &[ReminderDraft],
        today: NaiveDate,
    ) -> SyncOutcome {
        let event_name = event_name.trim();

        let storage = match self.save_drafts(event_name, drafts).await {
            Ok(result) => Some(result),
            Err(err) => {
                error!("drive sync failed, continuing with calendar: {err:#}");
                None
            }
        };

        let mut rounds = Vec::with_capacity(drafts.len());
        let (mut succeeded, mut skipped, mut failed) = (0u32, 0u32, 0u32);

        for draft in drafts {
            let mut result = RoundResult::new(draft.round_name.clone());
            if let Some(storage) = &storage {
                result.drive_file = storage.files.get(&draft.round_name).cloned();
            }

            let folder_url = storage.as_ref().map(|s| s.folder_url.as_str());
            match self
                .sync_round_calendar(event_name, timezone, draft, folder_url, today)
                .await
            {
                Ok(RoundCalendar::Skipped(reason)) => {
                    info!(round = %draft.round_name, %reason, "round skipped");
                    result.skipped = true;
                    result.skip_reason = Some(reason);
                    skipped += 1;
                }
                Ok(RoundCalendar::Created {
                    round_event,
                    reminder_event,
                }) => {
                    result.calendar_round_event = Some(round_event);
                    result.calendar_reminder_event = reminder_event;
                    succeeded += 1;
                }
                Err(err) => {
                    error!(round = %draft.round_name, "calendar sync failed: {err:#}");
                    result.errors.push(format!("Calendar: {err:#}"));
                    failed += 1;
                }
            }
            rounds.push(result);
        }

        info!(succeeded, skipped, failed, "reminder sync finished");
        SyncOutcome {
            event_name: event_name.to_string(),
            rounds,
            drive_folder_url: storage.map(|s| s.folder_url),
            summary: SyncSummary {
                total: drafts.len() as u32,
                succeeded,
                skipped,
                failed,
            },
        }
    }

    async fn find_or_create_folder(
        &self,
        name: &str,
        parent: Option<&str>,
    ) -> anyhow::Result<String> {
        if let Some(id) = self.drive.find_folder(name, parent).await? {
            debug!(folder = name, id = %id, "reusing existing folder");
            return Ok(id);
        }
        self.drive.create_folder(name, parent).await
    }

    async fn save_drafts(
        &self,
        event_name: &str,
        drafts: &[ReminderDraft],
    ) -> anyhow::Result<StorageResult> {
        let root = self.find_or_create_folder(ROOT_FOLDER_NAME, None).await?;
        let event_folder = self
            .find_or_create_folder(&sanitize_artifact_name(event_name), Some(&root))
            .await?;

        let mut files = HashMap::new();
        for draft in drafts {
            // One artifact failing must not block the others.
            match self.save_draft_file(&event_folder, draft).await {
                Ok(file) => {
                    files.insert(draft.round_name.clone(), file);
                }
                Err(err) => {
                    warn!(round = %draft.round_name, "drive artifact failed: {err:#}");
                }
            }
        }
        Ok(StorageResult {
            folder_url: folder_url(&event_folder),
            files,
        })
    }

    async fn save_draft_file(
        &self,
        folder_id: &str,
        draft: &ReminderDraft,
    ) -> anyhow::Result<DriveFileRef> {
        let date_part = draft.round_date.split('T').next().unwrap_or_default();
        let file_name = format!(
            "{}-Reminder-{}.txt",
            sanitize_artifact_name(&draft.round_name),
            date_part
        );
        let content = format!("Subject: {}\n\n{}", draft.subject, draft.body);

        if let Some(file_id) = self.drive.find_file(&file_name, folder_id).await? {
            self.drive.update_file_content(&file_id, &content).await?;
            debug!(file = %file_name, id = %file_id, "updated existing artifact");
            return Ok(DriveFileRef {
                file_url: file_view_url(&file_id),
                file_id,
                file_name,
            });
        }

        let created = self.drive.create_file(&file_name, folder_id, &content).await?;
        Ok(DriveFileRef {
            file_id: created.file_id,
            file_url: created.file_url,
            file_name,
        })
    }

    /// Lookup failures degrade to "not found": worst case the create call
    /// races an existing event, best case the run proceeds instead of dying.
    async fn find_existing(&self, key: &str) -> Option<EventRef> {
        match self.calendar.find_event_by_key(key).await {
            Ok(found) => found,
            Err(err) => {
                warn!("calendar search failed, will create new event: {err:#}");
                None
            }
        }
    }

    async fn sync_round_calendar(
        &self,
        event_name: &str,
        timezone: &str,
        draft: &ReminderDraft,
        folder_url: Option<&str>,
        today: NaiveDate,
    ) -> anyhow::Result<RoundCalendar> {
        let Some(date) = parse_round_date(&draft.round_date) else {
            return Ok(RoundCalendar::Skipped(format!(
                "Invalid date: {}",
                draft.round_date
            )));
        };
        if date < today {
            return Ok(RoundCalendar::Skipped(
                "Round date is in the past".to_string(),
            ));
        }

        let round_key = dedup_key(event_name, &draft.round_name, ArtifactKind::Round);
        let round_event = match self.find_existing(&round_key).await {
            Some(existing) => {
                info!(round = %draft.round_name, id = %existing.event_id, "round event already exists");
                existing
            }
            None => {
                let (start, end) = build_event_times(date, None);
                self.calendar
                    .create_event(&EventSpec {
                        summary: format!("{event_name} - {}", draft.round_name),
                        description: None,
                        start,
                        end,
                        timezone: timezone.to_string(),
                        dedup_key: round_key,
                        popup_minutes: 60,
                    })
                    .await?
            }
        };

        let reminder_event = match date.pred_opt().filter(|d| *d >= today) {
            None => {
                debug!(round = %draft.round_name, "reminder event skipped, day before is past");
                None
            }
            Some(reminder_date) => {
                let reminder_key = dedup_key(event_name, &draft.round_name, ArtifactKind::Reminder);
                match self.find_existing(&reminder_key).await {
                    Some(existing) => {
                        info!(round = %draft.round_name, id = %existing.event_id, "reminder event already exists");
                        Some(existing)
                    }
                    None => {
                        let description = match folder_url {
                            Some(url) => format!(
                                "Send the reminder email for {}.\n\nDraft saved in the event folder:\n{url}",
                                draft.round_name
                            ),
                            None => format!(
                                "Send the reminder email for {}.\n\nCheck the {ROOT_FOLDER_NAME} folder for the draft.",
                                draft.round_name
                            ),
                        };
                        Some(
                            self.calendar
                                .create_event(&EventSpec {
                                    summary: format!(
                                        "Send reminder email - {event_name} {}",
                                        draft.round_name
                                    ),
                                    description: Some(description),
                                    start: EventTime::AllDay(reminder_date),
                                    end: EventTime::AllDay(reminder_date),
                                    timezone: timezone.to_string(),
                                    dedup_key: reminder_key,
                                    popup_minutes: 0,
                                })
                                .await?,
                        )
                    }
                }
            }
        };

        Ok(RoundCalendar::Created {
            round_event,
            reminder_event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::drive::CreatedFile;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockDrive {
        folders: Mutex<HashMap<(Option<String>, String), String>>,
        // (folder id, file name) -> (file id, content)
        files: Mutex<HashMap<(String, String), (String, String)>>,
        counter: AtomicUsize,
        fail: bool,
    }

    impl MockDrive {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn next_id(&self, prefix: &str) -> String {
            format!("{prefix}-{}", self.counter.fetch_add(1, Ordering::SeqCst))
        }

        fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }

        fn content_of(&self, name: &str) -> Option<String> {
            self.files
                .lock()
                .unwrap()
                .iter()
                .find(|((_, n), _)| n == name)
                .map(|(_, (_, content))| content.clone())
        }
    }

    #[async_trait]
    impl DriveBackend for MockDrive {
        async fn find_folder(&self, name: &str, parent: Option<&str>) -> Result<Option<String>> {
            if self.fail {
                return Err(anyhow!("drive unavailable"));
            }
            let key = (parent.map(String::from), name.to_string());
            Ok(self.folders.lock().unwrap().get(&key).cloned())
        }

        async fn create_folder(&self, name: &str, parent: Option<&str>) -> Result<String> {
            if self.fail {
                return Err(anyhow!("drive unavailable"));
            }
            let id = self.next_id("folder");
            self.folders
                .lock()
                .unwrap()
                .insert((parent.map(String::from), name.to_string()), id.clone());
            Ok(id)
        }

        async fn find_file(&self, name: &str, parent: &str) -> Result<Option<String>> {
            if self.fail {
                return Err(anyhow!("drive unavailable"));
            }
            let key = (parent.to_string(), name.to_string());
            Ok(self.files.lock().unwrap().get(&key).map(|(id, _)| id.clone()))
        }

        async fn create_file(&self, name: &str, parent: &str, content: &str) -> Result<CreatedFile> {
            if self.fail {
                return Err(anyhow!("drive unavailable"));
            }
            let id = self.next_id("file");
            self.files.lock().unwrap().insert(
                (parent.to_string(), name.to_string()),
                (id.clone(), content.to_string()),
            );
            Ok(CreatedFile {
                file_url: file_view_url(&id),
                file_id: id,
            })
        }

        async fn update_file_content(&self, file_id: &str, content: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("drive unavailable"));
            }
            let mut files = self.files.lock().unwrap();
            for (id, stored) in files.values_mut() {
                if id == file_id {
                    *stored = content.to_string();
                    return Ok(());
                }
            }
            Err(anyhow!("no such file: {file_id}"))
        }
    }

    #[derive(Default)]
    struct MockCalendar {
        events: Mutex<HashMap<String, EventRef>>,
        created: AtomicUsize,
        fail_summary_containing: Option<String>,
    }

    impl MockCalendar {
        fn failing_for(fragment: &str) -> Self {
            Self {
                fail_summary_containing: Some(fragment.to_string()),
                ..Self::default()
            }
        }

        fn created_count(&self) -> usize {
            self.created.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CalendarBackend for MockCalendar {
        async fn find_event_by_key(&self, key: &str) -> Result<Option<EventRef>> {
            Ok(self.events.lock().unwrap().get(key).cloned())
        }

        async fn create_event(&self, spec: &EventSpec) -> Result<EventRef> {
            if let Some(fragment) = &self.fail_summary_containing
                && spec.summary.contains(fragment)
            {
                return Err(anyhow!("calendar rejected the event"));
            }
            let n = self.created.fetch_add(1, Ordering::SeqCst);
            let event = EventRef {
                event_id: format!("event-{n}"),
                event_url: format!("https://calendar.example/event-{n}"),
            };
            self.events
                .lock()
                .unwrap()
                .insert(spec.dedup_key.clone(), event.clone());
            Ok(event)
        }
    }

    fn draft(name: &str, date: &str) -> ReminderDraft {
        ReminderDraft {
            round_name: name.to_string(),
            round_date: date.to_string(),
            subject: format!("{name} is tomorrow"),
            body: "Get ready.".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[tokio::test]
    async fn second_run_reuses_every_external_resource() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round 1", "2099-01-10"), draft("Round 2", "2099-02-10")];

        let first = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;
        let created_after_first = calendar.created_count();
        let files_after_first = drive.file_count();

        let second = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert_eq!(calendar.created_count(), created_after_first);
        assert_eq!(drive.file_count(), files_after_first);
        for (a, b) in first.rounds.iter().zip(second.rounds.iter()) {
            assert_eq!(a.calendar_round_event, b.calendar_round_event);
            assert_eq!(a.calendar_reminder_event, b.calendar_reminder_event);
            assert_eq!(
                a.drive_file.as_ref().map(|f| &f.file_id),
                b.drive_file.as_ref().map(|f| &f.file_id)
            );
        }
        assert_eq!(second.summary.succeeded, 2);
        assert_eq!(second.summary.failed, 0);
    }

    #[tokio::test]
    async fn rerun_overwrites_artifact_content_in_place() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);

        let mut drafts = vec![draft("Round 1", "2099-01-10")];
        sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        drafts[0].body = "Revised body.".to_string();
        sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert_eq!(drive.file_count(), 1);
        let content = drive.content_of("Round 1-Reminder-2099-01-10.txt").unwrap();
        assert_eq!(content, "Subject: Round 1 is tomorrow\n\nRevised body.");
    }

    #[tokio::test]
    async fn one_round_failing_leaves_the_others_untouched() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::failing_for("Round A");
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round A", "2099-01-10"), draft("Round B", "2099-02-10")];

        let outcome = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert_eq!(outcome.summary.failed, 1);
        assert_eq!(outcome.summary.succeeded, 1);
        let round_a = &outcome.rounds[0];
        assert!(round_a.calendar_round_event.is_none());
        assert!(!round_a.errors.is_empty());
        let round_b = &outcome.rounds[1];
        assert!(round_b.calendar_round_event.is_some());
        assert!(round_b.calendar_reminder_event.is_some());
        assert!(round_b.errors.is_empty());
        assert_eq!(outcome.summary.status(), SyncStatus::Partial);
    }

    #[tokio::test]
    async fn past_rounds_are_skipped_with_a_reason() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round 1", "2026-08-06")];

        let outcome = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert_eq!(outcome.summary.skipped, 1);
        assert_eq!(outcome.summary.succeeded, 0);
        assert_eq!(outcome.summary.failed, 0);
        assert!(outcome.rounds[0].skipped);
        assert!(outcome.rounds[0].skip_reason.as_deref().is_some_and(|r| !r.is_empty()));
        assert_eq!(calendar.created_count(), 0);
        assert!(outcome.overall_success());
    }

    #[tokio::test]
    async fn unparseable_dates_are_skipped_not_failed() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round 1", "sometime soon")];

        let outcome = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;
        assert_eq!(outcome.summary.skipped, 1);
        assert!(outcome.rounds[0].skip_reason.as_deref().unwrap().contains("Invalid date"));
    }

    #[tokio::test]
    async fn drive_failure_is_nonfatal_and_calendar_proceeds() {
        let drive = MockDrive::failing();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round 1", "2099-01-10")];

        let outcome = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert!(outcome.drive_folder_url.is_none());
        assert!(outcome.rounds[0].drive_file.is_none());
        assert!(outcome.rounds[0].calendar_round_event.is_some());
        assert_eq!(outcome.summary.succeeded, 1);
        assert_eq!(outcome.summary.failed, 0);
    }

    #[tokio::test]
    async fn reminder_event_is_skipped_when_the_day_before_is_past() {
        let drive = MockDrive::default();
        let calendar = MockCalendar::default();
        let sync = Synchronizer::new(&drive, &calendar);
        let drafts = vec![draft("Round 1", "2026-08-07")];

        let outcome = sync.run("HackVerse", DEFAULT_TIMEZONE, &drafts, today()).await;

        assert_eq!(outcome.summary.succeeded, 1);
        assert!(outcome.rounds[0].calendar_round_event.is_some());
        assert!(outcome.rounds[0].calendar_reminder_event.is_none());
        assert_eq!(calendar.created_count(), 1);
    }

    #[test]
    fn dedup_keys_are_lowercase_hyphenated_and_kind_scoped() {
        let round = dedup_key("Hack Verse!", "Round 1", ArtifactKind::Round);
        let reminder = dedup_key("Hack Verse!", "Round 1", ArtifactKind::Reminder);
        assert_eq!(round, "hack-verse-::round-1::round");
        assert_eq!(reminder, "hack-verse-::round-1::reminder");
        assert_ne!(round, reminder);
    }

    #[test]
    fn dedup_keys_collapse_symbol_runs() {
        assert_eq!(
            dedup_key("A  &  B", "R", ArtifactKind::Round),
            "a-b::r::round"
        );
    }

    #[test]
    fn artifact_names_lose_path_characters() {
        assert_eq!(sanitize_artifact_name("Qual/Final: *?"), "Qual-Final- --");
    }

    #[test]
    fn timed_rounds_get_a_two_hour_window_capped_at_day_end() {
        let date = NaiveDate::from_ymd_opt(2099, 1, 10).unwrap();
        let (start, end) =
            build_event_times(date, Some(NaiveTime::from_hms_opt(22, 30, 0).unwrap()));
        match (start, end) {
            (EventTime::Timed(s), EventTime::Timed(e)) => {
                assert_eq!(s.format("%H:%M").to_string(), "22:30");
                assert_eq!(e.format("%H:%M").to_string(), "23:30");
            }
            other => panic!("expected timed events, got {other:?}"),
        }
    }

    #[test]
    fn summary_status_classifies_partial_and_total_failure() {
        let summary = SyncSummary { total: 2, succeeded: 0, skipped: 0, failed: 2 };
        assert_eq!(summary.status(), SyncStatus::Failure);
        let summary = SyncSummary { total: 2, succeeded: 0, skipped: 1, failed: 1 };
        assert_eq!(summary.status(), SyncStatus::Partial);
        let summary = SyncSummary { total: 2, succeeded: 1, skipped: 1, failed: 0 };
        assert_eq!(summary.status(), SyncStatus::Success);
    }
}
