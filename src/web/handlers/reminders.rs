use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::super::AppState;
use super::super::error::{ApiError, unauthorized};
use crate::core::reminder::{
    ReminderDraft, RoundInfo, generate_reminder_drafts, validate_drafts,
};
use crate::core::sync::{DEFAULT_TIMEZONE, SyncStatus, Synchronizer};
use crate::google::calendar::HttpCalendarBackend;
use crate::google::drive::HttpDriveBackend;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    event_name: String,
    #[serde(default)]
    rounds: Vec<RoundInfo>,
}

pub async fn preview_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reminders = generate_reminder_drafts(
        state.generation.as_ref(),
        &payload.event_name,
        &payload.rounds,
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "eventName": payload.event_name.trim(),
            "reminders": reminders,
        },
    })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[serde(default)]
    event_name: String,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    reminders: Vec<ReminderDraft>,
}

pub async fn create_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<Response, ApiError> {
    validate_drafts(&payload.event_name, &payload.reminders)?;

    let session = state.sessions.session().await.ok_or_else(unauthorized)?;
    let drive = HttpDriveBackend::new(state.http.clone(), session.clone());
    let calendar = HttpCalendarBackend::new(state.http.clone(), session);
    let timezone = payload
        .timezone
        .as_deref()
        .filter(|tz| !tz.trim().is_empty())
        .unwrap_or(DEFAULT_TIMEZONE);

    let outcome = Synchronizer::new(&drive, &calendar)
        .run(
            &payload.event_name,
            timezone,
            &payload.reminders,
            Local::now().date_naive(),
        )
        .await;

    let status = match outcome.summary.status() {
        SyncStatus::Success => StatusCode::OK,
        SyncStatus::Partial => StatusCode::MULTI_STATUS,
        SyncStatus::Failure => StatusCode::BAD_GATEWAY,
    };
    let body = json!({
        "success": status.is_success(),
        "overallSuccess": outcome.overall_success(),
        "data": outcome,
    });
    Ok((status, Json(body)).into_response())
}
