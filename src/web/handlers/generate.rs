use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use super::super::AppState;
use super::super::error::ApiError;
use crate::core::derive::derive_schema;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    custom_fields: Option<String>,
    #[serde(default)]
    required_fields: Option<String>,
}

pub async fn generate_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<Value>, ApiError> {
    let schema = derive_schema(
        state.generation.as_ref(),
        &payload.text,
        payload.custom_fields.as_deref().unwrap_or_default(),
        payload.required_fields.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(json!({ "success": true, "data": schema })))
}
