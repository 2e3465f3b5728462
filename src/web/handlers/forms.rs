use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::info;

use super::super::AppState;
use super::super::error::{ApiError, unauthorized};
use crate::core::compile::compile_items;
use crate::core::schema::FormSchema;
use crate::google::forms::{FormsBackend, HttpFormsBackend, edit_url};

/// Materialize a (possibly user-edited) canonical schema as a real form.
pub async fn create_form_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let schema: FormSchema = serde_json::from_value(payload)
        .map_err(|err| ApiError::BadRequest(format!("Invalid form schema: {err}")))?;
    schema.validate().map_err(ApiError::BadRequest)?;

    let session = state.sessions.session().await.ok_or_else(unauthorized)?;
    let backend = HttpFormsBackend::new(state.http.clone(), session);

    let form_id = backend
        .create_form(&schema.title)
        .await
        .map_err(|err| ApiError::Upstream(format!("Form creation failed: {err:#}")))?;
    backend
        .set_description(&form_id, &schema.description)
        .await
        .map_err(|err| ApiError::Upstream(format!("Form description update failed: {err:#}")))?;
    backend
        .append_items(&form_id, &compile_items(&schema))
        .await
        .map_err(|err| ApiError::Upstream(format!("Form item creation failed: {err:#}")))?;
    let responder_url = backend
        .responder_url(&form_id)
        .await
        .map_err(|err| ApiError::Upstream(format!("Form lookup failed: {err:#}")))?;

    info!(form_id = %form_id, "form created");
    Ok(Json(json!({
        "success": true,
        "data": {
            "formId": form_id,
            "editUrl": edit_url(&form_id),
            "responderUrl": responder_url,
        },
    })))
}
