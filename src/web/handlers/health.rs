use axum::Json;
use serde_json::{Value, json};

pub async fn health_endpoint() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
