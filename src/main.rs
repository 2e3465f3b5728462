mod config;
mod core;
mod google;
mod llm;
mod logging;
mod web;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::google::EnvSessionProvider;
use crate::llm::groq::GroqBackend;
use crate::web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    config.validate()?;

    let http = reqwest::Client::new();
    let state = AppState {
        generation: Arc::new(GroqBackend::new(
            http.clone(),
            config.groq_base_url.clone(),
            config.groq_api_key.clone(),
            config.groq_model.clone(),
        )),
        sessions: Arc::new(EnvSessionProvider::new(config.google_access_token.clone())),
        http,
        config: Arc::new(config),
    };

    web::serve(state).await
}
