pub mod error;
mod handlers;
mod router;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::google::SessionProvider;
use crate::llm::GenerationBackend;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generation: Arc<dyn GenerationBackend>,
    pub sessions: Arc<dyn SessionProvider>,
    pub http: reqwest::Client,
}

pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("FormForge API running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
