use anyhow::{Result, bail};
use tracing::warn;

const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,
    /// Bearer token for the Google APIs, supplied by the deployment's
    /// identity provider. Session storage itself lives outside this service.
    pub google_access_token: Option<String>,
    pub production: bool,
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: env_var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            groq_api_key: env_var("GROQ_API_KEY").unwrap_or_default(),
            groq_base_url: env_var("GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
            groq_model: env_var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            google_access_token: env_var("GOOGLE_ACCESS_TOKEN"),
            production: env_var("APP_ENV").as_deref() == Some("production"),
        }
    }

    /// In production missing credentials halt startup instead of serving
    /// requests that can only fail downstream. In development they warn.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.groq_api_key.is_empty() {
            missing.push("GROQ_API_KEY (schema and reminder generation will fail)");
        }
        if self.google_access_token.is_none() {
            missing.push("GOOGLE_ACCESS_TOKEN (form, drive and calendar creation will fail)");
        }

        if missing.is_empty() {
            return Ok(());
        }
        if self.production {
            bail!("missing required configuration: {}", missing.join(", "));
        }
        for entry in missing {
            warn!("not set: {entry}");
        }
        Ok(())
    }
}
