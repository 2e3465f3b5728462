pub mod calendar;
pub mod drive;
pub mod forms;

use async_trait::async_trait;

/// A ready-to-use authenticated handle for the Google APIs, supplied per
/// request. Token acquisition and storage live outside this service.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// `None` means the deployment has no authenticated identity yet.
    async fn session(&self) -> Option<Session>;
}

/// Session provider backed by a pre-authorized token from the environment.
pub struct EnvSessionProvider {
    token: Option<String>,
}

impl EnvSessionProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl SessionProvider for EnvSessionProvider {
    async fn session(&self) -> Option<Session> {
        self.token.as_ref().map(|token| Session {
            access_token: token.clone(),
        })
    }
}
