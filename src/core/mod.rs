pub mod compile;
pub mod derive;
pub mod fields;
pub mod normalize;
pub mod prompts;
pub mod reminder;
pub mod schema;
pub mod sync;

use thiserror::Error;

/// Failure classification for the derivation pipeline. `Client` faults lie
/// with the caller's input and are never retried; `Backend` faults lie with
/// the upstream generation step.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("{0}")]
    Client(String),
    #[error("{0}")]
    Backend(String),
}

impl DeriveError {
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
