//! Persistence for submissions.
//!
//! Handlers only see [`SubmissionStore`]; the MongoDB client lives behind it
//! in [`mongo`].

pub mod mongo;

use std::fmt::Formatter;

use async_trait::async_trait;

use crate::domain::new_submission::NewSubmission;
use crate::domain::submission::Submission;
use crate::utils::error_helpers::error_chain_fmt;

pub use mongo::MongoSubmissionStore;

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The single collection of submissions.
///
/// Each call is one round trip to the store. Nothing is retried.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Stores the submission and returns the identifier the store assigned,
    /// rendered as a string.
    async fn insert_one(&self, submission: &NewSubmission) -> Result<String, StoreError>;

    /// Every stored submission, in whatever order the store yields them.
    /// Always unfiltered, and never carries the store identifier.
    async fn find_all(&self) -> Result<Vec<Submission>, StoreError>;

    async fn count_all(&self) -> Result<u64, StoreError>;

    /// Liveness probe against the underlying connection.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the connection. Called once after the server stopped.
    async fn close(&self) {}
}
