//! Trait abstraction for the form backend to enable mocking in tests

use super::client::{BackendError, NewResponse, NewShare, ShareRecord};
use async_trait::async_trait;

/// Remote persistence used by the builder
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormBackend: Send + Sync {
    /// Store one submitted response
    async fn insert_response(&self, response: NewResponse) -> Result<(), BackendError>;

    /// Create a share record and return it with its generated id
    async fn insert_share(&self, share: NewShare) -> Result<ShareRecord, BackendError>;
}
