//! The response service contract
//!
//! Step views never talk to a backend directly. They go through a
//! [`ResponseService`], so the mock can be swapped for a real implementation
//! without touching wizard logic.

use async_trait::async_trait;

use super::endpoint::Endpoint;
use crate::error::SavrResult;
use crate::models::Payload;

/// Answers a step's request with a payload
///
/// Implementations must be non-blocking and must return a structurally
/// identical payload for a given endpoint, or a retryable
/// [`SavrError::Fetch`](crate::error::SavrError::Fetch).
#[async_trait]
pub trait ResponseService: Send + Sync {
    /// Respond to a request for `endpoint` carrying `input`
    async fn respond(&self, endpoint: &Endpoint, input: serde_json::Value) -> SavrResult<Payload>;
}
