//! Service layer
//!
//! The response service contract and its mock implementation. Wizard logic
//! depends only on the [`ResponseService`] trait.

pub mod endpoint;
pub mod mock;
pub mod response;

pub use endpoint::Endpoint;
pub use mock::{FailurePlan, MockResponseService, RESPONSE_DELAY};
pub use response::ResponseService;
