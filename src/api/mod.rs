//! API Layer for sfhb
//!
//! The boundary the HTTP layer calls into: the four article operations,
//! with the writer token gate in front of the mutating ones.
//!
//! # Supported Operations
//!
//! - list
//! - get
//! - create (token-gated)
//! - delete (token-gated)

mod handler;
mod response;

pub use handler::ApiHandler;
pub use response::ErrorResponse;
