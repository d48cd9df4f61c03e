//! Client side of the recommendation API: wire types, the transport trait and
//! its HTTP implementation.

pub mod backend;
pub mod error;
pub mod fixture;
pub mod messages;

pub use backend::{Backend, Endpoint, HttpBackend};
pub use error::ApiError;
