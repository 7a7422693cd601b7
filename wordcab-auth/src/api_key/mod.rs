//! API key authentication for the Wordcab API.

mod auth;

pub use auth::{ApiKeyAuth, KeyOrigin};
