//! # wordcab-auth
//!
//! API key authentication for the Wordcab API:
//! - resolution of the key from an explicit value or the configured environment
//! - format validation before any request is prepared
//! - secret handling so the key never shows up in `Debug` output or logs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordcab_auth::api_key::ApiKeyAuth;
//!
//! let auth = ApiKeyAuth::resolve(None, config.wordcab_api_key())?;
//! ```

pub mod api_key;
pub mod error;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
