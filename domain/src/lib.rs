//! Client-side operations of the Wordcab API: key resolution, argument
//! validation and request preparation.

pub mod client;
pub mod error;
pub mod options;
pub mod request;
pub mod validation;

pub use client::Client;
pub use error::{DomainErrorKind, Error, InvalidErrorKind};
pub use options::{ExtractOptions, SummaryLength, SummaryOptions};
pub use request::{
    AuthorizedRequest, HttpVerb, Method, PreparedRequest, Request, RequestBody, Response,
};
