/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod revision;
mod status;
pub mod v2;
pub mod v3;

pub use error::{DiscoinError, Result};
pub use revision::{Revision, V2, V3};
pub use v3::PendingFilter;

pub use client::{BASE_URL_ENV, ClientConfig, DiscoinClient, TOKEN_ENV};
