/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Revision of the Discoin API contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V2,
    V3,
}

impl ApiVersion {
    /// Public base URL of this revision
    pub fn base_url(self) -> &'static str {
        match self {
            ApiVersion::V2 => "http://discoin.sidetrip.xyz/",
            ApiVersion::V3 => "https://discoin.zws.im/",
        }
    }

    /// Authorization header value for a token
    ///
    /// V2 expects the raw token, V3 expects a bearer token.
    pub fn authorization(self, token: &str) -> String {
        match self {
            ApiVersion::V2 => token.to_string(),
            ApiVersion::V3 => format!("Bearer {token}"),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V2 => f.write_str("v2"),
            ApiVersion::V3 => f.write_str("v3"),
        }
    }
}

/// Kind of a legacy pending transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Normal,
    Refund,
}
