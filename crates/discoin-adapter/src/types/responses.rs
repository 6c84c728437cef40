/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - confirmation and status payloads
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confirmation of a legacy transaction (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub status: String,
    pub receipt: String,
    /// Remaining per-user daily limit
    #[serde(with = "rust_decimal::serde::float")]
    pub limit_now: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub result_amount: Decimal,
}

/// Result of reversing a legacy transaction (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reversal {
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub refund_amount: Decimal,
}

/// Error or limit payload reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<Decimal>,
}

impl Status {
    /// Status built from a body that is not a status payload
    pub(crate) fn from_raw(reason: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            reason: reason.into(),
            currency: None,
            limit: None,
        }
    }
}
