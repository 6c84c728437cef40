/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - records returned by the Discoin API
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::TransactionKind;

/// Currency offered by a bot on the exchange (V3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Three letter currency code
    pub id: String,
    pub name: String,
    /// Exchange value against the Discoin base unit
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub reserve: Decimal,
}

/// Transaction recorded by the V3 API
///
/// Read-only for consumers. The `handled` flag only changes through
/// [`DiscoinClient::mark_handled`](crate::DiscoinClient::mark_handled),
/// after the API has accepted the update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub(crate) id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) amount: Decimal,
    pub(crate) user: String,
    #[serde(default)]
    pub(crate) handled: bool,
    pub(crate) timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) payout: Decimal,
    pub(crate) from: Currency,
    pub(crate) to: Currency,
}

impl Transaction {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Amount of the source currency being converted
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Amount of the target currency paid out
    pub fn payout(&self) -> Decimal {
        self.payout
    }

    pub fn from(&self) -> &Currency {
        &self.from
    }

    pub fn to(&self) -> &Currency {
        &self.to
    }
}

/// Receipt of a completed legacy transaction (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt: String,
    pub user: String,
    pub source: String,
    pub target: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_source: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_target: Decimal,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub processed: bool,
    #[serde(default)]
    pub reversed: bool,
}

/// Transaction waiting to be processed by the receiving bot (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub receipt: String,
    pub user: String,
    /// Currency code the transaction was converted from
    pub source: String,
    /// Converted amount owed to the user
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}
