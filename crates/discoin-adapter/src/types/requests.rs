/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - outbound payloads
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST transactions` (V3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "user")]
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Code of the currency being converted to
    #[serde(rename = "toId")]
    pub to: String,
}

/// Body of `POST transaction` (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyTransactionRequest {
    #[serde(rename = "user")]
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "exchangeTo")]
    pub exchange_to: String,
}

/// Body of `POST transaction/reverse` (V2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseRequest {
    pub receipt: String,
}

/// Body of `PATCH transactions/{id}` (V3)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandledUpdate {
    pub handled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_request_wire_names() {
        let req = TransactionRequest {
            user_id: "u1".to_string(),
            amount: Decimal::from(5),
            to: "XYZ".to_string(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"user": "u1", "amount": 5.0, "toId": "XYZ"}));
    }

    #[test]
    fn test_transaction_request_echo_restores_logical_names() {
        let req = TransactionRequest {
            user_id: "u1".to_string(),
            amount: "12.5".parse().unwrap(),
            to: "XYZ".to_string(),
        };

        let echoed = serde_json::to_string(&req).unwrap();
        let parsed: TransactionRequest = serde_json::from_str(&echoed).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn test_legacy_request_uses_exchange_to() {
        let req = LegacyTransactionRequest {
            user_id: "u1".to_string(),
            amount: Decimal::from(5),
            exchange_to: "XYZ".to_string(),
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["exchangeTo"], "XYZ");
        assert_eq!(value["user"], "u1");
        assert!(value.get("toId").is_none());
    }

    #[test]
    fn test_handled_update_body() {
        let body = serde_json::to_string(&HandledUpdate { handled: true }).unwrap();
        assert_eq!(body, r#"{"handled":true}"#);
    }
}
