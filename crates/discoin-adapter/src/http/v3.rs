/*
[INPUT]:  User ids, amounts, currency codes, transaction ids
[OUTPUT]: Transactions, currencies, handled confirmations
[POS]:    HTTP layer - current (V3) endpoints
[UPDATE]: When adding V3 endpoints or changing query parameters
*/

use reqwest::Method;
use rust_decimal::Decimal;

use crate::http::revision::V3;
use crate::http::status::{AUTHORIZED, CREATE_V3, LOOKUP};
use crate::http::{DiscoinClient, Result};
use crate::types::{Currency, HandledUpdate, Transaction, TransactionRequest};

/// Filter for the pending transaction listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingFilter {
    /// Only transactions converted to this currency code
    pub currency: Option<String>,
    /// Only transactions with this handled flag
    pub handled: Option<bool>,
}

impl PendingFilter {
    /// Unhandled transactions converted to `currency`
    pub fn unhandled_for(currency: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            handled: Some(false),
        }
    }

    fn query_values(&self) -> Vec<String> {
        let mut filters = Vec::new();
        if let Some(currency) = &self.currency {
            filters.push(format!("to.id||eq||{currency}"));
        }
        if let Some(handled) = self.handled {
            filters.push(format!("handled||eq||{handled}"));
        }
        filters
    }
}

impl DiscoinClient<V3> {
    /// Create a transaction converting `amount` into the currency `to`
    ///
    /// POST /transactions
    pub async fn create_transaction(
        &self,
        user_id: &str,
        amount: Decimal,
        to: &str,
    ) -> Result<Transaction> {
        let req = TransactionRequest {
            user_id: user_id.to_string(),
            amount,
            to: to.to_string(),
        };
        let url = self.endpoint(&["transactions"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder, &CREATE_V3).await
    }

    /// Load a completed transaction by id
    ///
    /// GET /transaction/{id}
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        let url = self.endpoint(&["transaction", id])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder, &LOOKUP).await
    }

    /// List transactions matching `filter`, in server order
    ///
    /// GET /transactions?filter=to.id||eq||{currency}&filter=handled||eq||{handled}
    pub async fn pending_transactions(&self, filter: &PendingFilter) -> Result<Vec<Transaction>> {
        let mut url = self.endpoint(&["transactions"])?;
        let filters = filter.query_values();
        if !filters.is_empty() {
            let mut query = url.query_pairs_mut();
            for value in &filters {
                query.append_pair("filter", value);
            }
        }

        let builder = self.request(Method::GET, url);
        self.send_json(builder, &AUTHORIZED).await
    }

    /// List the currencies known to the exchange, in server order
    ///
    /// GET /currencies
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        let url = self.endpoint(&["currencies"])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder, &AUTHORIZED).await
    }

    /// Mark the transaction `id` as handled on the server
    ///
    /// PATCH /transactions/{id}
    pub async fn set_handled(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&["transactions", id])?;
        let builder = self
            .request(Method::PATCH, url)
            .json(&HandledUpdate { handled: true });
        // The updated record in the response body is not needed.
        self.send(builder, &AUTHORIZED).await?;
        Ok(())
    }

    /// Mark `transaction` as handled, then update the local copy
    ///
    /// Does nothing when the transaction is already handled. The local flag
    /// is only set once the server accepted the update.
    pub async fn mark_handled(&self, transaction: &mut Transaction) -> Result<()> {
        if transaction.handled {
            return Ok(());
        }
        self.set_handled(&transaction.id).await?;
        transaction.handled = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, DiscoinError};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DiscoinClient<V3> {
        DiscoinClient::<V3>::with_config_and_base_url(
            "test-token",
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    fn transaction_json(id: &str, handled: bool) -> serde_json::Value {
        json!({
            "id": id,
            "amount": 5,
            "user": "u1",
            "handled": handled,
            "timestamp": "2020-01-01T12:00:00.000Z",
            "payout": 2.5,
            "from": {"id": "DTS", "name": "Dice", "value": 0.5, "reserve": 1000},
            "to": {"id": "XYZ", "name": "Xylo", "value": 1, "reserve": 250.75}
        })
    }

    fn currency(id: &str, name: &str, value: &str, reserve: &str) -> Currency {
        Currency {
            id: id.to_string(),
            name: name.to_string(),
            value: value.parse().expect("value"),
            reserve: reserve.parse().expect("reserve"),
        }
    }

    #[tokio::test]
    async fn test_create_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/transactions"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({"user": "u1", "amount": 5.0, "toId": "XYZ"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(transaction_json("t-1", false)))
            .expect(1)
            .mount(&server)
            .await;

        let transaction = client(&server)
            .create_transaction("u1", Decimal::from(5), "XYZ")
            .await
            .expect("create_transaction failed");

        let expected = Transaction {
            id: "t-1".to_string(),
            amount: Decimal::from(5),
            user: "u1".to_string(),
            handled: false,
            timestamp: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
            payout: "2.5".parse().expect("payout"),
            from: currency("DTS", "Dice", "0.5", "1000"),
            to: currency("XYZ", "Xylo", "1", "250.75"),
        };
        assert_eq!(transaction, expected);
    }

    #[tokio::test]
    async fn test_create_transaction_ok_instead_of_created_is_unknown() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(transaction_json("t-1", false)))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_transaction("u1", Decimal::from(5), "XYZ")
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoinError::Unknown { code: 200, .. }));
    }

    #[tokio::test]
    async fn test_create_transaction_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "status": "declined",
                "reason": "reserve too low",
                "currency": "XYZ",
                "limit": 250.75
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_transaction("u1", Decimal::from(500), "XYZ")
            .await
            .unwrap_err();

        match err {
            DiscoinError::Rejected(status) => {
                assert_eq!(status.reason, "reserve too low");
                assert_eq!(status.limit, Some("250.75".parse().expect("limit")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transaction/t-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(transaction_json("t-9", true)))
            .expect(1)
            .mount(&server)
            .await;

        let transaction = client(&server)
            .get_transaction("t-9")
            .await
            .expect("get_transaction failed");
        assert_eq!(transaction.id(), "t-9");
        assert!(transaction.is_handled());
        assert_eq!(transaction.to().id, "XYZ");
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transaction/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).get_transaction("missing").await.unwrap_err();
        assert!(matches!(err, DiscoinError::NotFound));
    }

    #[tokio::test]
    async fn test_pending_transactions_keeps_order_and_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("filter", "to.id||eq||XYZ"))
            .and(query_param("filter", "handled||eq||false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                transaction_json("t-3", false),
                transaction_json("t-1", false),
                transaction_json("t-2", false),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let pending = client(&server)
            .pending_transactions(&PendingFilter::unhandled_for("XYZ"))
            .await
            .expect("pending_transactions failed");

        let ids: Vec<&str> = pending.iter().map(Transaction::id).collect();
        assert_eq!(ids, vec!["t-3", "t-1", "t-2"]);
    }

    #[tokio::test]
    async fn test_pending_transactions_without_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let pending = client(&server)
            .pending_transactions(&PendingFilter::default())
            .await
            .expect("pending_transactions failed");
        assert!(pending.is_empty());

        let requests = server.received_requests().await.expect("recorded requests");
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_currencies_keep_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "XYZ", "name": "Xylo", "value": 1, "reserve": 250.75},
                {"id": "DTS", "name": "Dice", "value": 0.5, "reserve": 1000}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let currencies = client(&server).currencies().await.expect("currencies failed");
        assert_eq!(
            currencies,
            vec![
                currency("XYZ", "Xylo", "1", "250.75"),
                currency("DTS", "Dice", "0.5", "1000"),
            ]
        );
    }

    #[tokio::test]
    async fn test_currencies_malformed_body_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server).currencies().await.unwrap_err();
        assert!(matches!(err, DiscoinError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_mark_handled_skips_handled_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut transaction: Transaction =
            serde_json::from_value(transaction_json("t-1", true)).expect("transaction");
        client(&server)
            .mark_handled(&mut transaction)
            .await
            .expect("mark_handled failed");
        assert!(transaction.is_handled());
    }

    #[tokio::test]
    async fn test_mark_handled_sets_flag_after_success() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/transactions/t-1"))
            .and(body_json(json!({"handled": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(transaction_json("t-1", true)))
            .expect(1)
            .mount(&server)
            .await;

        let mut transaction: Transaction =
            serde_json::from_value(transaction_json("t-1", false)).expect("transaction");
        client(&server)
            .mark_handled(&mut transaction)
            .await
            .expect("mark_handled failed");
        assert!(transaction.is_handled());
    }

    #[tokio::test]
    async fn test_mark_handled_failure_leaves_flag_unset() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/transactions/t-1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut transaction: Transaction =
            serde_json::from_value(transaction_json("t-1", false)).expect("transaction");
        let err = client(&server).mark_handled(&mut transaction).await.unwrap_err();

        assert!(matches!(err, DiscoinError::Unknown { code: 500, .. }));
        assert!(!transaction.is_handled());
    }

    #[tokio::test]
    async fn test_mark_handled_unauthorized_leaves_flag_unset() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .expect(1)
            .mount(&server)
            .await;

        let mut transaction: Transaction =
            serde_json::from_value(transaction_json("t-1", false)).expect("transaction");
        let err = client(&server).mark_handled(&mut transaction).await.unwrap_err();

        assert!(err.is_auth_error());
        assert!(!transaction.is_handled());
    }

    #[test]
    fn test_pending_filter_query_values() {
        let filter = PendingFilter {
            currency: None,
            handled: Some(true),
        };
        assert_eq!(filter.query_values(), vec!["handled||eq||true".to_string()]);
        assert!(PendingFilter::default().query_values().is_empty());
    }
}
