/*
[INPUT]:  User ids, amounts, currency codes, receipt codes
[OUTPUT]: Confirmations, receipts, reversals, pending transactions
[POS]:    HTTP layer - legacy (V2) endpoints
[UPDATE]: When legacy endpoint behavior changes
*/

use reqwest::Method;
use rust_decimal::Decimal;

use crate::http::revision::V2;
use crate::http::status::{AUTHORIZED, CREATE_V2, LOOKUP, REVERSE};
use crate::http::{DiscoinClient, Result};
use crate::types::{
    Confirmation, LegacyTransactionRequest, PendingTransaction, Receipt, ReverseRequest, Reversal,
};

impl DiscoinClient<V2> {
    /// Convert `amount` of this bot's currency into `exchange_to`
    ///
    /// POST /transaction
    pub async fn create_transaction(
        &self,
        user_id: &str,
        amount: Decimal,
        exchange_to: &str,
    ) -> Result<Confirmation> {
        let req = LegacyTransactionRequest {
            user_id: user_id.to_string(),
            amount,
            exchange_to: exchange_to.to_string(),
        };
        let url = self.endpoint(&["transaction"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder, &CREATE_V2).await
    }

    /// Reverse a completed transaction
    ///
    /// POST /transaction/reverse
    pub async fn reverse_transaction(&self, receipt: &str) -> Result<Reversal> {
        let req = ReverseRequest {
            receipt: receipt.to_string(),
        };
        let url = self.endpoint(&["transaction", "reverse"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder, &REVERSE).await
    }

    /// Load the receipt of a completed transaction
    ///
    /// GET /transaction/{receipt}
    pub async fn load_receipt(&self, receipt: &str) -> Result<Receipt> {
        let url = self.endpoint(&["transaction", receipt])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder, &LOOKUP).await
    }

    /// Transactions waiting to be paid out by this bot, in server order
    ///
    /// GET /transaction
    pub async fn pending_transactions(&self) -> Result<Vec<PendingTransaction>> {
        let url = self.endpoint(&["transaction"])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder, &AUTHORIZED).await
    }
}
