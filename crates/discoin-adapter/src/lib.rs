/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Discoin adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the Discoin currency exchange API.
//!
//! ```no_run
//! use discoin_adapter::{DiscoinClient, PendingFilter, V3};
//!
//! # async fn run() -> discoin_adapter::Result<()> {
//! let client = DiscoinClient::<V3>::new("token")?;
//! for mut transaction in client.pending_transactions(&PendingFilter::unhandled_for("XYZ")).await? {
//!     // pay out transaction.payout() to transaction.user() ...
//!     client.mark_handled(&mut transaction).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DiscoinClient,
    DiscoinError,
    PendingFilter,
    Result,
    Revision,
    V2,
    V3,
};

// Re-export all types
pub use types::*;
