/*
[INPUT]:  DISCOIN_TOKEN, optional DISCOIN_BASE_URL
[OUTPUT]: Legacy transaction, receipt lookup and reversal
[POS]:    Examples - V2 sending-bot flow
[UPDATE]: When V2 endpoints change
*/

use discoin_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: convert, look up and reverse against the legacy API
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Discoin Legacy Exchange Example ===\n");

    let client = match DiscoinClient::<V2>::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Converting 10 into XYZ for user 1234...");
    let confirmation = match client
        .create_transaction("1234", Decimal::from(10), "XYZ")
        .await
    {
        Ok(c) => c,
        Err(DiscoinError::Rejected(status)) => {
            println!("✗ Rejected: {} (limit {:?})", status.reason, status.limit);
            return;
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!(
        "✓ Receipt {}: {} received, {} left today",
        confirmation.receipt, confirmation.result_amount, confirmation.limit_now
    );

    match client.load_receipt(&confirmation.receipt).await {
        Ok(receipt) => println!("✓ Receipt: {:?}", receipt),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.reverse_transaction(&confirmation.receipt).await {
        Ok(reversal) => println!("✓ Reversed, refunded {}", reversal.refund_amount),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Legacy exchange example complete");
}
