/*
[INPUT]:  DISCOIN_TOKEN, optional DISCOIN_BASE_URL, currency code argument
[OUTPUT]: Pending transactions paid out and marked handled
[POS]:    Examples - V3 receiving-bot loop
[UPDATE]: When V3 endpoints change
*/

use discoin_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: process pending transactions for one currency
///
/// Lists unhandled transactions converted to our currency and marks
/// each of them handled after "paying out".
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Discoin Pending Payouts Example ===\n");

    let client = match DiscoinClient::<V3>::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let currency = std::env::args().nth(1).unwrap_or_else(|| "XYZ".to_string());

    println!("Querying currencies...");
    match client.currencies().await {
        Ok(currencies) => {
            for c in currencies {
                println!("  {} ({}): value {}, reserve {}", c.id, c.name, c.value, c.reserve);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying unhandled transactions to {}...", currency);
    let pending = match client
        .pending_transactions(&PendingFilter::unhandled_for(&currency))
        .await
    {
        Ok(pending) => pending,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    for mut transaction in pending {
        println!(
            "  {}: pay {} {} to user {}",
            transaction.id(),
            transaction.payout(),
            transaction.to().id,
            transaction.user()
        );
        match client.mark_handled(&mut transaction).await {
            Ok(()) => println!("  ✓ marked handled"),
            Err(e) => println!("  ✗ still unhandled: {}", e),
        }
    }

    println!("\n✓ Pending payouts example complete");
}
