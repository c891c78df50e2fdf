/*
[INPUT]:  API credentials from BITTREX_API_KEY / BITTREX_API_SECRET
[OUTPUT]: Account balances and open orders
[POS]:    Examples - signed account queries
[UPDATE]: When adding new account endpoints
*/

use bittrex_adapter::*;

/// Example: Query account data (requires API credentials)
///
/// Set BITTREX_API_KEY and BITTREX_API_SECRET before running.
#[tokio::main]
async fn main() {
    println!("=== Bittrex Account Example ===\n");

    let client = match BittrexConfig::from_env().and_then(BittrexConfig::into_client) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created with credentials\n");

    // Query all balances
    println!("Querying balances...");
    match client.get_balances().await {
        Ok(response) if response.success => {
            for balance in response.result.unwrap_or_default() {
                println!("  {} available: {}", balance.currency, balance.available);
            }
        }
        Ok(response) => println!("✗ Exchange refused: {}", response.message),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Query open orders for one market
    let market = "BTC-LTC";
    println!("\nQuerying open orders for {}...", market);
    match client.get_open_orders(market).await {
        Ok(response) => println!("✓ Open orders: {:?}", response.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
