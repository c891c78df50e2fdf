/*
[INPUT]:  Market identifier (e.g., "BTC-LTC")
[OUTPUT]: Market data (ticker, summary, order book)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bittrex_adapter::*;

/// Example: Query market data (no authentication required)
///
/// These endpoints are public and don't require API credentials.
#[tokio::main]
async fn main() {
    println!("=== Bittrex Market Data Example ===\n");

    // Create client (no auth needed for public endpoints)
    let client = match BittrexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let market = "BTC-LTC";

    // Query current ticker
    println!("Querying ticker for {}...", market);
    match client.get_ticker(market).await {
        Ok(ticker) => println!("✓ Ticker: {:?}", ticker.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Query 24h summary
    println!("\nQuerying market summary for {}...", market);
    match client.get_market_summary(market).await {
        Ok(summary) => println!("✓ Summary: {:?}", summary.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Query both sides of the order book
    println!("\nQuerying order book for {}...", market);
    match client.get_order_book(market, None).await {
        Ok(book) => println!("✓ Order book: {:?}", book.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
