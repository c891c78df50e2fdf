/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Market data (markets, currencies, tickers, order book, history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::query::QueryParams;
use crate::http::{BittrexClient, Result};
use crate::types::{
    ApiResponse, Currency, Market, MarketSummary, OrderBook, OrderBookSide, Ticker,
    TradeHistoryEntry,
};

impl BittrexClient {
    /// List all markets
    ///
    /// GET public/getmarkets
    pub async fn get_markets(&self) -> Result<ApiResponse<Vec<Market>>> {
        self.public_request("getmarkets", QueryParams::new()).await
    }

    /// List all supported currencies
    ///
    /// GET public/getcurrencies
    pub async fn get_currencies(&self) -> Result<ApiResponse<Vec<Currency>>> {
        self.public_request("getcurrencies", QueryParams::new())
            .await
    }

    /// Current bid/ask/last for a market
    ///
    /// GET public/getticker?market={market}
    pub async fn get_ticker(&self, market: &str) -> Result<ApiResponse<Ticker>> {
        let mut params = QueryParams::new();
        params.push("market", market);
        self.public_request("getticker", params).await
    }

    /// 24h summaries for all markets
    ///
    /// GET public/getmarketsummaries
    pub async fn get_market_summaries(&self) -> Result<ApiResponse<Vec<MarketSummary>>> {
        self.public_request("getmarketsummaries", QueryParams::new())
            .await
    }

    /// 24h summary for a single market
    ///
    /// GET public/getmarketsummary?market={market}
    pub async fn get_market_summary(
        &self,
        market: &str,
    ) -> Result<ApiResponse<Vec<MarketSummary>>> {
        let mut params = QueryParams::new();
        params.push("market", market);
        self.public_request("getmarketsummary", params).await
    }

    /// Order book for a market.
    ///
    /// `side: None` requests both sides.
    ///
    /// GET public/getorderbook?market={market}&type={buy|sell|both}
    pub async fn get_order_book(
        &self,
        market: &str,
        side: Option<OrderBookSide>,
    ) -> Result<ApiResponse<OrderBook>> {
        let mut params = QueryParams::new();
        params.push("market", market);
        params.push("type", side.unwrap_or_default());
        self.public_request("getorderbook", params).await
    }

    /// Latest trades for a market
    ///
    /// GET public/getmarkethistory?market={market}
    pub async fn get_market_history(
        &self,
        market: &str,
    ) -> Result<ApiResponse<Vec<TradeHistoryEntry>>> {
        let mut params = QueryParams::new();
        params.push("market", market);
        self.public_request("getmarkethistory", params).await
    }
}
