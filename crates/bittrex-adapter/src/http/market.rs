/*
[INPUT]:  Limit order and cancel requests, signed with credentials
[OUTPUT]: Order identifiers and open order listings
[POS]:    HTTP layer - trading endpoints (signed)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use uuid::Uuid;

use crate::http::query::QueryParams;
use crate::http::{BittrexClient, Result};
use crate::types::{ApiResponse, LimitOrderRequest, OpenOrder, OrderId};

impl BittrexClient {
    /// Place a buy limit order
    ///
    /// GET market/buylimit?market={..}&quantity={..}&rate={..}
    pub async fn buy_limit(&self, request: LimitOrderRequest) -> Result<ApiResponse<OrderId>> {
        self.limit_order("buylimit", request).await
    }

    /// Place a sell limit order
    ///
    /// GET market/selllimit?market={..}&quantity={..}&rate={..}
    pub async fn sell_limit(&self, request: LimitOrderRequest) -> Result<ApiResponse<OrderId>> {
        self.limit_order("selllimit", request).await
    }

    async fn limit_order(
        &self,
        endpoint: &str,
        request: LimitOrderRequest,
    ) -> Result<ApiResponse<OrderId>> {
        let mut params = QueryParams::new();
        params.push("market", &request.market);
        params.push("quantity", request.quantity);
        params.push("rate", request.rate);
        self.market_request(endpoint, params).await
    }

    /// Cancel an open order
    ///
    /// GET market/cancel?uuid={uuid}
    pub async fn cancel(&self, uuid: Uuid) -> Result<ApiResponse<OrderId>> {
        let mut params = QueryParams::new();
        params.push("uuid", uuid);
        self.market_request("cancel", params).await
    }

    /// Open orders for a market
    ///
    /// GET market/getopenorders?market={market}
    pub async fn get_open_orders(&self, market: &str) -> Result<ApiResponse<Vec<OpenOrder>>> {
        let mut params = QueryParams::new();
        params.push("market", market);
        self.market_request("getopenorders", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BittrexClient, ClientConfig, Credentials};
    use crate::types::LimitOrderRequest;
    use uuid::Uuid;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_client(server: &MockServer) -> BittrexClient {
        let mut client =
            BittrexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.set_credentials(Credentials::new("key", "secret"));
        client
    }

    #[tokio::test]
    async fn test_buy_limit_params_in_declared_order() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market/buylimit"))
            .and(query_param("market", "BTC-LTC"))
            .and(query_param("quantity", "1.2"))
            .and(query_param("rate", "0.0045"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":true,"message":"","result":{"uuid":"e606d53c-8d70-11e3-94b5-425861b86ab6"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let request = LimitOrderRequest::new(
            "BTC-LTC",
            "1.2".parse().expect("quantity"),
            "0.0045".parse().expect("rate"),
        );
        let response = client.buy_limit(request).await.expect("buy_limit failed");

        assert_eq!(
            response.result.expect("uuid payload").uuid.to_string(),
            "e606d53c-8d70-11e3-94b5-425861b86ab6"
        );

        let requests = server.received_requests().await.expect("recorded requests");
        assert!(requests[0]
            .url
            .as_str()
            .contains("market=BTC-LTC&quantity=1.2&rate=0.0045&apikey="));
    }

    #[tokio::test]
    async fn test_sell_limit_hits_sell_endpoint() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/market/selllimit"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":true,"message":"","result":{"uuid":"614c34e4-8d71-11e3-94b5-425861b86ab6"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let request = LimitOrderRequest::new(
            "BTC-LTC",
            "2".parse().expect("quantity"),
            "0.005".parse().expect("rate"),
        );
        client.sell_limit(request).await.expect("sell_limit failed");
    }

    #[tokio::test]
    async fn test_cancel_serializes_uuid() {
        let server = MockServer::start().await;
        let uuid: Uuid = "e606d53c-8d70-11e3-94b5-425861b86ab6".parse().expect("uuid");

        let _mock = Mock::given(method("GET"))
            .and(path("/market/cancel"))
            .and(query_param("uuid", "e606d53c-8d70-11e3-94b5-425861b86ab6"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":true,"message":"","result":null}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let response = client.cancel(uuid).await.expect("cancel failed");
        assert!(response.success);
        assert!(response.result.is_none());
    }

    #[tokio::test]
    async fn test_get_open_orders() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": true,
            "message": "",
            "result": [{
                "Uuid": null,
                "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
                "Exchange": "BTC-LTC",
                "OrderType": "LIMIT_SELL",
                "Quantity": 5.0,
                "QuantityRemaining": 5.0,
                "Limit": 0.00532,
                "CommissionPaid": 0.0,
                "Price": 0.0,
                "PricePerUnit": null,
                "Opened": "2014-07-09T03:55:48.583",
                "Closed": null,
                "CancelInitiated": false,
                "ImmediateOrCancel": false,
                "IsConditional": false,
                "Condition": null,
                "ConditionTarget": null
            }]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/market/getopenorders"))
            .and(query_param("market", "BTC-LTC"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server);
        let response = client
            .get_open_orders("BTC-LTC")
            .await
            .expect("get_open_orders failed");

        let orders = response.result.expect("open orders payload");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_type, "LIMIT_SELL");
        assert!(orders[0].closed.is_none());
    }
}
