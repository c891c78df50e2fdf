/*
[INPUT]:  Account queries and withdraw requests, signed with credentials
[OUTPUT]: Balances, addresses, orders and transfer history
[POS]:    HTTP layer - account endpoints (signed)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use uuid::Uuid;

use crate::http::query::QueryParams;
use crate::http::{BittrexClient, Result};
use crate::types::{
    ApiResponse, Balance, DepositAddress, DepositRecord, Order, OrderHistoryEntry, OrderId,
    WithdrawRequest, WithdrawalRecord,
};

impl BittrexClient {
    /// Balances for all currencies in the account
    ///
    /// GET account/getbalances
    pub async fn get_balances(&self) -> Result<ApiResponse<Vec<Balance>>> {
        self.account_request("getbalances", QueryParams::new())
            .await
    }

    /// Balance for a single currency
    ///
    /// GET account/getbalance?currency={currency}
    pub async fn get_balance(&self, currency: &str) -> Result<ApiResponse<Balance>> {
        let mut params = QueryParams::new();
        params.push("currency", currency);
        self.account_request("getbalance", params).await
    }

    /// Deposit address for a currency.
    ///
    /// The address may be absent while the exchange is still generating it.
    ///
    /// GET account/getdepositaddress?currency={currency}
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> Result<ApiResponse<DepositAddress>> {
        let mut params = QueryParams::new();
        params.push("currency", currency);
        self.account_request("getdepositaddress", params).await
    }

    /// Withdraw funds to an external address
    ///
    /// GET account/withdraw?currency={..}&quantity={..}&address={..}&paymentid={..}
    pub async fn withdraw(&self, request: WithdrawRequest) -> Result<ApiResponse<OrderId>> {
        let mut params = QueryParams::new();
        params.push("currency", &request.currency);
        params.push("quantity", request.quantity);
        params.push("address", &request.address);
        params.push_opt("paymentid", request.payment_id.as_ref());
        self.account_request("withdraw", params).await
    }

    /// Single order by uuid
    ///
    /// GET account/getorder?uuid={uuid}
    pub async fn get_order(&self, uuid: Uuid) -> Result<ApiResponse<Order>> {
        let mut params = QueryParams::new();
        params.push("uuid", uuid);
        self.account_request("getorder", params).await
    }

    /// Settled orders, optionally filtered by market
    ///
    /// GET account/getorderhistory?market={market}
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> Result<ApiResponse<Vec<OrderHistoryEntry>>> {
        let mut params = QueryParams::new();
        params.push_opt("market", market);
        self.account_request("getorderhistory", params).await
    }

    /// Withdrawals, optionally filtered by currency
    ///
    /// GET account/getwithdrawalhistory?currency={currency}
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<ApiResponse<Vec<WithdrawalRecord>>> {
        let mut params = QueryParams::new();
        params.push_opt("currency", currency);
        self.account_request("getwithdrawalhistory", params).await
    }

    /// Deposits, optionally filtered by currency
    ///
    /// GET account/getdeposithistory?currency={currency}
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<ApiResponse<Vec<DepositRecord>>> {
        let mut params = QueryParams::new();
        params.push_opt("currency", currency);
        self.account_request("getdeposithistory", params).await
    }
}
