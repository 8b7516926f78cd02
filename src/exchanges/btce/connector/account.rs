use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::btce::connector::Trading;
use crate::exchanges::btce::rest::format_decimal;
use crate::exchanges::btce::types::{
    AccountInfo, CreateCoupon, HistoryFilter, RedeemCoupon, TradeHistory, TransactionHistory,
    WithdrawCoin,
};
use std::collections::BTreeMap;
use tracing::instrument;

// Account, history and funds methods share the trading credentials and nonce.
impl<R: RestClient> Trading<R> {
    /// Balances, key rights and open order count
    #[instrument(skip(self))]
    pub async fn get_info(&self) -> Result<AccountInfo, ExchangeError> {
        self.call(BTreeMap::new()).await
    }

    #[instrument(skip(self))]
    pub async fn trade_history(
        &self,
        filter: &HistoryFilter,
        pair: Option<&str>,
    ) -> Result<TradeHistory, ExchangeError> {
        let mut params = filter.to_params();
        if let Some(pair) = pair {
            params.insert("pair".to_string(), pair.to_string());
        }

        self.call(params).await
    }

    /// Deposits, withdrawals, fees and coupon movements
    #[instrument(skip(self))]
    pub async fn transaction_history(
        &self,
        filter: &HistoryFilter,
    ) -> Result<TransactionHistory, ExchangeError> {
        self.call(filter.to_params()).await
    }

    #[instrument(skip(self, address))]
    pub async fn withdraw_coin(
        &self,
        coin_name: &str,
        amount: f64,
        address: &str,
    ) -> Result<WithdrawCoin, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("coinName".to_string(), coin_name.to_string());
        params.insert("amount".to_string(), format_decimal(amount));
        params.insert("address".to_string(), address.to_string());

        self.call(params).await
    }

    #[instrument(skip(self))]
    pub async fn create_coupon(
        &self,
        currency: &str,
        amount: f64,
    ) -> Result<CreateCoupon, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("currency".to_string(), currency.to_string());
        params.insert("amount".to_string(), format_decimal(amount));

        self.call(params).await
    }

    // the coupon code is a bearer instrument, keep it out of spans
    #[instrument(skip(self, coupon))]
    pub async fn redeem_coupon(&self, coupon: &str) -> Result<RedeemCoupon, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("coupon".to_string(), coupon.to_string());

        self.call(params).await
    }
}
