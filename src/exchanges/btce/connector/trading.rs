use crate::core::errors::ExchangeError;
use crate::core::kernel::{HmacSigner, NonceSequencer, RestClient, Signer};
use crate::exchanges::btce::rest::{format_decimal, BtceRest};
use crate::exchanges::btce::types::{
    ActiveOrders, CancelOrder, OrderInfo, OrderSide, TradeResponse, TradeResult,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Authenticated trading API.
///
/// Owns the credentials and the nonce sequencer for one API key. Calls may be
/// issued concurrently through `&self`; nonce issuance and body encoding are
/// serialized by the sequencer.
pub struct Trading<R: RestClient> {
    rest: BtceRest<R>,
    signer: Option<Arc<dyn Signer>>,
    nonces: NonceSequencer,
}

impl<R: RestClient + Clone> Trading<R> {
    pub fn new(rest: &R, signer: Option<Arc<dyn Signer>>, nonces: NonceSequencer) -> Self {
        Self {
            rest: BtceRest::new(rest.clone()),
            signer,
            nonces,
        }
    }
}

impl<R: RestClient> Trading<R> {
    /// Replace the credentials used for subsequent calls.
    ///
    /// The nonce sequence carries on from where it was.
    pub fn authenticate(&mut self, api_key: String, secret_key: String) {
        self.signer = Some(Arc::new(HmacSigner::new(api_key, secret_key)));
    }

    /// Replace the signer, e.g. with one that keeps its secret elsewhere
    pub fn set_signer(&mut self, signer: Arc<dyn Signer>) {
        self.signer = Some(signer);
    }

    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    pub fn nonces(&self) -> &NonceSequencer {
        &self.nonces
    }

    pub(super) async fn call<T: TradeResult>(
        &self,
        params: BTreeMap<String, String>,
    ) -> Result<T, ExchangeError> {
        let signer = self.signer.as_deref().ok_or_else(|| {
            ExchangeError::AuthError(format!(
                "{} requires credentials but none were provided",
                T::METHOD
            ))
        })?;

        self.rest.post_signed(signer, &self.nonces, &params).await
    }

    /// Place a limit order
    #[instrument(skip(self))]
    pub async fn trade(
        &self,
        pair: &str,
        side: OrderSide,
        rate: f64,
        amount: f64,
    ) -> Result<TradeResponse, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("pair".to_string(), pair.to_string());
        params.insert("type".to_string(), side.as_str().to_string());
        params.insert("rate".to_string(), format_decimal(rate));
        params.insert("amount".to_string(), format_decimal(amount));

        self.call(params).await
    }

    /// Open orders, optionally for one pair only.
    ///
    /// The exchange answers `"no orders"` when there are none.
    #[instrument(skip(self))]
    pub async fn active_orders(&self, pair: Option<&str>) -> Result<ActiveOrders, ExchangeError> {
        let mut params = BTreeMap::new();
        if let Some(pair) = pair {
            params.insert("pair".to_string(), pair.to_string());
        }

        self.call(params).await
    }

    #[instrument(skip(self))]
    pub async fn order_info(&self, order_id: u64) -> Result<OrderInfo, ExchangeError> {
        self.call(order_params(order_id)).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: u64) -> Result<CancelOrder, ExchangeError> {
        self.call(order_params(order_id)).await
    }
}

impl<R: RestClient> fmt::Debug for Trading<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trading")
            .field("has_credentials", &self.has_credentials())
            .field("nonces", &self.nonces)
            .finish_non_exhaustive()
    }
}

fn order_params(order_id: u64) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("order_id".to_string(), order_id.to_string());
    params
}
