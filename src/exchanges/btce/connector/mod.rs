use crate::core::kernel::{NonceSequencer, RestClient, Signer};
use std::sync::Arc;

pub mod account;
pub mod market_data;
pub mod trading;

pub use market_data::MarketData;
pub use trading::Trading;

/// BTC-e connector composing the public and the authenticated API
#[derive(Debug)]
pub struct BtceConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub trading: Trading<R>,
}

impl<R: RestClient + Clone> BtceConnector<R> {
    pub fn new(rest: R, signer: Option<Arc<dyn Signer>>, nonces: NonceSequencer) -> Self {
        Self {
            market: MarketData::new(&rest),
            trading: Trading::new(&rest, signer, nonces),
        }
    }
}

impl<R: RestClient> BtceConnector<R> {
    /// Replace the trading credentials; see [`Trading::authenticate`]
    pub fn authenticate(&mut self, api_key: String, secret_key: String) {
        self.trading.authenticate(api_key, secret_key);
    }
}
