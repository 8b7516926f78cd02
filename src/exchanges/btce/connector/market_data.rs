use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::btce::rest::BtceRest;
use crate::exchanges::btce::types::{Depth, Info, PublicOptions, Ticker, Trades};
use tracing::instrument;

/// Public market data: no credentials, no nonce, no shared state
#[derive(Debug)]
pub struct MarketData<R: RestClient> {
    rest: BtceRest<R>,
}

impl<R: RestClient + Clone> MarketData<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: BtceRest::new(rest.clone()),
        }
    }
}

impl<R: RestClient> MarketData<R> {
    /// Last 24h statistics for each pair
    #[instrument(skip(self))]
    pub async fn ticker(
        &self,
        pairs: &[&str],
        options: PublicOptions,
    ) -> Result<Ticker, ExchangeError> {
        self.rest.get_pairs("ticker", pairs, &options).await
    }

    /// Open asks and bids for each pair
    #[instrument(skip(self))]
    pub async fn depth(&self, pairs: &[&str], options: PublicOptions) -> Result<Depth, ExchangeError> {
        self.rest.get_pairs("depth", pairs, &options).await
    }

    /// Most recent trades for each pair
    #[instrument(skip(self))]
    pub async fn trades(
        &self,
        pairs: &[&str],
        options: PublicOptions,
    ) -> Result<Trades, ExchangeError> {
        self.rest.get_pairs("trades", pairs, &options).await
    }

    /// Server time and the trading rules of every listed pair
    #[instrument(skip(self))]
    pub async fn info(&self) -> Result<Info, ExchangeError> {
        self.rest.get_public("info").await
    }
}
