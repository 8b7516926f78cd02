use crate::core::config::{ExchangeConfig, Venue};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{
    Clock, HmacSigner, NonceSequencer, ReqwestRest, RestClient, RestClientBuilder,
    RestClientConfig, Signer, SystemClock,
};
use crate::exchanges::btce::connector::BtceConnector;
use std::sync::Arc;

/// Builder for creating BTC-e / WEX connectors
pub struct BtceBuilder {
    config: ExchangeConfig,
    user_agent: Option<String>,
    clock: Arc<dyn Clock>,
}

impl BtceBuilder {
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            config,
            user_agent: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.config.venue = venue;
        self
    }

    /// Set base URL for REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Clock the nonce sequencer reads
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build a connector over reqwest
    pub fn build(self) -> Result<BtceConnector<ReqwestRest>, ExchangeError> {
        let mut rest_config =
            RestClientConfig::new(self.config.resolved_base_url(), self.config.venue.to_string());
        if let Some(timeout) = self.config.timeout_seconds {
            rest_config = rest_config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent.clone() {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let rest = RestClientBuilder::new(rest_config).build()?;
        Ok(self.build_with_rest(rest))
    }

    /// Build a connector over any transport
    pub fn build_with_rest<R: RestClient + Clone>(self, rest: R) -> BtceConnector<R> {
        let signer: Option<Arc<dyn Signer>> = if self.config.has_credentials() {
            Some(Arc::new(HmacSigner::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            )))
        } else {
            None
        };

        let nonces = NonceSequencer::with_clock(self.clock);
        if let Some(last) = self.config.initial_nonce {
            nonces.advance_to(last);
        }

        BtceConnector::new(rest, signer, nonces)
    }
}

/// Create a connector from configuration with default settings
pub fn build_connector(config: ExchangeConfig) -> Result<BtceConnector<ReqwestRest>, ExchangeError> {
    BtceBuilder::new(config).build()
}
