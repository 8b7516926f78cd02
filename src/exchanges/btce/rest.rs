use crate::core::errors::ExchangeError;
use crate::core::kernel::{NonceSequencer, RestClient, Signer};
use crate::exchanges::btce::codec::{decode_envelope, decode_public, encode_request};
use crate::exchanges::btce::types::{PublicOptions, TradeResult};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Trading API endpoint
pub const TRADE_ENDPOINT: &str = "/tapi";
/// Prefix of the public API v3 endpoints
pub const PUBLIC_PREFIX: &str = "/api/3";

/// Typed wrapper around `RestClient` for the BTC-e API
#[derive(Debug, Clone)]
pub struct BtceRest<R: RestClient> {
    client: R,
}

impl<R: RestClient> BtceRest<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// Run one authenticated call.
    ///
    /// The nonce is issued and the body encoded under the sequencer lock, then the
    /// body is signed and sent unchanged. The first failing stage ends the call.
    #[instrument(skip(self, signer, nonces, params), fields(method = T::METHOD, param_count = params.len()))]
    pub async fn post_signed<T: TradeResult>(
        &self,
        signer: &dyn Signer,
        nonces: &NonceSequencer,
        params: &BTreeMap<String, String>,
    ) -> Result<T, ExchangeError> {
        let (nonce, body) =
            nonces.next_with(|nonce| (nonce, encode_request(T::METHOD, nonce, params)));
        debug!(nonce, "Signing request");

        let headers = signer.sign_request(body.as_bytes())?;
        let raw = self
            .client
            .post_form(TRADE_ENDPOINT, body.into_bytes(), &headers)
            .await?;

        decode_envelope(&raw).map_err(|err| {
            if let Some(reason) = err.api_message() {
                debug!(reason, "Request rejected by exchange");
            }
            err
        })
    }

    /// GET a public endpoint for one or more pairs
    #[instrument(skip(self, options), fields(endpoint = %endpoint, pair_count = pairs.len()))]
    pub async fn get_pairs<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        pairs: &[&str],
        options: &PublicOptions,
    ) -> Result<T, ExchangeError> {
        let path = pair_path(endpoint, pairs)?;
        let query = options.to_query();
        let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let raw = self.client.get(&path, &query).await?;
        decode_public(&raw)
    }

    /// GET a public endpoint that takes no pairs
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub async fn get_public<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ExchangeError> {
        let raw = self
            .client
            .get(&format!("{}/{}", PUBLIC_PREFIX, endpoint), &[])
            .await?;
        decode_public(&raw)
    }
}

/// Path of a public pair endpoint, e.g. `/api/3/ticker/btc_usd-ltc_usd`
pub fn pair_path(endpoint: &str, pairs: &[&str]) -> Result<String, ExchangeError> {
    if pairs.is_empty() || pairs.iter().any(|pair| pair.trim().is_empty()) {
        return Err(ExchangeError::InvalidParameters(
            "At least one non-empty pair is required".to_string(),
        ));
    }
    Ok(format!("{}/{}/{}", PUBLIC_PREFIX, endpoint, pairs.join("-")))
}

/// Render an amount or rate the way the exchange expects: plain decimal,
/// shortest representation, no exponent
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}
