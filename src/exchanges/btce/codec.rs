use crate::core::errors::{ApiError, ExchangeError};
use crate::exchanges::btce::types::{Envelope, TradeResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Encode a trading request body.
///
/// `method` and `nonce` always come first and in that order; the remaining
/// parameters follow form-encoded. `BTreeMap` keeps their order stable, though
/// the exchange does not depend on it.
pub fn encode_request(method: &str, nonce: i64, params: &BTreeMap<String, String>) -> String {
    let mut body = format!("method={}&nonce={}", method, nonce);
    if !params.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        body.push('&');
        body.push_str(&encoded);
    }
    body
}

/// Decode a trading API response into its result shape.
///
/// `success == 1` decodes `return` into `T`; any other value is a rejection by
/// the exchange carrying its `error` message unchanged.
pub fn decode_envelope<T: TradeResult>(raw: &[u8]) -> Result<T, ExchangeError> {
    let envelope: Envelope = serde_json::from_slice(raw).map_err(|e| {
        ExchangeError::DeserializationError(format!("Malformed response envelope: {}", e))
    })?;

    if envelope.success != 1 {
        return Err(ApiError::new(envelope.error.unwrap_or_default()).into());
    }

    serde_json::from_value(envelope.payload.unwrap_or(Value::Null)).map_err(|e| {
        ExchangeError::DeserializationError(format!("Unexpected {} result: {}", T::METHOD, e))
    })
}

/// Decode a public API response.
///
/// Public endpoints return the data directly, or `{"success":0,"error":...}`
/// when the request is refused (e.g. an unknown pair).
pub fn decode_public<T: DeserializeOwned>(raw: &[u8]) -> Result<T, ExchangeError> {
    let value: Value = serde_json::from_slice(raw).map_err(|e| {
        ExchangeError::DeserializationError(format!("Malformed public response: {}", e))
    })?;

    if value.get("success").and_then(Value::as_i64) == Some(0) {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(ApiError::new(message).into());
    }

    serde_json::from_value(value).map_err(|e| {
        ExchangeError::DeserializationError(format!("Unexpected public response: {}", e))
    })
}
