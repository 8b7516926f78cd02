//! Transport kernel shared by every authenticated and public call.
//!
//! The kernel knows nothing about individual operations. It provides:
//!
//! - `NonceSequencer`: strictly increasing nonces per set of credentials
//! - `Signer` / `HmacSigner`: HMAC-SHA512 body signing into `Key`/`Sign` headers
//! - `RestClient` / `ReqwestRest`: HTTP delivery returning raw response bodies
//!
//! # Example
//! ```rust,no_run
//! use btce::core::kernel::*;
//!
//! # async fn example() -> Result<(), btce::ExchangeError> {
//! let rest = RestClientBuilder::new(RestClientConfig::new(
//!     "https://wex.nz".to_string(),
//!     "wex".to_string(),
//! ))
//! .build()?;
//! let signer = HmacSigner::new("api_key".to_string(), "secret".to_string());
//! let nonces = NonceSequencer::new();
//!
//! let body = nonces.next_with(|nonce| format!("method=getInfo&nonce={}", nonce));
//! let headers = signer.sign_request(body.as_bytes())?;
//! let raw = rest.post_form("/tapi", body.into_bytes(), &headers).await?;
//! # let _ = raw;
//! # Ok(())
//! # }
//! ```
pub mod nonce;
pub mod rest;
pub mod signer;

pub use nonce::{Clock, NonceSequencer, SystemClock};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, FORM_CONTENT_TYPE};
pub use signer::{sign, HmacSigner, Signer, KEY_HEADER, SIGN_HEADER};
