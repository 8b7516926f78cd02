use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha512;
use std::collections::HashMap;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the public API key
pub const KEY_HEADER: &str = "Key";
/// Header carrying the body signature
pub const SIGN_HEADER: &str = "Sign";

/// Lowercase hex HMAC-SHA512 of `payload` keyed with `secret`
pub fn sign(secret: &str, payload: &[u8]) -> Result<String, ExchangeError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| ExchangeError::AuthError(format!("Failed to create HMAC: {}", e)))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Signer trait for request authentication
///
/// Implementations turn a fully encoded request body into the headers that
/// authenticate it. The body must not change after signing.
pub trait Signer: Send + Sync {
    /// Sign `body` and return the headers to attach to the request
    fn sign_request(&self, body: &[u8]) -> Result<HashMap<String, String>, ExchangeError>;
}

/// HMAC-SHA512 signer producing the `Key` and `Sign` headers
pub struct HmacSigner {
    api_key: Secret<String>,
    secret_key: Secret<String>,
}

impl HmacSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
        }
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

impl Signer for HmacSigner {
    fn sign_request(&self, body: &[u8]) -> Result<HashMap<String, String>, ExchangeError> {
        let signature = sign(self.secret_key.expose_secret(), body)?;

        let mut headers = HashMap::new();
        headers.insert(
            KEY_HEADER.to_string(),
            self.api_key.expose_secret().clone(),
        );
        headers.insert(SIGN_HEADER.to_string(), signature);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer_get_info() {
        let signature = sign("secret", b"method=getInfo&nonce=1").unwrap();
        assert_eq!(
            signature,
            "e420ff78eeeb55d09d89f116a88e586082dca58c52af2614c25c4087de562684\
             b51949368104fe139ea2831345b7c50a229d04513b59319ceafb00b4b11f5995"
        );
    }

    #[test]
    fn test_rfc4231_case_2() {
        let signature = sign("Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signature_shape_and_determinism() {
        let payloads: [&[u8]; 3] = [b"", b"method=Trade&nonce=7&pair=btc_usd", &[0, 255, 10]];
        for payload in payloads {
            let first = sign("s3cr3t", payload).unwrap();
            let second = sign("s3cr3t", payload).unwrap();

            assert_eq!(first, second);
            assert_eq!(first.len(), 128);
            assert!(first
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_body_mutation_changes_signature() {
        let original = sign("secret", b"method=getInfo&nonce=1").unwrap();
        let mutated = sign("secret", b"method=getInfo&nonce=2").unwrap();
        assert_ne!(original, mutated);
    }

    #[test]
    fn test_hmac_signer_headers() {
        let signer = HmacSigner::new("my_key".to_string(), "secret".to_string());
        let headers = signer.sign_request(b"method=getInfo&nonce=1").unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[KEY_HEADER], "my_key");
        assert_eq!(
            headers[SIGN_HEADER],
            sign("secret", b"method=getInfo&nonce=1").unwrap()
        );
        assert!(!format!("{:?}", signer).contains("secret"));
    }
}
