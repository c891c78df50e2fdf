/*
[INPUT]:  Absolute request URL and API secret
[OUTPUT]: Signed request header (apisign) and per-request nonces
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Signs request URLs for authenticated endpoints.
///
/// The v1.1 scheme signs the absolute URL (base URL + path + query string,
/// `apikey` and `nonce` included) with HMAC-SHA512 keyed by the API secret.
/// The signature travels in the `apisign` header as lowercase hex.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer for the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign the absolute request URL, returning lowercase hex
    pub fn sign(&self, url: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(url.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Generates the `nonce` parameter for signed requests.
///
/// The remote service may reject reused nonces, and wall-clock seconds
/// collide on rapid successive calls. Each nonce is therefore
/// `max(unix_now, previous + 1)`: equal to the current Unix time under
/// normal pacing, strictly increasing always.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce, in Unix seconds
    pub fn next(&self) -> u64 {
        let now = Utc::now().timestamp().max(0) as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or(0);
        now.max(prev + 1)
    }
}
