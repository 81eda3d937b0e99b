/*
[INPUT]:  Query string payload and API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 request signature
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or payload format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings for private (SIGNED) endpoints
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Generate a client order id (32 hex chars, within the 36 char limit)
    pub fn client_order_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Sign the exact query string that will be sent
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
