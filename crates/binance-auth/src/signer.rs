//! HMAC-SHA256 request signing
//!
//! Binance signature algorithm:
//! 1. HMAC-SHA256(secret, canonical_body)
//! 2. Lowercase hex encode result
//!
//! The canonical body is the form-encoded parameter string exactly as it will
//! be transmitted, so callers must serialize once and reuse that string.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical request body with the given secret
///
/// The secret is used as raw bytes. An empty secret is not rejected; it simply
/// produces a signature the exchange will refuse.
///
/// # Returns
/// Lowercase hex-encoded HMAC-SHA256 digest (64 characters)
pub fn sign(canonical_body: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonical_body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current time as milliseconds since the Unix epoch
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the Binance REST API documentation
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOC_QUERY: &str = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
    const DOC_SIGNATURE: &str = "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71";

    #[test]
    fn test_known_vector() {
        assert_eq!(sign(DOC_QUERY, DOC_SECRET), DOC_SIGNATURE);
    }

    #[test]
    fn test_signing_is_deterministic() {
        let first = sign("symbol=BTCUSDT&timestamp=1", "secret");
        let second = sign("symbol=BTCUSDT&timestamp=1", "secret");
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = sign("a=1", "k");
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_body_and_secret_both_matter() {
        let base = sign("a=1", "k");
        assert_ne!(base, sign("a=2", "k"));
        assert_ne!(base, sign("a=1", "j"));
    }

    #[test]
    fn test_empty_secret_still_signs() {
        assert_eq!(sign("a=1", "").len(), 64);
    }

    #[test]
    fn test_timestamp_is_millis() {
        // Anything after 2020-01-01 in milliseconds has 13 digits
        let ts = timestamp_ms();
        assert!(ts > 1_577_836_800_000);
        assert_eq!(ts.to_string().len(), 13);
    }
}
