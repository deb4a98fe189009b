//! GitHub webhook signature verification.
//!
//! GitHub signs the raw request body with HMAC-SHA256 and sends the result in
//! `X-Hub-Signature-256` as `sha256=<hex digest>`.
//! Reference: https://docs.github.com/en/webhooks/using-webhooks/validating-webhook-deliveries

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Why a request failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingSignature,
    InvalidSignature,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingSignature => "missing_signature",
            Rejection::InvalidSignature => "invalid_signature",
        }
    }
}

/// Outcome of checking a webhook body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Signature matched the configured secret.
    Verified,
    /// No secret is configured; the request is let through unauthenticated.
    Unverified,
    Rejected(Rejection),
}

/// Verify a GitHub webhook signature.
///
/// # Arguments
///
/// * `secret` - The webhook secret, `None` or blank disables verification
/// * `body` - The exact raw request body
/// * `signature` - The `X-Hub-Signature-256` header value, if present
pub fn verify_github_signature(
    secret: Option<&str>,
    body: &[u8],
    signature: Option<&str>,
) -> Verification {
    let Some(secret) = secret.filter(|s| is_signature_verification_enabled(s)) else {
        return Verification::Unverified;
    };

    let Some(signature) = signature else {
        warn!(body_length = body.len(), "github_signature_missing");
        return Verification::Rejected(Rejection::MissingSignature);
    };

    let expected_signature = match sign_body(secret, body) {
        Ok(s) => s,
        Err(_) => {
            warn!("github_signature_invalid_key");
            return Verification::Rejected(Rejection::InvalidSignature);
        }
    };

    if !constant_time_compare(&expected_signature, signature) {
        warn!(
            expected_length = expected_signature.len(),
            actual_length = signature.len(),
            "github_signature_mismatch"
        );
        return Verification::Rejected(Rejection::InvalidSignature);
    }

    Verification::Verified
}

/// Compute the `sha256=<hex>` header value GitHub would send for `body`.
pub fn sign_body(secret: &str, body: &[u8]) -> Result<String, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(body);

    Ok(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// A secret made only of whitespace counts as unset.
pub fn is_signature_verification_enabled(secret: &str) -> bool {
    !secret.trim().is_empty()
}
