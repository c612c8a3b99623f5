use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is missing")]
    Missing,
    #[error("token must have three dot-separated segments")]
    Structure,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a JSON claims object: {0}")]
    Payload(String),
    #[error("token has no '{0}' claim")]
    MissingClaim(&'static str),
}

/// Claims read from the token payload. The signature is never checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub expires_at_epoch_ms: i64,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenValidation {
    pub valid: bool,
    pub role: Option<String>,
    pub expires_at_epoch_ms: Option<i64>,
}

#[derive(Deserialize)]
struct RawClaims {
    exp: Option<f64>,
    role: Option<String>,
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Missing);
    }
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Structure);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    let raw: RawClaims =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;

    let exp = raw
        .exp
        .filter(|exp| exp.is_finite())
        .ok_or(TokenError::MissingClaim("exp"))?;
    let role = raw
        .role
        .filter(|role| !role.trim().is_empty())
        .ok_or(TokenError::MissingClaim("role"))?;

    Ok(TokenClaims {
        expires_at_epoch_ms: (exp * 1000.0) as i64,
        role,
    })
}

/// Decodes `token` and checks its expiry against `now_ms`.
///
/// Never fails: anything that cannot be decoded is reported as invalid.
pub fn validate(token: Option<&str>, now_ms: i64) -> TokenValidation {
    let Some(token) = token else {
        return TokenValidation::default();
    };
    match decode_claims(token) {
        Ok(claims) => TokenValidation {
            valid: claims.expires_at_epoch_ms > now_ms,
            role: Some(claims.role),
            expires_at_epoch_ms: Some(claims.expires_at_epoch_ms),
        },
        Err(err) => {
            log::debug!("rejecting session token: {}", err);
            TokenValidation::default()
        }
    }
}
