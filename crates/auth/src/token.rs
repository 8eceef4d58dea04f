//! Token service: issuance and validation of signed bearer tokens.
//!
//! Tokens are stateless HS256 JWTs binding a subject identifier to an
//! expiry timestamp. Nothing is persisted server-side; validity is purely
//! signature + expiry + a non-empty subject.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// Process-wide token configuration, fixed at startup.
///
/// The signing secret is always supplied by the caller (environment,
/// secret store); this crate never ships a baked-in key.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: Vec<u8>,
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Claim set carried by a token: subject + expiry, nothing else.
///
/// `sub` defaults to empty on decode so that a signed token without a
/// subject claim is reported as `MissingSubject` rather than as a decode
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: String,
    exp: i64,
}

/// Why a presented token was rejected.
///
/// The distinction exists for audit logging only; callers surface every
/// variant identically (reject as unauthorized).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed or its signature is invalid")]
    Malformed,

    #[error("token has expired")]
    Expired,

    #[error("token carries no subject")]
    MissingSubject,

    #[error("failed to encode token")]
    Encoding,
}

/// Issues and validates HS256-signed bearer tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            ttl: config.ttl,
        }
    }

    /// Issue a token for `subject`, expiring `ttl` from now.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let expires_at = Utc::now() + self.ttl;
        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Encoding)
    }

    /// Validate `token` against the service's own clock.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate `token` as of `now`, returning the bound subject.
    ///
    /// Expiry is compared against the supplied clock with zero leeway.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        // Expiry is checked below against the injected clock, not the
        // library's wall clock (which also applies a default leeway).
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Malformed)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        if data.claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(data.claims.sub)
    }
}
