//! HS256 token encoding/decoding.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::claims::JwtClaims;

#[derive(Debug, Error)]
pub enum TokenCodecError {
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// Symmetric HS256 codec over [`JwtClaims`].
///
/// Decoding verifies the signature only; time-window checks run separately
/// through [`crate::claims::validate_claims`], since the claims carry RFC 3339
/// timestamps rather than the numeric `exp`/`nbf` registered claims.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn encode(&self, claims: &JwtClaims) -> Result<String, TokenCodecError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(TokenCodecError::Encode)
    }

    pub fn decode(&self, token: &str) -> Result<JwtClaims, TokenCodecError> {
        decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenCodecError::Decode)
    }
}
