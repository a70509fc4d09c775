use anyhow::Result;
use base64::Engine as _;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user id in our case
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

/// Validates the bearer tokens of users.
///
/// Tokens are issued elsewhere with the same shared secret.
pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    time_valid: Duration,
}

/// Generate a 256-bit base64 encoded secret
fn generate_secret() -> String {
    base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>())
}

impl JwtState {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            time_valid: Duration::days(1),
        }
    }

    pub fn random() -> Self {
        Self::new(&generate_secret())
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims.sub)
    }
}
