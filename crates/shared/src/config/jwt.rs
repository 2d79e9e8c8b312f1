use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN_MINUTES: i64 = 15;
pub const REFRESH_TOKEN_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    // uniqueness salt; two tokens minted in the same second must still differ
    pub jti: Uuid,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid, token_type: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(ACCESS_TOKEN_MINUTES)).timestamp() as usize,
            "refresh" => (now + Duration::days(REFRESH_TOKEN_DAYS)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidToken),
        };

        let claims = Claims {
            sub: user_id,
            exp,
            iat,
            jti: Uuid::new_v4(),
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Uuid, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidToken);
        }

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let jwt = JwtConfig::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id, "access").unwrap();
        let decoded = jwt.verify_token(&token, "access").unwrap();

        assert_eq!(decoded, user_id);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(Uuid::new_v4(), "refresh").unwrap();

        let err = jwt.verify_token(&token, "access").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken));
    }

    #[test]
    fn test_unknown_token_type_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let err = jwt.generate_token(Uuid::new_v4(), "session").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken));
    }

    #[test]
    fn test_tokens_for_same_user_are_distinct() {
        let jwt = JwtConfig::new("test-secret");
        let user_id = Uuid::new_v4();

        let first = jwt.generate_token(user_id, "refresh").unwrap();
        let second = jwt.generate_token(user_id, "refresh").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_token_signed_with_other_secret_fails() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");
        let token = other.generate_token(Uuid::new_v4(), "access").unwrap();

        assert!(jwt.verify_token(&token, "access").is_err());
    }
}
