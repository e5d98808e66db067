use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    models::{User, UserRole},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: UserRole,
    pub exp: usize,
}

/// HS256 signing material, built once from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::TimeDelta,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::TimeDelta::try_days(ttl_days).unwrap_or(chrono::TimeDelta::MAX),
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalError("Failed to calculate expiration".to_string()))?
            .timestamp() as usize;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::CharacterType;

    fn user(role: UserRole) -> User {
        User {
            id: 42,
            username: "waffle".to_string(),
            nickname: "Waffle".to_string(),
            password_hash: String::new(),
            role,
            character_type: CharacterType::WaffleBear,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_tokens_verify() {
        let keys = JwtKeys::new("test-secret", 1);
        let token = keys.generate_token(&user(UserRole::Admin)).unwrap();

        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "waffle");
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let token = JwtKeys::new("one", 1)
            .generate_token(&user(UserRole::User))
            .unwrap();

        let err = JwtKeys::new("two", 1).verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn out_of_range_lifetime_fails_instead_of_panicking() {
        let keys = JwtKeys::new("test-secret", i64::MAX);
        let err = keys.generate_token(&user(UserRole::User)).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        // Past the default 60s leeway.
        let keys = JwtKeys::new("test-secret", -1);
        let token = keys.generate_token(&user(UserRole::User)).unwrap();
        assert!(keys.verify_token(&token).is_err());
    }
}
