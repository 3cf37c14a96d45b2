use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::env;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::user::{self, Role};

const SESSION_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub uid: i32,
    pub role: String,
    pub exp: usize,
}

/// The authenticated user behind a request.
///
/// Handlers receive it as an extractor and pass it down explicitly; nothing
/// reads the session from shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins manage everything; owners manage the locations they own.
    pub fn can_manage(&self, owner_id: Option<i32>) -> bool {
        self.is_admin() || (self.role == Role::Owner && owner_id == Some(self.id))
    }
}

impl From<user::Model> for CurrentUser {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: model.role,
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = DomainError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| DomainError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            DomainError::Unauthorized("Invalid Authorization header format".into())
        })?;

        let claims = decode_jwt(token)
            .map_err(|_| DomainError::Unauthorized("Invalid or expired token".into()))?;

        // The account may have been deleted since the token was issued
        let user = user::Entity::find_by_id(claims.uid)
            .one(state.db())
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Unknown user".into()))?;

        Ok(CurrentUser::from(user))
    }
}

pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| e.to_string())?
        .to_string();
    Ok(password_hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, String> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| e.to_string())?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn get_jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "secret".to_string()
        } else {
            panic!("JWT_SECRET environment variable must be set in production");
        }
    })
}

pub fn create_jwt(user_id: i32, username: &str, role: Role) -> Result<String, String> {
    let secret = get_jwt_secret();
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(SESSION_HOURS))
        .ok_or_else(|| "token expiry out of range".to_string())?
        .timestamp();

    let claims = Claims {
        sub: username.to_owned(),
        uid: user_id,
        role: role.as_str().to_owned(),
        exp: expiration as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| e.to_string())
}

pub fn decode_jwt(token: &str) -> Result<Claims, String> {
    let secret = get_jwt_secret();
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert_ne!(hash, "correct horse");
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn token_carries_user_id_and_role() {
        let token = create_jwt(42, "alice", Role::Owner).unwrap();
        let claims = decode_jwt(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.role, "owner");
    }

    #[test]
    fn owners_manage_only_their_locations() {
        let owner = CurrentUser {
            id: 7,
            username: "olga".into(),
            role: Role::Owner,
        };
        assert!(owner.can_manage(Some(7)));
        assert!(!owner.can_manage(Some(8)));
        assert!(!owner.can_manage(None));

        let plain = CurrentUser {
            role: Role::User,
            ..owner.clone()
        };
        assert!(!plain.can_manage(Some(7)));

        let admin = CurrentUser {
            role: Role::Admin,
            ..owner
        };
        assert!(admin.can_manage(None));
    }
}
