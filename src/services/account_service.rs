//! Account Service - signup and login

use sea_orm::*;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::DomainError;
use crate::infrastructure::auth::{create_jwt, hash_password, verify_password};
use crate::models::user::{self, Entity as User, Role};
use crate::utils::dates::now_rfc3339;

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Self-registration form.
///
/// Has no `role` field; a `role` key sent by the client is dropped during
/// deserialization. Absent fields deserialize empty and fail validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignUpForm {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1 to 150 characters."),
        custom(function = "validate_username_chars")
    )]
    pub username: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(
        length(min = 8, message = "This password is too short. It must contain at least 8 characters."),
        custom(function = "validate_not_numeric")
    )]
    pub password1: String,
    #[validate(must_match(other = "password1", message = "The two password fields didn't match."))]
    pub password2: String,
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_username");
        err.message = Some(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
                .into(),
        );
        Err(err)
    }
}

fn validate_not_numeric(password: &str) -> Result<(), ValidationError> {
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("password_entirely_numeric");
        err.message = Some("This password is entirely numeric.".into());
        return Err(err);
    }
    Ok(())
}

/// A user about to be inserted by self-registration. The role is not an input.
#[derive(Debug)]
pub struct NewUser {
    username: String,
    email: String,
    password_hash: String,
}

impl NewUser {
    pub fn from_form(form: SignUpForm) -> Result<Self, DomainError> {
        let password_hash = hash_password(&form.password1).map_err(DomainError::Internal)?;
        Ok(Self {
            username: form.username,
            email: form.email,
            password_hash,
        })
    }

    fn into_active_model(self) -> user::ActiveModel {
        let now = now_rfc3339();
        user::ActiveModel {
            username: Set(self.username),
            email: Set(self.email),
            password_hash: Set(self.password_hash),
            role: Set(Role::User),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

/// Signed-in user together with the session token issued for it
#[derive(Debug, Clone)]
pub struct Session {
    pub user: user::Model,
    pub token: String,
}

impl Session {
    fn open(user: user::Model) -> Result<Self, DomainError> {
        let token = create_jwt(user.id, &user.username, user.role).map_err(DomainError::Internal)?;
        Ok(Self { user, token })
    }
}

/// Register a regular user and sign them in.
pub async fn sign_up(db: &DatabaseConnection, form: SignUpForm) -> Result<Session, DomainError> {
    form.validate()?;

    if form.password1.eq_ignore_ascii_case(&form.username) {
        return Err(DomainError::field(
            "password1",
            "The password is too similar to the username.",
        ));
    }

    let taken = User::find()
        .filter(user::Column::Username.eq(form.username.as_str()))
        .count(db)
        .await?;
    if taken > 0 {
        return Err(DomainError::field("username", USERNAME_TAKEN));
    }

    let new_user = NewUser::from_form(form)?;
    let created = new_user
        .into_active_model()
        .insert(db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::field("username", USERNAME_TAKEN)
            }
            _ => DomainError::from(e),
        })?;

    tracing::info!("New account registered: {}", created);
    Session::open(created)
}

/// Check credentials and issue a session token.
pub async fn login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Session, DomainError> {
    tracing::info!("Login attempt for user: {}", username);

    let Some(found) = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
    else {
        tracing::warn!("User not found: {}", username);
        return Err(DomainError::Unauthorized("Invalid credentials".into()));
    };

    match verify_password(password, &found.password_hash) {
        Ok(true) => Session::open(found),
        _ => {
            tracing::warn!("Password verification failed for user: {}", username);
            Err(DomainError::Unauthorized("Invalid credentials".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, p1: &str, p2: &str) -> SignUpForm {
        SignUpForm {
            username: username.into(),
            email: email.into(),
            password1: p1.into(),
            password2: p2.into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_form() {
        assert!(form("maria.k", "maria@example.com", "s3cure-pass", "s3cure-pass")
            .validate()
            .is_ok());
    }

    #[test]
    fn reports_each_bad_field() {
        let errors = form("bad name!", "not-an-email", "12345678", "87654321")
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password1"));
        assert!(fields.contains_key("password2"));
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = form("maria", "maria@example.com", "short", "short")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("password1"));
    }

    #[test]
    fn role_in_payload_is_ignored() {
        let parsed: SignUpForm = serde_json::from_value(serde_json::json!({
            "username": "mallory",
            "email": "mallory@example.com",
            "password1": "s3cure-pass",
            "password2": "s3cure-pass",
            "role": "admin"
        }))
        .unwrap();
        let new_user = NewUser::from_form(parsed).unwrap();
        let active = new_user.into_active_model();
        assert_eq!(active.role.unwrap(), Role::User);
    }
}
