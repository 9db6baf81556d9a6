//! Authentication errors.

use thiserror::Error;

use crate::user::Role;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No account matches the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that is already taken.
    #[error("User with this email already exists: {0}")]
    UserAlreadyExists(String),

    /// The action needs a signed-in user.
    #[error("Sign in to continue")]
    NotSignedIn,

    /// Signed in, but the role does not allow the action.
    #[error("{0} access required")]
    Forbidden(Role),

    /// Malformed input, rejected before any request is made.
    #[error("{0}")]
    Validation(String),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] shop_cache::CacheError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }

    /// Check if the caller lacks the sign-in or role an action needs.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, AuthError::NotSignedIn | AuthError::Forbidden(_))
    }

    /// Check if the caller can fix this by changing their input.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AuthError::Cache(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert!(AuthError::UserAlreadyExists("a@b.c".into())
            .to_string()
            .contains("a@b.c"));
    }

    #[test]
    fn test_classification() {
        assert!(AuthError::InvalidCredentials.is_auth_failure());
        assert!(AuthError::Validation("Name is required".into()).is_user_error());
        let cache = AuthError::from(shop_cache::CacheError::StoreError("down".into()));
        assert!(!cache.is_user_error());
        assert!(AuthError::Forbidden(Role::Admin).is_access_denied());
        assert_eq!(AuthError::Forbidden(Role::Admin).to_string(), "admin access required");
    }
}
