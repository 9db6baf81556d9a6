//! The mock account registry.
//!
//! Passwords are kept in plain text: the registry stands in for a remote
//! identity service and never leaves the process.

use crate::user::{Role, User};
use crate::AuthError;
use shop_commerce::ids::UserId;
use std::fmt;

/// A registered account.
#[derive(Clone)]
pub struct Account {
    /// Public profile.
    pub user: User,
    password: String,
}

impl Account {
    /// Create an account.
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("user", &self.user)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Accounts known for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// The two demo accounts.
    pub fn seeded() -> Self {
        let seed = |id: &str, name: &str, email: &str, password: &str, role: Role| {
            Account::new(
                User {
                    id: UserId::new(id),
                    name: name.to_string(),
                    email: email.to_string(),
                    role,
                },
                password,
            )
        };
        Self {
            accounts: vec![
                seed("u1", "Admin User", "admin@example.com", "admin123", Role::Admin),
                seed("u2", "Regular User", "user@example.com", "user123", Role::User),
            ],
        }
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if no accounts are registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Check if an email is taken.
    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.user.email == email)
    }

    /// Find the user whose email and password both match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.matches(email, password))
            .map(|a| a.user.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Create a regular user account.
    ///
    /// Ids are sequential: the new account gets `u{n+1}` where `n` is the
    /// number of accounts before it.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.contains_email(email) {
            return Err(AuthError::UserAlreadyExists(email.to_string()));
        }
        let user = User {
            id: UserId::new(format!("u{}", self.accounts.len() + 1)),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
        };
        self.accounts.push(Account::new(user.clone(), password));
        Ok(user)
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_logins() {
        let registry = AccountRegistry::seeded();
        let admin = registry.authenticate("admin@example.com", "admin123").unwrap();
        assert_eq!(admin.id, "u1");
        assert_eq!(admin.role, Role::Admin);

        let user = registry.authenticate("user@example.com", "user123").unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_wrong_password() {
        let registry = AccountRegistry::seeded();
        assert!(matches!(
            registry.authenticate("admin@example.com", "user123"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(registry.authenticate("Admin@example.com", "admin123").is_err());
    }

    #[test]
    fn test_register_assigns_next_id() {
        let mut registry = AccountRegistry::seeded();
        let user = registry.register("New Person", "new@example.com", "pw").unwrap();
        assert_eq!(user.id, "u3");
        assert_eq!(user.role, Role::User);
        assert_eq!(registry.len(), 3);
        assert!(registry.authenticate("new@example.com", "pw").is_ok());
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut registry = AccountRegistry::seeded();
        assert!(matches!(
            registry.register("Someone", "user@example.com", "x"),
            Err(AuthError::UserAlreadyExists(email)) if email == "user@example.com"
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_debug_hides_password() {
        let registry = AccountRegistry::seeded();
        assert!(!format!("{:?}", registry).contains("admin123"));
    }
}
