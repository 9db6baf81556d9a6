//! Sign-in session management.

use crate::accounts::AccountRegistry;
use crate::user::{Role, User};
use crate::AuthError;
use serde::{Deserialize, Serialize};
use shop_cache::Cache;
use shop_commerce::checkout::CheckoutCustomer;
use std::time::Duration;

/// Key the signed-in user is persisted under.
pub const USER_STORAGE_KEY: &str = "user";

/// Simulated round trip for login and registration.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Outcome of the last auth action, as the UI shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// The signed-in user.
    pub user: Option<User>,
    /// Whether someone is signed in.
    pub is_authenticated: bool,
    /// Message from the last failed action.
    pub error: Option<String>,
}

impl AuthState {
    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            error: None,
        }
    }
}

/// The current sign-in session.
///
/// Holds the account registry and mirrors the signed-in user to the cache
/// so a later run starts signed in.
#[derive(Debug)]
pub struct AuthSession {
    cache: Cache,
    registry: AccountRegistry,
    latency: Duration,
    state: AuthState,
}

impl AuthSession {
    /// Open a session, restoring any persisted user.
    ///
    /// An unparsable record is deleted and the session starts signed out.
    pub fn open(cache: Cache) -> Self {
        let state = match cache.get::<User>(USER_STORAGE_KEY) {
            Ok(Some(user)) => {
                tracing::debug!(user_id = %user.id, "restored signed-in user");
                AuthState::signed_in(user)
            }
            Ok(None) => AuthState::default(),
            Err(e) => {
                tracing::warn!(key = USER_STORAGE_KEY, error = %e, "discarding unreadable user record");
                if let Err(e) = cache.delete(USER_STORAGE_KEY) {
                    tracing::warn!(key = USER_STORAGE_KEY, error = %e, "failed to delete user record");
                }
                AuthState::default()
            }
        };
        Self {
            cache,
            registry: AccountRegistry::seeded(),
            latency: DEFAULT_LATENCY,
            state,
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the account registry.
    pub fn with_registry(mut self, registry: AccountRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The signed-in user.
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Check if someone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// The signed-in user as a checkout customer.
    pub fn customer(&self) -> Option<CheckoutCustomer> {
        self.user().map(CheckoutCustomer::from)
    }

    /// Accounts known to this session.
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// The signed-in user, provided they hold `role`.
    ///
    /// Admins pass every role check.
    pub fn require_role(&self, role: Role) -> Result<&User, AuthError> {
        let user = self.state.user.as_ref().ok_or(AuthError::NotSignedIn)?;
        if user.role == role || user.is_admin() {
            Ok(user)
        } else {
            tracing::info!(user_id = %user.id, required = role.as_str(), "access denied");
            Err(AuthError::Forbidden(role))
        }
    }

    /// The signed-in user if they are an admin.
    pub fn require_admin(&self) -> Result<&User, AuthError> {
        self.require_role(Role::Admin)
    }

    /// Sign in with email and password.
    ///
    /// A failed attempt signs the session out.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let email = email.trim();
        require_email(email)?;
        require("Password", password)?;

        tokio::time::sleep(self.latency).await;

        match self.registry.authenticate(email, password) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                self.sign_in(user)
            }
            Err(e) => {
                tracing::info!(email, "sign-in rejected");
                self.cache.delete(USER_STORAGE_KEY)?;
                self.state = AuthState {
                    error: Some(e.to_string()),
                    ..AuthState::default()
                };
                Err(e)
            }
        }
    }

    /// Create an account and sign in as it.
    ///
    /// A failed attempt leaves any current sign-in untouched.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        let name = name.trim();
        let email = email.trim();
        require("Name", name)?;
        require_email(email)?;
        require("Password", password)?;

        tokio::time::sleep(self.latency).await;

        match self.registry.register(name, email, password) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "registered");
                self.sign_in(user)
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Sign out and forget the persisted user.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.cache.delete(USER_STORAGE_KEY)?;
        if let Some(user) = self.state.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.state = AuthState::default();
        Ok(())
    }

    fn sign_in(&mut self, user: User) -> Result<&User, AuthError> {
        self.cache.set(USER_STORAGE_KEY, &user)?;
        self.state = AuthState {
            is_authenticated: true,
            ..AuthState::default()
        };
        Ok(&*self.state.user.insert(user))
    }
}

fn require(field: &str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), AuthError> {
    require("Email", email)?;
    if !email.contains('@') {
        return Err(AuthError::Validation(format!(
            "{} is not a valid email address",
            email
        )));
    }
    Ok(())
}
