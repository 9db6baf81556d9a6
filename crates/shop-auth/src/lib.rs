//! Authentication for the storefront.
//!
//! A mock account registry plus a sign-in session that persists the current
//! user under a single key. Login and registration wait a configurable
//! latency to behave like a remote call.

mod accounts;
mod error;
mod session;
mod user;

pub use accounts::{Account, AccountRegistry};
pub use error::AuthError;
pub use session::{AuthSession, AuthState, DEFAULT_LATENCY, USER_STORAGE_KEY};
pub use user::{Role, User};
