//! Authentication service.
//!
//! Registration and login over the user store. Per the system's scope there
//! is no credential security model: the password is compared as an opaque
//! string, nothing more.

mod error;

pub use error::AuthError;

use mini_pos_core::Email;
use mini_pos_engine::KvStore;

use crate::users::{StoredUser, UserStore};

/// Authentication service.
pub struct AuthService<'a> {
    users: UserStore<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self {
            users: UserStore::new(store),
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if name or password is blank,
    /// `AuthError::InvalidEmail` if the email doesn't parse, and
    /// `AuthError::UserAlreadyExists` if the email is already registered
    /// (case-insensitively).
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<StoredUser, AuthError> {
        let name = name.trim();
        if name.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(email)?;

        if self.users.find(&email)?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        Ok(self.users.create(name, &email, password)?)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown, the
    /// email doesn't parse, or the password doesn't match. The three cases
    /// are deliberately indistinguishable to the caller.
    pub fn login(&self, email: &str, password: &str) -> Result<StoredUser, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mini_pos_engine::MemoryStore;

    #[test]
    fn test_register_then_login() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        auth.register("Omar", "omar@example.com", "secret").unwrap();

        let user = auth.login("omar@example.com", "secret").unwrap();
        assert_eq!(user.name, "Omar");
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        assert!(matches!(
            auth.register("  ", "omar@example.com", "secret"),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            auth.register("Omar", "omar@example.com", ""),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            auth.register("Omar", "not-an-email", "secret"),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_duplicate_registration_is_rejected_case_insensitively() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);

        auth.register("Omar", "omar@example.com", "secret").unwrap();

        assert!(matches!(
            auth.register("Omar Again", "OMAR@example.com", "other"),
            Err(AuthError::UserAlreadyExists)
        ));
    }

    #[test]
    fn test_login_failures_are_uniform() {
        let store = MemoryStore::new();
        let auth = AuthService::new(&store);
        auth.register("Omar", "omar@example.com", "secret").unwrap();

        assert!(matches!(
            auth.login("omar@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody@example.com", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("not-an-email", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
