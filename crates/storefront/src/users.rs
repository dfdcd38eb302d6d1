//! User repository over the key-value store.
//!
//! User records live as one list under the `users` key, the way the original
//! single-session demo stores them. Passwords are stored and compared as
//! opaque strings; there is deliberately no hashing or credential security
//! model here.

use serde::{Deserialize, Serialize};

use mini_pos_core::Email;
use mini_pos_engine::store::{self, KvStore, StoreError, keys};

/// A registered user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    /// Display name.
    pub name: String,
    /// Login identity; also the key for the user's cart and history.
    pub email: Email,
    /// Opaque login secret.
    pub password: String,
}

/// Repository for user records.
pub struct UserStore<'a> {
    store: &'a dyn KvStore,
}

impl<'a> UserStore<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    fn all(&self) -> Result<Vec<StoredUser>, StoreError> {
        Ok(store::get_typed::<Vec<StoredUser>>(self.store, keys::USERS, "user")?
            .unwrap_or_default())
    }

    /// Find a user by email.
    ///
    /// Emails are lowercased at parse time, so equality here is the
    /// case-insensitive match login expects.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the user list cannot be read or decoded.
    pub fn find(&self, email: &Email) -> Result<Option<StoredUser>, StoreError> {
        Ok(self.all()?.into_iter().find(|user| &user.email == email))
    }

    /// Append a new user record.
    ///
    /// Uniqueness is the caller's concern (see
    /// [`crate::services::auth::AuthService::register`]).
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the user list cannot be read or written.
    pub fn create(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> Result<StoredUser, StoreError> {
        let user = StoredUser {
            name: name.to_owned(),
            email: email.clone(),
            password: password.to_owned(),
        };

        let mut users = self.all()?;
        users.push(user.clone());
        store::set_typed(self.store, keys::USERS, &users)?;

        Ok(user)
    }
}
