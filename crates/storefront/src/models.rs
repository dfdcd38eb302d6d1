//! Session-related types.

use serde::{Deserialize, Serialize};

use mini_pos_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user; the
/// email is the key every engine operation is scoped by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address.
    pub email: Email,
    /// Display name for greetings.
    pub name: String,
}

impl CurrentUser {
    /// The user's first name, for the dashboard greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let user = CurrentUser {
            email: Email::parse("ali@example.com").unwrap(),
            name: "Ali Hassan".to_string(),
        };
        assert_eq!(user.first_name(), "Ali");
    }
}
