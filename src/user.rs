use std::fmt;

use serde::{Deserialize, Serialize};

/// A single user's identity data.
///
/// Plain value container: no validation, no credential handling. The field
/// order and names are the canonical shape for anything that serializes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String, // stored as given; hashing is the caller's concern
    pub email: String,
}

impl User {
    /// Builds a user with all three fields set, exactly as passed.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ username: {}, password: {}, email: {} }}",
            self.username, self.password, self.email
        )
    }
}
