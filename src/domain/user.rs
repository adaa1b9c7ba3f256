use serde::{Deserialize, Serialize};

/// An account in the user directory.
///
/// Loaded once at startup and read-only during pipeline execution.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub active: bool,
}

impl User {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, active: bool) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            active,
        }
    }
}
