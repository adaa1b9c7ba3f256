use crate::domain::ports::UserDirectory;
use crate::domain::user::User;
use std::collections::HashMap;

/// A user directory held entirely in memory.
pub struct InMemoryUserDirectory {
    users: HashMap<String, User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|u| (u.user_id.clone(), u))
            .collect();
        Self { users }
    }

    /// The mock directory the batch runner uses: two active users and one
    /// inactive one for exercising the auth failure path.
    pub fn seeded() -> Self {
        Self::new([
            User::new("u001", "Alice", true),
            User::new("u002", "Bob", true),
            User::new("u003", "Carol", false),
        ])
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn lookup(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present_and_absent() {
        let dir = InMemoryUserDirectory::seeded();
        let alice = dir.lookup("u001").unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(alice.active);

        let carol = dir.lookup("u003").unwrap();
        assert!(!carol.active);

        assert!(dir.lookup("u999").is_none());
    }
}
