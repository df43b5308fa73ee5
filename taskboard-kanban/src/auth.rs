//! Auth Store: the signed-in user.
//!
//! There is no credential check; passwords are accepted and discarded.

use crate::persist::Snapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStore {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    is_authenticated: bool,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Sign in. Without a name (or with an empty one) the part of the email
    /// before `@` is used.
    pub fn login(&mut self, email: &str, _password: &str, name: Option<&str>) -> &User {
        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => email.split('@').next().unwrap_or_default().to_string(),
        };
        tracing::debug!(email, "logged in");
        self.sign_in(User {
            email: email.to_string(),
            name,
        })
    }

    /// Create an account and sign in as it
    pub fn register(&mut self, email: &str, _password: &str, name: &str) -> &User {
        tracing::debug!(email, "registered");
        self.sign_in(User {
            email: email.to_string(),
            name: name.to_string(),
        })
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::debug!(email = %user.email, "logged out");
        }
        self.is_authenticated = false;
    }

    fn sign_in(&mut self, user: User) -> &User {
        self.is_authenticated = true;
        self.user.insert(user)
    }
}

impl Snapshot for AuthStore {
    const NAMESPACE: &'static str = "auth-storage";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_from_email() {
        let mut auth = AuthStore::new();
        let user = auth.login("ada@example.com", "secret", None).clone();
        assert_eq!(user.name, "ada");
        assert!(auth.is_authenticated());

        auth.login("grace@example.com", "", Some(""));
        assert_eq!(auth.user().unwrap().name, "grace");
    }

    #[test]
    fn test_login_with_name() {
        let mut auth = AuthStore::new();
        auth.login("ada@example.com", "pw", Some("Ada Lovelace"));
        assert_eq!(auth.user().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_email_without_at_sign() {
        let mut auth = AuthStore::new();
        auth.login("localuser", "pw", None);
        assert_eq!(auth.user().unwrap().name, "localuser");
    }

    #[test]
    fn test_register_then_logout() {
        let mut auth = AuthStore::new();
        auth.register("ada@example.com", "pw", "Ada");
        assert_eq!(auth.user().unwrap().email, "ada@example.com");

        auth.logout();
        assert!(auth.user().is_none());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut auth = AuthStore::new();
        auth.login("ada@example.com", "pw", None);
        let value = serde_json::to_value(&auth).unwrap();
        assert_eq!(value["isAuthenticated"], true);
        assert_eq!(value["user"]["name"], "ada");
    }
}
