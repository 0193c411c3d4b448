//! Basic authentication backend
//!
//! Checks the password against a bcrypt hash from the configuration.
//! To generate a hash:
//! `python3 -c 'import bcrypt; print(bcrypt.hashpw(b"PASSWORD", bcrypt.gensalt(rounds=15)).decode("ascii"))'`

use async_trait::async_trait;
use ghostream_core::{Error, Result};
use std::collections::HashMap;

use crate::Backend;

pub struct BasicBackend {
    /// Username to bcrypt-hashed password
    credentials: HashMap<String, String>,
}

impl BasicBackend {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl Backend for BasicBackend {
    async fn login(&self, username: &str, password: &str) -> Result<()> {
        let hash = self
            .credentials
            .get(username)
            .ok_or(Error::InvalidCredentials)?;

        match bcrypt::verify(password, hash) {
            Ok(true) => Ok(()),
            // A malformed hash in the configuration rejects the login
            // the same way a wrong password does
            _ => Err(Error::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_with(username: &str, password: &str) -> BasicBackend {
        let hash = bcrypt::hash(password, 4).unwrap();
        let mut credentials = HashMap::new();
        credentials.insert(username.to_string(), hash);
        BasicBackend::new(credentials)
    }

    #[tokio::test]
    async fn test_valid_password() {
        let backend = backend_with("alice", "correct horse");
        assert!(backend.login("alice", "correct horse").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let backend = backend_with("alice", "correct horse");
        let result = backend.login("alice", "battery staple").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let backend = backend_with("alice", "correct horse");
        let result = backend.login("bob", "correct horse").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_malformed_hash_rejects() {
        let mut credentials = HashMap::new();
        credentials.insert("alice".to_string(), "not-a-bcrypt-hash".to_string());
        let backend = BasicBackend::new(credentials);

        let result = backend.login("alice", "anything").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }
}
