//! Bypass authentication backend
//!
//! Accepts every login. Opens the streaming server to everyone; meant for
//! development and tests.

use async_trait::async_trait;
use ghostream_core::Result;

use crate::Backend;

pub struct BypassBackend;

#[async_trait]
impl Backend for BypassBackend {
    async fn login(&self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_succeeds() {
        let backend = BypassBackend;
        assert!(backend.login("anyone", "anything").await.is_ok());
        assert!(backend.login("", "").await.is_ok());
    }
}
