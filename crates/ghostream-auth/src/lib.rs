//! Authentication backends for Ghostream
//!
//! A stream publisher presents a name and a password; a backend decides
//! whether that pair is valid. All failure causes collapse into one
//! outcome for the caller.

pub mod basic;
pub mod bypass;
pub mod ldap;

pub use basic::BasicBackend;
pub use bypass::BypassBackend;
pub use ldap::LdapBackend;

use async_trait::async_trait;
use ghostream_core::config::{AuthConfig, LdapConfig};
use ghostream_core::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Backend to log a stream publisher in
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns Ok(()) if the name/password pair is valid. Any error is a
    /// login failure; callers must not distinguish the causes.
    async fn login(&self, username: &str, password: &str) -> Result<()>;
}

/// Initialize the authentication backend named by the configuration
pub fn new_backend(auth: &AuthConfig, ldap: &LdapConfig) -> Result<Arc<dyn Backend>> {
    let backend: Arc<dyn Backend> = match auth.backend.to_lowercase().as_str() {
        "basic" => Arc::new(BasicBackend::new(auth.credentials.clone())),
        "bypass" => Arc::new(BypassBackend),
        "ldap" => Arc::new(LdapBackend::new(ldap.clone())),
        other => return Err(Error::UnknownBackend(other.to_string())),
    };

    info!("{} backend successfully initialized", auth.backend);
    Ok(backend)
}
