//! LDAP authentication backend
//!
//! Authenticates a publisher by binding to the directory server as
//! `cn=<name>,<user_dn>` with the supplied password. Every attempt opens
//! its own connection and closes it before returning; nothing is pooled
//! or retried.

use async_trait::async_trait;
use ghostream_core::{config::LdapConfig, Error, Result};
use ldap3::LdapConnAsync;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::Backend;

pub struct LdapBackend {
    cfg: LdapConfig,
}

impl LdapBackend {
    pub fn new(cfg: LdapConfig) -> Self {
        Self { cfg }
    }

    /// Fully-qualified bind identity for a publisher name
    fn bind_dn(&self, username: &str) -> String {
        format!("cn={},{}", username, self.cfg.user_dn)
    }
}

#[async_trait]
impl Backend for LdapBackend {
    async fn login(&self, username: &str, password: &str) -> Result<()> {
        let username = resolve_alias(&self.cfg.aliases, username);
        let bind_dn = self.bind_dn(&username);

        debug!("Connecting to LDAP server: {}", self.cfg.uri);

        let (conn, mut ldap) = LdapConnAsync::new(&self.cfg.uri)
            .await
            .map_err(|e| Error::BackendUnavailable(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!("LDAP connection error: {}", e);
            }
        });

        let result = ldap
            .simple_bind(&bind_dn, password)
            .await
            .map_err(|e| Error::BackendUnavailable(e.to_string()))?;

        let _ = ldap.unbind().await;

        // Result code 0 is LDAP success; everything else is a failed bind
        if result.rc != 0 {
            return Err(Error::InvalidCredentials);
        }

        Ok(())
    }
}

/// Follow the alias map until the name has no alias. A cycle in the map
/// terminates after at most one hop per entry.
fn resolve_alias(aliases: &HashMap<String, String>, username: &str) -> String {
    let mut name = username.to_string();
    let mut hops = 0;

    while let Some(target) = aliases.get(&name) {
        debug!("Using stream alias {} for username {}", name, target);
        name = target.clone();

        hops += 1;
        if hops > aliases.len() {
            break;
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_dn_construction() {
        let backend = LdapBackend::new(LdapConfig {
            uri: "ldap://127.0.0.1:389".to_string(),
            user_dn: "cn=users,dc=example,dc=com".to_string(),
            aliases: HashMap::new(),
        });

        assert_eq!(
            backend.bind_dn("alice"),
            "cn=alice,cn=users,dc=example,dc=com"
        );
    }

    #[test]
    fn test_alias_resolution() {
        let mut aliases = HashMap::new();
        aliases.insert("conference".to_string(), "av-team".to_string());
        aliases.insert("av-team".to_string(), "erdnaxe".to_string());

        assert_eq!(resolve_alias(&aliases, "conference"), "erdnaxe");
        assert_eq!(resolve_alias(&aliases, "erdnaxe"), "erdnaxe");
        assert_eq!(resolve_alias(&aliases, "unrelated"), "unrelated");
    }

    #[test]
    fn test_alias_cycle_terminates() {
        let mut aliases = HashMap::new();
        aliases.insert("a".to_string(), "b".to_string());
        aliases.insert("b".to_string(), "a".to_string());

        // Any answer is acceptable as long as resolution returns
        let resolved = resolve_alias(&aliases, "a");
        assert!(resolved == "a" || resolved == "b");
    }

    #[tokio::test]
    async fn test_login_fails_when_directory_unreachable() {
        let backend = LdapBackend::new(LdapConfig {
            uri: "ldap://127.0.0.1:1".to_string(),
            user_dn: "cn=users,dc=example,dc=com".to_string(),
            aliases: HashMap::new(),
        });

        let result = backend.login("alice", "secret").await;
        assert!(matches!(result, Err(Error::BackendUnavailable(_))));
    }
}
