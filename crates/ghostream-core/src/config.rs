//! Configuration for Ghostream

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhostreamConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ldap: LdapConfig,

    #[serde(default)]
    pub stream: StreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GhostreamConfig {
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to parse config: {}", e)))
    }

    /// Resolve configuration from the process environment.
    ///
    /// The five documented variables keep their historical unprefixed
    /// names; everything newer uses the GHOSTREAM_ prefix.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(uri) = std::env::var("LDAP_URI") {
            config.ldap.uri = uri;
        }
        if let Ok(dn) = std::env::var("LDAP_USER_DN") {
            config.ldap.user_dn = dn;
        }
        if let Ok(name) = std::env::var("SITE_NAME") {
            config.site.name = name;
        }
        if let Ok(hostname) = std::env::var("SITE_HOSTNAME") {
            config.site.hostname = hostname;
        }
        if let Ok(favicon) = std::env::var("FAVICON") {
            config.site.favicon = favicon;
        }

        if let Ok(addr) = std::env::var("GHOSTREAM_LISTEN_ADDRESS") {
            config.server.listen_address = addr;
        }
        if let Ok(backend) = std::env::var("GHOSTREAM_AUTH_BACKEND") {
            config.auth.backend = backend;
        }
        if let Ok(base) = std::env::var("GHOSTREAM_STREAM_INGEST_BASE") {
            config.stream.ingest_base = base;
        }
        if let Ok(level) = std::env::var("GHOSTREAM_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Display metadata bound into the HTML views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub hostname: String,
    pub favicon: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Ghostream".to_string(),
            hostname: "localhost".to_string(),
            favicon: "/favicon.ico".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Backend selector: ldap, basic or bypass
    pub backend: String,

    /// Username to bcrypt hash, used by the basic backend
    #[serde(default)]
    pub credentials: HashMap<String, String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: "ldap".to_string(),
            credentials: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdapConfig {
    /// Directory server URI (ldap:// or ldaps://). Not validated here; a
    /// malformed URI surfaces when the bind client uses it.
    pub uri: String,

    /// Base DN appended to the cn=<name> relative identity
    pub user_dn: String,

    /// Stream alias to account name
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Default for LdapConfig {
    fn default() -> Self {
        Self {
            uri: "ldap://127.0.0.1:389".to_string(),
            user_dn: "cn=users,dc=example,dc=com".to_string(),
            aliases: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Prefix of the ingest URL returned on successful authentication.
    /// The stream key is appended as the last path segment.
    pub ingest_base: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            ingest_base: "rtmp://127.0.0.1:1925/app".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = GhostreamConfig::default();
        assert_eq!(config.ldap.uri, "ldap://127.0.0.1:389");
        assert_eq!(config.ldap.user_dn, "cn=users,dc=example,dc=com");
        assert_eq!(config.site.name, "Ghostream");
        assert_eq!(config.site.hostname, "localhost");
        assert_eq!(config.site.favicon, "/favicon.ico");
        assert_eq!(config.stream.ingest_base, "rtmp://127.0.0.1:1925/app");
        assert_eq!(config.auth.backend, "ldap");
    }

    #[test]
    fn test_parse_toml() {
        let config: GhostreamConfig = toml::from_str(
            r#"
            [site]
            name = "My Stream"
            hostname = "stream.example.com"
            favicon = "/static/favicon.png"

            [ldap]
            uri = "ldaps://ldap.example.com:636"
            user_dn = "ou=people,dc=example,dc=com"

            [ldap.aliases]
            conference = "av-team"

            [auth]
            backend = "basic"

            [auth.credentials]
            alice = "$2b$15$abcdefghijklmnopqrstuv"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "My Stream");
        assert_eq!(config.ldap.uri, "ldaps://ldap.example.com:636");
        assert_eq!(config.ldap.aliases["conference"], "av-team");
        assert_eq!(config.auth.backend, "basic");
        assert!(config.auth.credentials.contains_key("alice"));
        // Unset sections keep their defaults
        assert_eq!(config.server.listen_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: GhostreamConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.name, "Ghostream");
        assert_eq!(config.ldap.uri, "ldap://127.0.0.1:389");
    }
}
