//! Edge service configuration.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level edge configuration shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EdgeConfigInner {
    pub server: ServerConfig,
    pub tenancy: TenancyConfig,
    pub clients: ClientsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct EdgeConfig {
    #[serde(flatten, default)]
    inner: Arc<EdgeConfigInner>,
}

impl Deref for EdgeConfig {
    type Target = EdgeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for EdgeConfig {
    fn deref_mut(&mut self) -> &mut EdgeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Tenant detection knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TenancyConfig {
    /// Deployed base domain (e.g. `playbook.aisolutionhub.co.uk`). When set,
    /// suffix matching against it decides the tenant slug; the label-count
    /// heuristic only applies to hosts outside this domain.
    pub base_domain: Option<String>,
    /// Hostnames that always resolve to the default tenant.
    pub local_hosts: Vec<String>,
    /// Path prefixes the tagging middleware leaves untouched.
    pub excluded_prefixes: Vec<String>,
}

/// Location of per-client site files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientsConfig {
    /// Directory of `<client-id>.toml` site files.
    pub dir: PathBuf,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4680, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            base_domain: None,
            local_hosts: vec!["localhost".to_owned(), "127.0.0.1".to_owned()],
            excluded_prefixes: vec![
                "/_app".to_owned(),
                "/clients".to_owned(),
                "/assets".to_owned(),
            ],
        }
    }
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("clients") }
    }
}
