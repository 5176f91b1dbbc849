//! Site-configuration registry.
//!
//! One TOML file per client, keyed by file stem, loaded once at boot. The
//! registry is immutable afterwards; reloading requires a fresh boot. Loading
//! is fail-open: unreadable files are skipped with a warning and a missing
//! directory yields an empty registry, so the edge always serves at least the
//! built-in default site.

use config::{Config, File};
use fxhash::FxHashMap;
use phub_domain::config::ClientsConfig;
use phub_domain::constants::DEFAULT_CLIENT_ID;
use phub_domain::site::SiteConfig;
use phub_domain::tenant::ClientId;
use phub_kernel::fallback::resolve_or_default;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SiteRegistry {
    sites: FxHashMap<String, SiteConfig>,
    default_site: SiteConfig,
}

impl SiteRegistry {
    /// Loads every `<client-id>.toml` under the configured directory.
    #[must_use]
    pub fn load(cfg: &ClientsConfig) -> Self {
        let mut sites = FxHashMap::default();

        match fs::read_dir(&cfg.dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_none_or(|ext| ext != "toml") {
                        continue;
                    }
                    let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                        continue;
                    };
                    match load_site_file(&path) {
                        Ok(site) => {
                            debug!(client = id, brand = %site.brand_name, "Loaded site file");
                            sites.insert(id.to_owned(), site);
                        }
                        Err(err) => {
                            warn!(client = id, %err, "Skipping unreadable site file");
                        }
                    }
                }
            }
            Err(err) => {
                warn!(dir = %cfg.dir.display(), %err, "No client site directory; serving defaults");
            }
        }

        // A deployed default.toml overrides the built-in default record.
        let default_site = sites.get(DEFAULT_CLIENT_ID).cloned().unwrap_or_default();

        Self { sites, default_site }
    }

    /// Builds a registry from in-memory records (tests, embedded deployments).
    #[must_use]
    pub fn from_sites(sites: FxHashMap<String, SiteConfig>) -> Self {
        let default_site = sites.get(DEFAULT_CLIENT_ID).cloned().unwrap_or_default();
        Self { sites, default_site }
    }

    /// Deterministic lookup; unknown ids fall back to the default record.
    #[must_use]
    pub fn resolve(&self, id: &ClientId) -> &SiteConfig {
        resolve_or_default(|key| self.sites.get(key), id.as_str(), &self.default_site)
    }

    /// Known client ids (for boot diagnostics).
    pub fn client_ids(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }
}

fn load_site_file(path: &Path) -> Result<SiteConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::from(path).required(true))
        .build()?
        .try_deserialize::<SiteConfig>()
}
