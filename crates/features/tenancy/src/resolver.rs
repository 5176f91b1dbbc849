//! Hostname to tenant-slug resolution.
//!
//! Resolution is total: any input that cannot be attributed to a tenant
//! degrades to the default slug. Availability beats precise tenant detection.

use phub_domain::config::TenancyConfig;
use phub_domain::tenant::ClientId;

/// Minimum dot-separated label count for the subdomain heuristic to treat the
/// first label as a tenant slug (`<slug>.<brand>.<domain>.<tld1>.<tld2>`).
const MIN_TENANT_LABELS: usize = 5;

/// Stateless hostname resolver. Cheap to clone, safe to call per request.
#[derive(Debug, Clone, Default)]
pub struct TenantResolver {
    base_domain: Option<String>,
    local_hosts: Vec<String>,
}

impl TenantResolver {
    #[must_use]
    pub fn from_config(cfg: &TenancyConfig) -> Self {
        Self { base_domain: cfg.base_domain.clone(), local_hosts: cfg.local_hosts.clone() }
    }

    /// Resolves a request hostname to a [`ClientId`]. Never fails.
    ///
    /// A port suffix is stripped first. Local development hosts map to the
    /// default slug. When a base domain is configured, `<slug>.<base>` wins
    /// over the label-count heuristic; hosts outside the base domain (and all
    /// hosts when none is configured) fall back to the heuristic: more than 4
    /// labels selects the first label verbatim, anything shorter is default.
    #[must_use]
    pub fn resolve(&self, host: &str) -> ClientId {
        let host = host.split(':').next().unwrap_or(host).trim();

        if host.is_empty() || self.local_hosts.iter().any(|h| h == host) {
            return ClientId::default_id();
        }

        if let Some(base) = &self.base_domain {
            if host == base {
                return ClientId::default_id();
            }
            if let Some(slug) = host.strip_suffix(base.as_str()).and_then(|s| s.strip_suffix('.')) {
                // Only a single extra label names a tenant; deeper nesting is
                // ambiguous and falls through to the heuristic.
                if !slug.is_empty() && !slug.contains('.') {
                    return ClientId::new(slug);
                }
            }
        }

        let mut labels = host.split('.');
        let first = labels.next().unwrap_or_default();
        // `first` was consumed above, so count the remainder against one less.
        if !first.is_empty() && labels.count() >= MIN_TENANT_LABELS - 1 {
            ClientId::new(first)
        } else {
            ClientId::default_id()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> TenantResolver {
        TenantResolver::from_config(&TenancyConfig::default())
    }

    #[test]
    fn five_labels_select_the_first() {
        let resolver = heuristic();
        assert_eq!(resolver.resolve("acme.playbook.aisolutionhub.co.uk").as_str(), "acme");
        // Case preserved verbatim.
        assert_eq!(resolver.resolve("AcMe.playbook.aisolutionhub.co.uk").as_str(), "AcMe");
    }

    #[test]
    fn four_labels_fall_back_to_default() {
        let resolver = heuristic();
        assert!(resolver.resolve("playbook.aisolutionhub.co.uk").is_default());
    }

    #[test]
    fn local_hosts_are_default() {
        let resolver = heuristic();
        assert!(resolver.resolve("localhost").is_default());
        assert!(resolver.resolve("127.0.0.1").is_default());
        assert!(resolver.resolve("localhost:5173").is_default());
    }

    #[test]
    fn port_suffix_is_stripped() {
        let resolver = heuristic();
        assert_eq!(resolver.resolve("acme.playbook.aisolutionhub.co.uk:8443").as_str(), "acme");
    }

    #[test]
    fn garbage_degrades_to_default() {
        let resolver = heuristic();
        assert!(resolver.resolve("").is_default());
        assert!(resolver.resolve("....").is_default());
        assert!(resolver.resolve(".playbook.aisolutionhub.co.uk.x").is_default());
    }

    #[test]
    fn base_domain_overrides_the_heuristic() {
        let resolver = TenantResolver::from_config(&TenancyConfig {
            base_domain: Some("playbook.aisolutionhub.com".to_owned()),
            ..TenancyConfig::default()
        });

        // Single-label TLD the heuristic would misclassify.
        assert_eq!(resolver.resolve("acme.playbook.aisolutionhub.com").as_str(), "acme");
        assert!(resolver.resolve("playbook.aisolutionhub.com").is_default());
        // Deeper nesting falls through to the heuristic (5 labels here).
        assert_eq!(resolver.resolve("a.b.playbook.aisolutionhub.com").as_str(), "a");
        // Foreign hosts still go through the heuristic.
        assert_eq!(resolver.resolve("acme.playbook.aisolutionhub.co.uk").as_str(), "acme");
    }
}
