use phub_tenancy::TenantResolver;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9-]{0,9}"
}

proptest! {
    // Fewer than 5 labels never name a tenant.
    #[test]
    fn short_hosts_resolve_to_default(labels in prop::collection::vec(label(), 1..=4)) {
        let resolver = TenantResolver::default();
        prop_assert!(resolver.resolve(&labels.join(".")).is_default());
    }

    // 5+ labels select the first label verbatim.
    #[test]
    fn long_hosts_resolve_to_first_label(labels in prop::collection::vec(label(), 5..=8)) {
        let resolver = TenantResolver::default();
        let host = labels.join(".");
        let resolved = resolver.resolve(&host);
        prop_assert_eq!(resolved.as_str(), labels[0].as_str());
    }

    // Total and deterministic over arbitrary input.
    #[test]
    fn resolution_is_total_and_pure(host in ".*") {
        let resolver = TenantResolver::default();
        let first = resolver.resolve(&host);
        let second = resolver.resolve(&host);
        prop_assert_eq!(first, second);
    }
}
