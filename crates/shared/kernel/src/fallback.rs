//! The shared fail-open resolution combinator.
//!
//! Every "unknown input degrades to a safe default" decision in the platform
//! goes through [`resolve_or_default`] so the policy lives in one place and is
//! independently testable: unknown tenant slugs fall back to the default site,
//! unrecognized theme ids fall back to the base theme, and so on.

/// Looks up `key`; when the lookup misses, returns `default` instead.
///
/// The lookup is a closure rather than a concrete map type so callers can
/// resolve out of hash maps, static tables, or enum parsers alike.
#[inline]
pub fn resolve_or_default<'a, K, V: ?Sized>(
    lookup: impl FnOnce(K) -> Option<&'a V>,
    key: K,
    default: &'a V,
) -> &'a V {
    lookup(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashMap;

    #[test]
    fn hit_returns_the_looked_up_value() {
        let mut map = FxHashMap::default();
        map.insert("acme".to_owned(), 7u32);
        let default = 0u32;

        assert_eq!(*resolve_or_default(|k| map.get(k), "acme", &default), 7);
    }

    #[test]
    fn miss_returns_the_default() {
        let map: FxHashMap<String, u32> = FxHashMap::default();
        let default = 42u32;

        assert_eq!(*resolve_or_default(|k| map.get(k), "ghost", &default), 42);
    }

    #[test]
    fn works_with_unsized_values() {
        let default = "default";
        let resolved = resolve_or_default(|_: &str| None::<&str>, "anything", default);
        assert_eq!(resolved, "default");
    }
}
