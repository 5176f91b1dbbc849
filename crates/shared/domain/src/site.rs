//! Per-client site configuration.

use crate::constants::{CONTEXT_LAB, FAQ, OVERVIEW, SETUP, TRACKS};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Which content sections a client's site renders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SectionSet: u32 {
        const OVERVIEW = 1 << 0;
        const SETUP = 1 << 1;
        const TRACKS = 1 << 2;
        const CONTEXT_LAB = 1 << 3;
        const FAQ = 1 << 4;

        const ALL = Self::OVERVIEW.bits()
            | Self::SETUP.bits()
            | Self::TRACKS.bits()
            | Self::CONTEXT_LAB.bits()
            | Self::FAQ.bits();
    }
}

impl From<&str> for SectionSet {
    fn from(s: &str) -> Self {
        match s {
            OVERVIEW => Self::OVERVIEW,
            SETUP => Self::SETUP,
            TRACKS => Self::TRACKS,
            CONTEXT_LAB => Self::CONTEXT_LAB,
            FAQ => Self::FAQ,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl SectionSet {
    /// Identifiers of the enabled sections, in page order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        [
            (Self::OVERVIEW, OVERVIEW),
            (Self::SETUP, SETUP),
            (Self::TRACKS, TRACKS),
            (Self::CONTEXT_LAB, CONTEXT_LAB),
            (Self::FAQ, FAQ),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

// Site files are hand-edited TOML, so sections serialize as a list of
// identifiers rather than raw bits. Unknown names degrade to nothing.
impl Serialize for SectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(|n| Self::from(n.as_str())).fold(Self::empty(), |acc, s| acc | s))
    }
}

/// Branding and content-visibility record for one client.
///
/// Exactly one configuration is active per session; it is loaded at boot and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub tagline: String,
    pub logo_light: String,
    pub logo_dark: String,
    pub has_developer_track: bool,
    pub sections: SectionSet,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Playbook Hub".to_owned(),
            tagline: "Practical playbooks for working with AI".to_owned(),
            logo_light: "/assets/logo-light.svg".to_owned(),
            logo_dark: "/assets/logo-dark.svg".to_owned(),
            has_developer_track: false,
            sections: SectionSet::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_enables_every_section() {
        let site = SiteConfig::default();
        assert_eq!(site.sections, SectionSet::ALL);
        assert!(!site.has_developer_track);
    }

    #[test]
    fn site_deserializes_from_toml_with_section_names() {
        let raw = r#"
            brand_name = "Acme"
            has_developer_track = true
            sections = ["overview", "tracks", "mystery"]
        "#;
        let site: SiteConfig = toml::from_str(raw).expect("site toml");
        assert_eq!(site.brand_name, "Acme");
        assert!(site.has_developer_track);
        assert_eq!(site.sections, SectionSet::OVERVIEW | SectionSet::TRACKS);
        // Untouched fields keep their defaults.
        assert_eq!(site.logo_dark, "/assets/logo-dark.svg");
    }

    #[test]
    fn sections_serialize_as_names() {
        let json = serde_json::to_value(SectionSet::SETUP | SectionSet::FAQ).expect("json");
        assert_eq!(json, serde_json::json!(["setup", "faq"]));
    }
}
