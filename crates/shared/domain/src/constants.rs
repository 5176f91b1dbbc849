//! Shared string constants used across slices and the edge router.

/// Request header carrying the resolved tenant slug.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Slug served when no tenant can be derived from the hostname.
pub const DEFAULT_CLIENT_ID: &str = "default";

/// Built-in syntax-highlight pair used when no creative theme is active.
pub const DEFAULT_HIGHLIGHT_LIGHT: &str = "github-light";
pub const DEFAULT_HIGHLIGHT_DARK: &str = "github-dark";

// Accessibility mode identifiers (persisted client-side, hence untrusted input).
pub const DYSLEXIA_FRIENDLY: &str = "dyslexia-friendly";
pub const HIGH_CONTRAST: &str = "high-contrast";
pub const LARGE_TEXT: &str = "large-text";

// Content section identifiers used in per-client site files.
pub const OVERVIEW: &str = "overview";
pub const SETUP: &str = "setup";
pub const TRACKS: &str = "tracks";
pub const CONTEXT_LAB: &str = "context-lab";
pub const FAQ: &str = "faq";

// OpenAPI tags.
pub const SYSTEM_TAG: &str = "System";
pub const SITE_TAG: &str = "Site";
pub const EXPORT_TAG: &str = "Export";
