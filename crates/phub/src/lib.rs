//! Facade crate for Playbook Hub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use phub_domain as domain;
pub use phub_kernel as kernel;

use phub_domain::config::EdgeConfig;

pub mod server {
    pub mod router {
        pub use phub_export::router as export_router;
        pub use phub_kernel::server::system_router;
        pub use phub_theming::router as theming_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use phub_export as export;
    pub use phub_tenancy as tenancy;
    pub use phub_theming as theming;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["tenancy", "theming", "export"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &EdgeConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Tenancy
    slices.push(features::tenancy::init(config)?);

    // Theming
    slices.push(features::theming::init(config)?);

    // Export
    slices.push(features::export::init()?);

    Ok(slices)
}
