//! Theming feature slice.
//!
//! Owns the per-client site registry and the pure theme-resolution functions
//! that turn a stored preference into an effective rendering configuration.

mod error;
mod handlers;
mod registry;
pub mod resolver;

pub use error::ThemingError;
pub use handlers::router;
pub use registry::SiteRegistry;
pub use resolver::{is_forced_dark, resolve_effective_theme, resolve_rendering_config};

use phub_kernel::domain::config::EdgeConfig;
use phub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Theming feature state.
#[derive(Debug)]
pub struct ThemingInner {
    pub registry: SiteRegistry,
}

#[derive(Debug, Clone)]
pub struct Theming {
    inner: Arc<ThemingInner>,
}

impl Theming {
    #[must_use]
    pub fn new(inner: ThemingInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Theming {
    type Target = ThemingInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Theming {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "theming"
    }
}

/// Initialize the theming feature.
///
/// # Errors
/// Infallible today; registry loading skips bad files instead of failing.
pub fn init(cfg: &EdgeConfig) -> Result<InitializedSlice, ThemingError> {
    let registry = SiteRegistry::load(&cfg.clients);
    tracing::info!(clients = registry.len(), "Theming slice initialized");

    Ok(InitializedSlice::new(Theming::new(ThemingInner { registry })))
}
