//! Export feature slice.
//!
//! Converts markdown instructional content to plain text for copy/paste into
//! documents that do not speak markdown.

mod error;
mod handlers;
pub mod markdown;

pub use error::ExportError;
pub use handlers::router;
pub use markdown::markdown_to_plain;

use phub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Export feature state. Stateless; the slice exists so the feature shows up
/// in boot diagnostics like every other one.
#[derive(Debug)]
pub struct ExportInner {}

#[derive(Debug, Clone)]
pub struct Export {
    inner: Arc<ExportInner>,
}

impl Export {
    #[must_use]
    pub fn new(inner: ExportInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Export {
    type Target = ExportInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Export {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "export"
    }
}

/// Initialize the export feature.
///
/// # Errors
/// Infallible today; the signature matches the slice contract.
pub fn init() -> Result<InitializedSlice, ExportError> {
    tracing::info!("Export slice initialized");

    Ok(InitializedSlice::new(Export::new(ExportInner {})))
}
