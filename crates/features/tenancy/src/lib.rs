//! Tenancy feature slice.
//!
//! Resolves request hostnames to tenant slugs and tags forwarded requests with
//! the `x-client-id` header. Fully stateless per request; nothing here can
//! fail a request.

mod error;
mod middleware;
mod resolver;

pub use error::TenancyError;
pub use middleware::{ExtractClientId, tag_request};
pub use resolver::TenantResolver;

use phub_kernel::domain::config::EdgeConfig;
use phub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Tenancy feature state.
#[derive(Debug)]
pub struct TenancyInner {
    pub resolver: TenantResolver,
    pub excluded_prefixes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Tenancy {
    inner: Arc<TenancyInner>,
}

impl Tenancy {
    #[must_use]
    pub fn new(inner: TenancyInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    #[must_use]
    pub fn from_config(cfg: &EdgeConfig) -> Self {
        Self::new(TenancyInner {
            resolver: TenantResolver::from_config(&cfg.tenancy),
            excluded_prefixes: cfg.tenancy.excluded_prefixes.clone(),
        })
    }
}

impl Deref for Tenancy {
    type Target = TenancyInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Tenancy {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "tenancy"
    }
}

/// Initialize the tenancy feature.
///
/// # Errors
/// Infallible today; the signature matches the slice contract.
pub fn init(cfg: &EdgeConfig) -> Result<InitializedSlice, TenancyError> {
    tracing::info!(
        base_domain = cfg.tenancy.base_domain.as_deref().unwrap_or("<heuristic>"),
        "Tenancy slice initialized"
    );

    Ok(InitializedSlice::new(Tenancy::from_config(cfg)))
}
