//! Convenience re-exports for slice and app crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::fallback::resolve_or_default;
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use phub_domain::config::EdgeConfig;
pub use phub_domain::registry::{FeatureSlice, InitializedSlice};
