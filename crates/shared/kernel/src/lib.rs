//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config
//! loading, fail-open resolution, and the shared API state.
//!
//! ## Config loading
//! ```rust,ignore
//! use phub_kernel::config::load_config;
//! let cfg: phub_domain::config::EdgeConfig = load_config(Some("edge")).unwrap();
//! ```
//!
//! ## Fail-open resolution
//! ```rust
//! use phub_kernel::fallback::resolve_or_default;
//!
//! let known = [("acme", 1)];
//! let fallback = 0;
//! let hit = resolve_or_default(
//!     |k| known.iter().find(|(id, _)| *id == k).map(|(_, v)| v),
//!     "nope",
//!     &fallback,
//! );
//! assert_eq!(*hit, 0);
//! ```

pub mod config;
pub mod fallback;
pub mod prelude;
pub mod server;

pub use phub_domain as domain;
