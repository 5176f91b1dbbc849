//! Shared HTTP server building blocks: state registry, system routes.

mod health;
pub mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError};

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes every deployment carries regardless of which features are enabled.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
