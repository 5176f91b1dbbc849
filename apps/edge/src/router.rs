use axum::Router;
use axum::middleware::from_fn_with_state;
use phub::features::tenancy::{Tenancy, tag_request};
use phub::kernel::prelude::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Tenant tagging runs outermost so every feature sees `x-client-id`.
    let tenancy = state
        .get_slice::<Tenancy>()
        .cloned()
        .unwrap_or_else(|| Tenancy::from_config(&state.config));

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(phub::server::router::system_router())
        .merge(phub::server::router::theming_router())
        .merge(phub::server::router::export_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api/docs", api_doc);

    // Merge all routes and then apply the state to the final router
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .layer(from_fn_with_state(tenancy, tag_request))
}
