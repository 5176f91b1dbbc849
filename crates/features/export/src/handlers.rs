//! HTTP surface for plain-text export.

use crate::markdown::markdown_to_plain;
use axum::http::header;
use axum::response::IntoResponse;
use phub_domain::constants::EXPORT_TAG;
use phub_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(export_handler))
}

#[utoipa::path(
    post,
    path = "/api/export",
    request_body(content = String, content_type = "text/plain", description = "Markdown source"),
    responses((status = OK, description = "Plain-text rendition of the submitted markdown", body = String, content_type = "text/plain")),
    tag = EXPORT_TAG,
)]
#[allow(clippy::unused_async)]
async fn export_handler(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], markdown_to_plain(&body))
}
