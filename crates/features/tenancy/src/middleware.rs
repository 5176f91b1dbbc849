//! Request-tagging middleware.
//!
//! Every request outside the excluded path prefixes gets exactly one
//! `x-client-id` header derived from its hostname. Client-supplied values for
//! that header are replaced; the edge is the only authority for tenant
//! identity. The middleware never rejects a request.

use crate::Tenancy;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use phub_domain::constants::{CLIENT_ID_HEADER, DEFAULT_CLIENT_ID};
use phub_domain::tenant::ClientId;
use std::convert::Infallible;
use tracing::trace;

/// Axum middleware: resolve the hostname and tag the forwarded request.
pub async fn tag_request(State(tenancy): State<Tenancy>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if tenancy.excluded_prefixes.iter().any(|prefix| path.starts_with(prefix.as_str())) {
        return next.run(req).await;
    }

    let slug = {
        let host = req
            .headers()
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| req.uri().host())
            .unwrap_or("localhost");
        tenancy.resolver.resolve(host)
    };

    trace!(client = %slug, path = %req.uri().path(), "Tagged request");

    let value = HeaderValue::from_str(slug.as_str())
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CLIENT_ID));
    req.headers_mut().insert(CLIENT_ID_HEADER, value);

    next.run(req).await
}

/// Extractor for the tag written by [`tag_request`].
///
/// Missing or unreadable headers degrade to the default slug, so handlers are
/// total even when the middleware was bypassed.
#[derive(Debug, Clone)]
pub struct ExtractClientId(pub ClientId);

impl<S> FromRequestParts<S> for ExtractClientId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or_else(ClientId::default_id, ClientId::from);
        Ok(Self(id))
    }
}
