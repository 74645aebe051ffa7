//! Cross-origin access control. Requests carrying an `Origin` header outside
//! the allow-list are rejected, requests without one pass through.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::errors::{error_with_details, ORIGIN_NOT_ALLOWED};

/// Origins of the local front-end dev and preview servers. Always allowed.
pub const LOCAL_DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:4173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
];

#[derive(Debug, Clone)]
pub struct AllowedOrigins(Arc<[HeaderValue]>);

impl AllowedOrigins {
    /// Builds the allow-list from the configured origins plus
    /// [`LOCAL_DEV_ORIGINS`]. Trailing slashes are ignored and invalid values
    /// are skipped with a warning.
    pub fn new<I>(configured: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let configured = configured
            .into_iter()
            .map(|origin| origin.as_ref().trim().trim_end_matches('/').to_owned())
            .filter(|origin| !origin.is_empty());

        let origins = LOCAL_DEV_ORIGINS
            .iter()
            .map(|&origin| origin.to_owned())
            .chain(configured)
            .filter_map(|origin| {
                HeaderValue::from_str(&origin)
                    .inspect_err(|err| warn!(%origin, "Ignoring invalid allowed origin: {err}"))
                    .ok()
            })
            .collect::<Vec<_>>();

        Self(origins.into())
    }

    pub fn is_allowed(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}

pub fn add<S: Clone + Send + Sync + 'static>(
    origins: AllowedOrigins,
) -> impl FnOnce(Router<S>) -> Router<S> {
    move |router| {
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::predicate({
                let origins = origins.clone();
                move |origin, _| origins.is_allowed(origin)
            }))
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        router
            .layer(cors)
            .layer(from_fn_with_state(origins, reject_disallowed))
    }
}

async fn reject_disallowed(
    State(origins): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !origins.is_allowed(origin) {
            warn!(?origin, "Rejecting request from disallowed origin");
            return error_with_details(
                StatusCode::FORBIDDEN,
                ORIGIN_NOT_ALLOWED,
                "This origin is not allowed to access the contact relay",
            );
        }
    }

    next.run(request).await
}
