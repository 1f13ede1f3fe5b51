use axum::{Router, http::header};
use tower::ServiceBuilder;
use tower_http::{sensitive_headers::SetSensitiveHeadersLayer, trace::TraceLayer};

use crate::{env::EnvSnapshot, settings::Settings};

pub mod utils;
mod v1;

/// Builds the API router.
///
/// The v1 routes are served under `/api/v1` and, unversioned, under `/api` so that
/// `GET /api/config` keeps working for clients of the serverless deployment. Request bodies are
/// never read, so no size limit applies.
pub fn new_api_router(
    env: EnvSnapshot,
    settings: &Settings,
) -> Result<Router<()>, serde_json::Error> {
    let v1 = v1::router(env, settings.diagnostics)?;
    let router = Router::new()
        .nest("/api/v1", v1.clone())
        .nest("/api", v1)
        .layer(
            // order is top to bottom
            ServiceBuilder::new()
                .layer(SetSensitiveHeadersLayer::new(vec![
                    header::AUTHORIZATION,
                    header::COOKIE,
                ]))
                .layer(TraceLayer::new_for_http()),
        );
    Ok(router)
}
