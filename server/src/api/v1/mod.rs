use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue,
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL},
    },
    routing::{any, get},
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    api::utils::PreSerializedJson,
    env::EnvSnapshot,
    models::ConfigResponse,
    settings::Diagnostics,
};

mod config;


struct V1StateInner {
    env: EnvSnapshot,
    diagnostics: Diagnostics,
    /// Config body without diagnostics, serialized once from `env`
    config: PreSerializedJson<ConfigResponse>,
}

type V1State = Arc<V1StateInner>;

/// Returns a sub-router serving `/config` and `/health`.
pub fn router(
    env: EnvSnapshot,
    diagnostics: Diagnostics,
) -> Result<Router<()>, serde_json::Error> {
    let config_json = PreSerializedJson::new(&ConfigResponse::from_env(&env))?;
    let state = V1StateInner {
        env,
        diagnostics,
        config: config_json,
    };

    let router = Router::new()
        .route("/health", get(async || ()))
        // Every method gets the same answer, CORS preflight included
        .route("/config", any(config::get_config))
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(Arc::new(state));
    Ok(router)
}
