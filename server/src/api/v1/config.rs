use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{
    api::v1::V1State,
    diagnostics::{self, RequestSummary},
    models::ConfigResponse,
};

pub(super) const X_DEBUG_TIMESTAMP: HeaderName = HeaderName::from_static("x-debug-timestamp");

pub async fn get_config(State(state): State<V1State>, headers: HeaderMap) -> Response {
    if !state.diagnostics.logs() {
        return state.config.clone().into_response();
    }

    let timestamp = diagnostics::format_timestamp(Utc::now());
    diagnostics::log_report(
        &state.env,
        &RequestSummary::from_headers(&headers),
        &timestamp,
    );

    let header = HeaderValue::from_str(&timestamp);
    let mut response = if state.diagnostics.exposes() {
        let debug = diagnostics::debug_info(&state.env, timestamp);
        Json(ConfigResponse::from_env(&state.env).with_debug(debug)).into_response()
    } else {
        state.config.clone().into_response()
    };
    if let Ok(value) = header {
        response.headers_mut().insert(X_DEBUG_TIMESTAMP, value);
    }
    response
}
