//! # Request diagnostics
//!
//! Builds the per-request diagnostic report: which variables the server can see, whether the
//! target keys exist under various spellings, what platform it runs on and who is asking. Secret
//! values only ever appear as a [`SecretPreview`].

use axum::http::{
    HeaderMap, HeaderName,
    header::{HOST, ORIGIN, REFERER, USER_AGENT},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::{
    env::EnvSnapshot,
    models::{CaseSensitivity, DebugInfo, EnvVarsFound, KeyPresence, SystemInfo},
    vars::{self, platform, variants},
};

/// Maximum number of secret characters in a preview
pub const PREVIEW_CHARS: usize = 20;

/// Maximum number of `User-Agent` characters logged
pub const USER_AGENT_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Formats `time` as ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the longest prefix of `s` holding at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// # Log-safe description of a secret
///
/// The preview holds at most [`PREVIEW_CHARS`] leading characters and never more than half of the
/// secret, followed by an ellipsis, so it is never equal to the secret itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretPreview {
    pub exists: bool,
    /// Length in characters
    pub length: usize,
    pub preview: Option<String>,
}

impl SecretPreview {
    pub fn of(secret: Option<&str>) -> Self {
        match secret.filter(|s| !s.is_empty()) {
            Some(secret) => {
                let length = secret.chars().count();
                let shown = truncate_chars(secret, PREVIEW_CHARS.min(length / 2));
                Self {
                    exists: true,
                    length,
                    preview: Some(format!("{shown}{ELLIPSIS}")),
                }
            }
            None => Self {
                exists: false,
                length: 0,
                preview: None,
            },
        }
    }
}

/// # Request header summary
///
/// The handful of request headers worth logging. Missing headers and values that are not visible
/// ASCII are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    pub host: Option<String>,
    pub origin: Option<String>,
    pub referer: Option<String>,
    /// First [`USER_AGENT_CHARS`] characters of the `User-Agent` header
    pub user_agent: Option<String>,
}

impl RequestSummary {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        Self {
            host: get(HOST),
            origin: get(ORIGIN),
            referer: get(REFERER),
            user_agent: get(USER_AGENT)
                .map(|ua| truncate_chars(&ua, USER_AGENT_CHARS).to_owned()),
        }
    }
}

/// Names of variables containing the vendor substring in any casing, in sorted order.
pub fn vendor_keys(env: &EnvSnapshot) -> Vec<String> {
    env.keys()
        .filter(|key| key.to_ascii_lowercase().contains(vars::VENDOR_SUBSTRING))
        .map(str::to_owned)
        .collect()
}

/// Checks which spellings of the target keys are set.
pub fn case_sensitivity(env: &EnvSnapshot) -> CaseSensitivity {
    CaseSensitivity {
        uppercase: KeyPresence {
            url: env.is_set(vars::ENDPOINT_URL),
            key: env.is_set(vars::API_KEY),
        },
        lowercase: KeyPresence {
            url: env.is_set(variants::ENDPOINT_URL_LOWER),
            key: env.is_set(variants::API_KEY_LOWER),
        },
        mixed: KeyPresence {
            url: env.is_set(variants::ENDPOINT_URL_MIXED),
            key: env.is_set(variants::API_KEY_MIXED),
        },
    }
}

/// Builds the `debug` object attached to exposed config responses.
pub fn debug_info(env: &EnvSnapshot, timestamp: String) -> DebugInfo {
    let owned = |key| env.get(key).map(str::to_owned);
    DebugInfo {
        timestamp,
        node_env: owned(platform::NODE_ENV),
        vercel_env: owned(platform::VERCEL_ENV),
        vercel_url: owned(platform::VERCEL_URL),
        env_vars_found: EnvVarsFound {
            total: env.len(),
            supabase_related: vendor_keys(env),
            has_exact_url: env.is_set(vars::ENDPOINT_URL),
            has_exact_key: env.is_set(vars::API_KEY),
        },
        case_sensitivity: case_sensitivity(env),
        system: SystemInfo {
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
        },
    }
}

/// Logs the full diagnostic report for one request.
pub fn log_report(env: &EnvSnapshot, request: &RequestSummary, timestamp: &str) {
    let all_keys: Vec<&str> = env.keys().collect();
    info!(timestamp, total = all_keys.len(), keys = ?all_keys, "environment variables");
    info!(timestamp, keys = ?vendor_keys(env), "vendor-related variables");
    info!(
        timestamp,
        var = vars::ENDPOINT_URL,
        preview = ?SecretPreview::of(env.get(vars::ENDPOINT_URL)),
        "endpoint URL"
    );
    info!(
        timestamp,
        var = vars::API_KEY,
        preview = ?SecretPreview::of(env.get(vars::API_KEY)),
        "API key"
    );
    let case = case_sensitivity(env);
    info!(
        timestamp,
        SUPABASE_URL = case.uppercase.url,
        supabase_url = case.lowercase.url,
        SupabaseUrl = case.mixed.url,
        SUPABASE_ANON_KEY = case.uppercase.key,
        supabase_anon_key = case.lowercase.key,
        SupabaseAnonKey = case.mixed.key,
        "case variations"
    );
    info!(
        timestamp,
        VERCEL = env.get(platform::VERCEL),
        VERCEL_ENV = env.get(platform::VERCEL_ENV),
        VERCEL_URL = env.get(platform::VERCEL_URL),
        VERCEL_REGION = env.get(platform::VERCEL_REGION),
        NODE_ENV = env.get(platform::NODE_ENV),
        "platform environment"
    );
    info!(
        timestamp,
        aws_region = env.get(platform::AWS_REGION),
        lambda_task_root = env.get(platform::LAMBDA_TASK_ROOT),
        runtime = env.get(platform::AWS_EXECUTION_ENV),
        "function environment"
    );
    info!(
        timestamp,
        host = request.host.as_deref(),
        origin = request.origin.as_deref(),
        referer = request.referer.as_deref(),
        user_agent = request.user_agent.as_deref(),
        "request headers"
    );
}
