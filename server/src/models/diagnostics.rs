use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// # Diagnostic payload
///
/// Describes the environment the server sees. Contains variable names and presence flags, never
/// secret values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    /// ISO-8601 time at which the request was handled
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vercel_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vercel_url: Option<String>,
    pub env_vars_found: EnvVarsFound,
    pub case_sensitivity: CaseSensitivity,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvVarsFound {
    /// Number of environment variables visible to the server
    pub total: usize,
    /// Names of vendor-related variables, sorted
    pub supabase_related: Vec<String>,
    pub has_exact_url: bool,
    pub has_exact_key: bool,
}

/// Presence of the target keys under different spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaseSensitivity {
    pub uppercase: KeyPresence,
    pub lowercase: KeyPresence,
    pub mixed: KeyPresence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyPresence {
    pub url: bool,
    pub key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SystemInfo {
    pub platform: String,
    pub arch: String,
    /// Identifier of the serving runtime. The key name is kept for existing clients.
    #[serde(rename = "nodeVersion")]
    pub runtime_version: String,
}
