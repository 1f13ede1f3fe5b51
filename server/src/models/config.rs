use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{env::EnvSnapshot, models::DebugInfo, vars};

/// # Client configuration
///
/// Backend connection settings handed to browser clients. Both keys are always present in the
/// serialized form; an unset or empty variable is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigResponse {
    /// Backend endpoint URL
    #[serde(rename = "SUPABASE_URL")]
    pub endpoint_url: Option<String>,

    /// Public API key for the backend
    #[serde(rename = "SUPABASE_ANON_KEY")]
    pub api_key: Option<String>,

    /// Diagnostic details, only attached when diagnostics are exposed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

impl ConfigResponse {
    /// Reads both values from `env`, copying them verbatim.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            endpoint_url: env.get_non_empty(vars::ENDPOINT_URL).map(str::to_owned),
            api_key: env.get_non_empty(vars::API_KEY).map(str::to_owned),
            debug: None,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: DebugInfo) -> Self {
        self.debug = Some(debug);
        self
    }
}
