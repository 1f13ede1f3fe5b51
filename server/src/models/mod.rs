mod config;
mod diagnostics;

pub use config::ConfigResponse;
pub use diagnostics::{CaseSensitivity, DebugInfo, EnvVarsFound, KeyPresence, SystemInfo};
