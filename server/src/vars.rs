//! # Environment variable names
//!
//! Every variable the server reads is named here.

/// Backend endpoint URL delivered to clients
pub const ENDPOINT_URL: &str = "SUPABASE_URL";
/// Public API key delivered to clients
pub const API_KEY: &str = "SUPABASE_ANON_KEY";

pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const DIAGNOSTICS: &str = "CONFIG_DIAGNOSTICS";

/// Alternate spellings of the target keys, checked only by diagnostics.
pub mod variants {
    pub const ENDPOINT_URL_LOWER: &str = "supabase_url";
    pub const ENDPOINT_URL_MIXED: &str = "SupabaseUrl";
    pub const API_KEY_LOWER: &str = "supabase_anon_key";
    pub const API_KEY_MIXED: &str = "SupabaseAnonKey";
}

/// Descriptors set by hosting platforms.
pub mod platform {
    pub const NODE_ENV: &str = "NODE_ENV";
    pub const VERCEL: &str = "VERCEL";
    pub const VERCEL_ENV: &str = "VERCEL_ENV";
    pub const VERCEL_URL: &str = "VERCEL_URL";
    pub const VERCEL_REGION: &str = "VERCEL_REGION";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const LAMBDA_TASK_ROOT: &str = "LAMBDA_TASK_ROOT";
    pub const AWS_EXECUTION_ENV: &str = "AWS_EXECUTION_ENV";
}

/// Substring marking vendor-related variables, matched case-insensitively.
pub const VENDOR_SUBSTRING: &str = "supabase";
