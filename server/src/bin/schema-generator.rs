//! # Response schema generator
//!
//! This binary prints the JSON Schema of the config endpoint's response body to the standard
//! output stream.

use std::process::ExitCode;

use config_server::models::ConfigResponse;

fn main() -> ExitCode {
    let schema = schemars::schema_for!(ConfigResponse);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
