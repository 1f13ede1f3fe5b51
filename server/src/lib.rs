pub mod api;
pub mod diagnostics;
pub mod env;
pub mod models;
pub mod settings;
pub mod vars;
