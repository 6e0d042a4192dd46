//! Runtime configuration for the backend.
//!
//! Everything has a local-development default and can be overridden through
//! environment variables, so the same binary serves both the dev loop and a
//! deployed instance.

/// SQLite database file used when `SITEGEN_DB` is not set.
pub const DEFAULT_DB_FILE: &str = "sitegen.sqlite";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Path of the SQLite database file.
pub fn database_path() -> String {
    std::env::var("SITEGEN_DB").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string())
}

/// Host and port the HTTP server binds to.
pub fn bind_address() -> (String, u16) {
    let host = std::env::var("SITEGEN_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = std::env::var("SITEGEN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    (host, port)
}
