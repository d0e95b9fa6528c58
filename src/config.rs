//! Credential and environment configuration
//!
//! Credentials are opaque strings obtained externally; this module only
//! fetches them from the process environment and optionally seeds the
//! environment from a `KEY=VALUE` file first.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Environment variable carrying the pre-encoded array Basic credential
pub const ARRAY_CREDS_VAR: &str = "CREDS";

/// Environment variable carrying the object-store bearer token
pub const STORAGE_TOKEN_VAR: &str = "STORAGE_TOKEN";

/// Read the array credential from the environment
pub fn array_credentials() -> Result<String> {
    std::env::var(ARRAY_CREDS_VAR)
        .map_err(|_| Error::Config(format!("missing environment variable '{ARRAY_CREDS_VAR}'")))
}

/// Read the object-store bearer token from the environment
pub fn storage_token() -> Result<String> {
    std::env::var(STORAGE_TOKEN_VAR)
        .map_err(|_| Error::Config(format!("missing environment variable '{STORAGE_TOKEN_VAR}'")))
}

/// Load `KEY=VALUE` lines from a file into the process environment.
/// Quotes and surrounding whitespace are stripped; lines without `=` are
/// ignored.
pub fn load_env_file(path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    for line in contents.lines() {
        let line = line.trim();
        if let Some((key, value)) = line.split_once('=') {
            let key = clean_value(key);
            let value = clean_value(value);
            if !key.is_empty() {
                std::env::set_var(key, value);
            }
        }
    }
    Ok(())
}

/// Strip whitespace and one layer of single or double quotes
fn clean_value(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(s);
    s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')).unwrap_or(s)
}
