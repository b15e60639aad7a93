//! Startup configuration, read once from the environment.
//!
//! | Variable                    | Default        |
//! |-----------------------------|----------------|
//! | `MARKETING_FORM_HOST`       | `127.0.0.1`    |
//! | `MARKETING_FORM_PORT`       | `8080`         |
//! | `MARKETING_FORM_STORE`      | `requests.csv` |
//! | `MARKETING_FORM_JSON_LIMIT` | `65536`        |
//!
//! Values that fail to parse fall back to the default.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE: &str = "requests.csv";
const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// CSV file every accepted request is appended to.
    pub store_path: PathBuf,
    /// Maximum accepted JSON body size, in bytes.
    pub json_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Config {
            host: non_empty("MARKETING_FORM_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: non_empty("MARKETING_FORM_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            store_path: non_empty("MARKETING_FORM_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE)),
            json_limit: non_empty("MARKETING_FORM_JSON_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_JSON_LIMIT),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
