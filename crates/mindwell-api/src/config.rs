use std::env;

use eyre::WrapErr;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_NAME: &str = "DATABASE_NAME";
pub const PORT: &str = "PORT";
/// Set by the Lambda runtime; its presence selects the Lambda entry point.
pub const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

pub const DEFAULT_PORT: u16 = 8000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Endpoint of the document store. Unset means the provider default.
    pub database_url: Option<String>,
    /// Bucket holding the collections. Unset means no store at all.
    pub database_name: Option<String>,
    pub port: u16,
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var(PORT) {
            Some(raw) => raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("invalid {PORT} value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: var(DATABASE_URL),
            database_name: var(DATABASE_NAME),
            port,
            lambda: var(LAMBDA_RUNTIME_API).is_some(),
        })
    }
}
