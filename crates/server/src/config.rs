use dela_core::UserId;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_USER_ID: i64 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Owner of every task and project the page shows.
    pub user_id: UserId,
    pub request_timeout: Duration,
    pub upload_limit: usize,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            uploads_dir: PathBuf::from("uploads"),
            templates_dir: PathBuf::from("templates"),
            public_dir: PathBuf::from("public"),
            user_id: UserId(DEFAULT_USER_ID),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
            port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_dir: var("DELA_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            uploads_dir: var("DELA_UPLOADS_DIR").map_or(defaults.uploads_dir, PathBuf::from),
            templates_dir: var("DELA_TEMPLATES_DIR").map_or(defaults.templates_dir, PathBuf::from),
            public_dir: var("DELA_PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from),
            user_id: UserId(parse_or("DELA_USER_ID", var("DELA_USER_ID"), DEFAULT_USER_ID)),
            request_timeout: Duration::from_secs(parse_or(
                "DELA_REQUEST_TIMEOUT_SECS",
                var("DELA_REQUEST_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )),
            upload_limit: parse_or(
                "DELA_UPLOAD_LIMIT_BYTES",
                var("DELA_UPLOAD_LIMIT_BYTES"),
                DEFAULT_UPLOAD_LIMIT,
            ),
            port: parse_or("PORT", var("PORT"), defaults.port),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not valid, using {default}");
            default
        }
    }
}
