//! Engine configuration

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const CATALOG_PATH_VAR: &str = "GREETBLDR_CATALOG_PATH";
pub const SEED_VAR: &str = "GREETBLDR_SEED";
pub const COUNT_VAR: &str = "GREETBLDR_COUNT";

/// Upper bound on `GREETBLDR_COUNT`
pub const MAX_COUNT: usize = 10_000;

/// Dotenv files read from the repo root, highest priority first.
const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Engine configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON catalog file; `None` uses the built-in greetings
    pub catalog_path: Option<PathBuf>,
    /// Seed for reproducible output; `None` uses the thread-local RNG
    pub seed: Option<u64>,
    /// How many greetings the binary prints
    pub count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            count: 1,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let catalog_path = get(CATALOG_PATH_VAR).map(PathBuf::from);

        let seed = get(SEED_VAR)
            .map(|value| {
                value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: SEED_VAR,
                    value,
                    reason: "expected an unsigned 64-bit integer",
                })
            })
            .transpose()?;

        let count = match get(COUNT_VAR) {
            Some(value) => match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: COUNT_VAR,
                        value,
                        reason: "must be at least 1",
                    })
                }
                Ok(n) if n > MAX_COUNT => {
                    return Err(ConfigError::InvalidValue {
                        key: COUNT_VAR,
                        value,
                        reason: "must not exceed 10000",
                    })
                }
                Ok(n) => n,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: COUNT_VAR,
                        value,
                        reason: "expected a positive integer",
                    })
                }
            },
            None => 1,
        };

        Ok(Self {
            catalog_path,
            seed,
            count,
        })
    }
}

/// Load dotenv files from `dir` into the process environment.
///
/// Missing files are skipped. Files that exist but fail to load are returned
/// so the caller can report them once logging is up.
pub fn load_dotenv_files(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    let mut failures = Vec::new();
    // Prefer local overrides.
    for filename in DOTENV_FILES {
        let path = dir.join(filename);
        if !path.exists() {
            continue;
        }
        if let Err(err) = dotenvy::from_path(&path) {
            failures.push((path, err));
        }
    }
    failures
}
