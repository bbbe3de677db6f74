//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::{error::CodecResult, types::Backend};

/// Environment variable naming the backend.
pub const BACKEND_ENV: &str = "CONTACTSTORE_BACKEND";

/// Selects which backend's converter set a service warms up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Backend to build codecs for.
    pub backend: Backend,
}

impl CodecConfig {
    /// Reads [`BACKEND_ENV`]; unset means the default backend.
    pub fn from_env() -> CodecResult<Self> {
        match std::env::var(BACKEND_ENV) {
            Ok(value) => Self::for_backend(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parses a backend identifier such as `"sqlite"` or `"postgres"`.
    pub fn for_backend(identifier: &str) -> CodecResult<Self> {
        Ok(Self {
            backend: identifier.parse()?,
        })
    }
}
