//! Shared primitive IDs and the backend identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Contact (QSO) row identifier.
pub type ContactId = i64;
/// Logbook identifier.
pub type LogbookId = i64;
/// Operating session identifier.
pub type SessionId = i64;
/// User identifier.
pub type UserId = i64;

/// Relational backend a codec set is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Embedded, dynamically typed SQL engine.
    #[default]
    Sqlite,
    /// Server SQL engine with native numeric and timestamp types.
    Postgres,
}

impl Backend {
    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            other => Err(CodecError::UnsupportedBackend(other.to_string())),
        }
    }
}
