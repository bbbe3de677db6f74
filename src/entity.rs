//! Logbook and user domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LogbookId, UserId};

/// A named log owned by a user, optionally reachable by API key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Logbook {
    /// Row identifier, `None` until persisted.
    pub id: Option<LogbookId>,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Default station callsign for contacts in this logbook.
    pub callsign: String,
    /// Free text; empty when unset.
    pub description: String,
    /// Upload API key; empty when none has been issued.
    pub api_key: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// An account holder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Row identifier, `None` until persisted.
    pub id: Option<UserId>,
    /// Account callsign.
    pub callsign: String,
    /// Hash of the one-time bootstrap credential; empty once consumed.
    pub bootstrap_hash: String,
    /// Bootstrap credential expiry.
    pub bootstrap_expires_at: Option<DateTime<Utc>>,
    /// Whether the account may log in.
    pub active: bool,
}

impl User {
    /// True while a bootstrap credential is outstanding and unexpired at `now`.
    pub fn bootstrap_pending(&self, now: DateTime<Utc>) -> bool {
        !self.bootstrap_hash.is_empty() && self.bootstrap_expires_at.is_some_and(|exp| exp > now)
    }
}
