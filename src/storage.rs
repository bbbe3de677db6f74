//! Storage-shaped records, generic over the backend dialect.
//!
//! These mirror table columns one to one. The persistence façade binds them
//! to statements; the codecs in [`crate::codec`] produce and consume them.

use crate::{
    dialect::{Dialect, Postgres, Sqlite},
    types::{ContactId, LogbookId, SessionId, UserId},
};

/// Canonical text of an empty extension payload.
pub const EMPTY_EXTENSION: &str = "{}";

/// Narrow contact row: queryable core columns plus one extension payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactRow<D: Dialect> {
    /// Primary key, `None` before insert.
    pub id: Option<ContactId>,
    /// Owning logbook.
    pub logbook_id: LogbookId,
    /// Operating session.
    pub session_id: Option<SessionId>,
    /// Band designator.
    pub band: String,
    /// Mode.
    pub mode: String,
    /// Frequency in the dialect's native form.
    pub freq: D::Frequency,
    /// `YYYYMMDD`.
    pub qso_date: String,
    /// `HHMM` or `HHMMSS`.
    pub time_on: String,
    /// `HHMM` or `HHMMSS`.
    pub time_off: String,
    /// Signal report sent.
    pub rst_sent: String,
    /// Signal report received.
    pub rst_rcvd: String,
    /// Contacted callsign.
    pub call: String,
    /// Contacted DXCC entity name.
    pub country: String,
    /// Serialized non-core attributes.
    pub extension: String,
    /// Insert time, maintained by the façade.
    pub created_at: D::Timestamp,
    /// Last update time, maintained by the façade.
    pub updated_at: D::Timestamp,
}

/// Logbook row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogbookRow<D: Dialect> {
    /// Primary key, `None` before insert.
    pub id: Option<LogbookId>,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Default station callsign.
    pub callsign: String,
    /// Nullable description.
    pub description: Option<String>,
    /// Nullable API key.
    pub api_key: Option<String>,
    /// Nullable creation time.
    pub created_at: D::Timestamp,
}

/// User row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserRow<D: Dialect> {
    /// Primary key, `None` before insert.
    pub id: Option<UserId>,
    /// Account callsign.
    pub callsign: String,
    /// Nullable bootstrap credential hash.
    pub bootstrap_hash: Option<String>,
    /// Nullable bootstrap expiry.
    pub bootstrap_expires_at: D::Timestamp,
    /// Nullable active flag.
    pub active: D::Flag,
}

/// Contact row for the SQLite backend.
pub type SqliteContactRow = ContactRow<Sqlite>;
/// Contact row for the PostgreSQL backend.
pub type PostgresContactRow = ContactRow<Postgres>;
