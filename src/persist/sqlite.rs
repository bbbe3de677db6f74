//! SQLite-backed contact store.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    codec::{CodecRegistry, DialectCodecs},
    contact::ContactRecord,
    dialect::{Dialect, Sqlite},
    entity::Logbook,
    error::CodecError,
    storage::{ContactRow, LogbookRow},
    types::{ContactId, LogbookId},
};

use super::{ContactStore, PersistResult};

const CONTACT_COLUMNS: &str = "id, logbook_id, session_id, band, mode, freq, qso_date, time_on, \
     time_off, rst_sent, rst_rcvd, call, country, extension, created_at, updated_at";

const LOGBOOK_COLUMNS: &str = "id, user_id, name, callsign, description, api_key, created_at";

/// SQLite implementation of [`crate::persist::ContactStore`].
pub struct SqliteContactStore {
    conn: Connection,
    codecs: Arc<CodecRegistry>,
}

impl SqliteContactStore {
    /// Opens or creates a database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>, codecs: Arc<CodecRegistry>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn, codecs)
    }

    /// Opens an in-memory database.
    pub fn open_in_memory(codecs: Arc<CodecRegistry>) -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn, codecs)
    }

    fn init_connection(conn: Connection, codecs: Arc<CodecRegistry>) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        codecs.sqlite()?;
        tracing::debug!("sqlite contact store ready");
        Ok(Self { conn, codecs })
    }

    /// Raw stored row, for callers that need the columns themselves.
    pub fn contact_row(&self, id: ContactId) -> PersistResult<Option<ContactRow<Sqlite>>> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");
        let row = self
            .conn
            .query_row(&sql, params![id], read_contact_row)
            .optional()?;
        Ok(row)
    }

    /// Stores `row` verbatim, bypassing the codec. Returns the new id.
    pub fn insert_contact_row(&mut self, row: &ContactRow<Sqlite>) -> PersistResult<ContactId> {
        self.conn.execute(
            "INSERT INTO contacts(logbook_id, session_id, band, mode, freq, qso_date, time_on, \
             time_off, rst_sent, rst_rcvd, call, country, extension, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                row.logbook_id,
                row.session_id,
                row.band,
                row.mode,
                row.freq,
                row.qso_date,
                row.time_on,
                row.time_off,
                row.rst_sent,
                row.rst_rcvd,
                row.call,
                row.country,
                row.extension,
                row.created_at,
                row.updated_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, call = %row.call, "contact row inserted");
        Ok(id)
    }

    fn codecs(&self) -> PersistResult<&DialectCodecs<Sqlite>> {
        Ok(self.codecs.sqlite()?)
    }
}

impl ContactStore for SqliteContactStore {
    fn insert_contact(&mut self, contact: &ContactRecord) -> PersistResult<ContactId> {
        let mut row = self.codecs()?.contacts.encode(contact)?;
        let now = now_text("insert contact")?;
        row.created_at = now.clone();
        row.updated_at = now;
        self.insert_contact_row(&row)
    }

    fn get_contact(&self, id: ContactId) -> PersistResult<Option<ContactRecord>> {
        let Some(row) = self.contact_row(id)? else {
            return Ok(None);
        };
        Ok(Some(self.codecs()?.contacts.decode(&row)?))
    }

    fn contacts_by_call(&self, call: &str) -> PersistResult<Vec<ContactRecord>> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE call = ?1 ORDER BY id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![call], read_contact_row)?;

        let codec = &self.codecs()?.contacts;
        let mut out = Vec::new();
        for row in rows {
            out.push(codec.decode(&row?)?);
        }
        Ok(out)
    }

    fn insert_logbook(&mut self, logbook: &Logbook) -> PersistResult<LogbookId> {
        let mut row = self.codecs()?.logbooks.encode(logbook)?;
        if row.created_at.is_none() {
            row.created_at = now_text("insert logbook")?;
        }
        self.conn.execute(
            "INSERT INTO logbooks(user_id, name, callsign, description, api_key, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.user_id,
                row.name,
                row.callsign,
                row.description,
                row.api_key,
                row.created_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %row.name, "logbook inserted");
        Ok(id)
    }

    fn get_logbook(&self, id: LogbookId) -> PersistResult<Option<Logbook>> {
        let sql = format!("SELECT {LOGBOOK_COLUMNS} FROM logbooks WHERE id = ?1");
        let row = self
            .conn
            .query_row(&sql, params![id], read_logbook_row)
            .optional()?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(self.codecs()?.logbooks.decode(&row)?))
    }
}

fn read_contact_row(row: &Row<'_>) -> rusqlite::Result<ContactRow<Sqlite>> {
    Ok(ContactRow {
        id: row.get(0)?,
        logbook_id: row.get(1)?,
        session_id: row.get(2)?,
        band: row.get(3)?,
        mode: row.get(4)?,
        freq: row.get(5)?,
        qso_date: row.get(6)?,
        time_on: row.get(7)?,
        time_off: row.get(8)?,
        rst_sent: row.get(9)?,
        rst_rcvd: row.get(10)?,
        call: row.get(11)?,
        country: row.get(12)?,
        extension: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

fn read_logbook_row(row: &Row<'_>) -> rusqlite::Result<LogbookRow<Sqlite>> {
    Ok(LogbookRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        callsign: row.get(3)?,
        description: row.get(4)?,
        api_key: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn now_text(op: &'static str) -> PersistResult<Option<String>> {
    let now = Sqlite::encode_timestamp(&Some(Utc::now())).map_err(|source| CodecError::Validation {
        op,
        field: "CreatedAt",
        source,
    })?;
    Ok(now)
}
