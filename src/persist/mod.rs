//! Persistence façade contract and a reference SQLite implementation.
//!
//! The façade owns the database handle and SQL; it hands storage rows to the
//! codecs and writes back whatever they produce, columns and payload
//! verbatim.

/// SQLite façade.
pub mod sqlite;

use thiserror::Error;

use crate::{
    contact::ContactRecord,
    entity::Logbook,
    error::CodecError,
    types::{ContactId, LogbookId},
};

/// Façade failure.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Driver error.
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Encode or decode failed; nothing was written.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result alias for façade operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Operations a persistence façade exposes to the service layer.
pub trait ContactStore: Send {
    /// Encodes and inserts `contact`, returning its new id.
    fn insert_contact(&mut self, contact: &ContactRecord) -> PersistResult<ContactId>;
    /// Loads and decodes one contact.
    fn get_contact(&self, id: ContactId) -> PersistResult<Option<ContactRecord>>;
    /// Contacts with callsign `call` in insertion order.
    fn contacts_by_call(&self, call: &str) -> PersistResult<Vec<ContactRecord>>;
    /// Encodes and inserts `logbook`, returning its new id.
    fn insert_logbook(&mut self, logbook: &Logbook) -> PersistResult<LogbookId>;
    /// Loads and decodes one logbook.
    fn get_logbook(&self, id: LogbookId) -> PersistResult<Option<Logbook>>;
}
