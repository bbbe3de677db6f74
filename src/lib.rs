//! Storage codec for amateur-radio contact logs.
//!
//! A [`contact::ContactRecord`] is wide; its [`storage::ContactRow`] is
//! narrow. Encoding keeps the queried subset (band, mode, frequency, date,
//! times, reports, callsign, country, linkage) in native columns and
//! serializes everything else into one JSON extension column. Decoding reads
//! the payload and lets the columns override it.
//!
//! # Examples
//!
//! ```
//! use contactstore::{
//!     codec::CodecRegistry,
//!     contact::ContactRecord,
//! };
//!
//! let registry = CodecRegistry::new();
//! let codecs = registry.sqlite().expect("codecs");
//!
//! let mut contact = ContactRecord::new(1, "M1PG", "20m", "SSB");
//! contact.qso.freq = "14.320".to_string();
//! contact.qso.qso_date = "2025-11-08".to_string();
//! contact.qso.time_on = "11:40".to_string();
//! contact.station.my_antenna = Some("EFHW".to_string());
//!
//! let row = codecs.contacts.encode(&contact).expect("encode");
//! assert_eq!(row.freq, Some(14_320_000));
//! assert_eq!(row.qso_date, "20251108");
//! assert_eq!(row.time_on, "1140");
//! assert_eq!(row.extension, r#"{"MyAntenna":"EFHW"}"#);
//!
//! let back = codecs.contacts.decode(&row).expect("decode");
//! assert_eq!(back.contacted.call, "M1PG");
//! assert_eq!(back.station.my_antenna.as_deref(), Some("EFHW"));
//! ```
//!
//! Through the SQLite façade:
//! ```
//! use std::sync::Arc;
//!
//! use contactstore::{
//!     codec::CodecRegistry,
//!     contact::ContactRecord,
//!     entity::Logbook,
//!     persist::{ContactStore, sqlite::SqliteContactStore},
//! };
//!
//! let mut store = SqliteContactStore::open_in_memory(Arc::new(CodecRegistry::new())).expect("open");
//! let logbook_id = store
//!     .insert_logbook(&Logbook { user_id: 1, name: "Portable".into(), ..Logbook::default() })
//!     .expect("logbook");
//! let id = store
//!     .insert_contact(&ContactRecord::new(logbook_id, "K1ABC", "40m", "CW"))
//!     .expect("insert");
//! let loaded = store.get_contact(id).expect("get").expect("present");
//! assert_eq!(loaded.contacted.call, "K1ABC");
//! ```
#![deny(missing_docs)]

/// Hybrid column/extension codecs and the warm-up registry.
pub mod codec;
/// Backend selection.
pub mod config;
/// Contact domain record.
pub mod contact;
/// Scalar converter library.
pub mod convert;
/// Per-backend converter sets.
pub mod dialect;
/// Related domain entities.
pub mod entity;
/// Error taxonomy.
pub mod error;
/// Declarative field mapper.
pub mod mapper;
/// Persistence façade contract and SQLite implementation.
pub mod persist;
/// Backend-specific storage shapes.
pub mod storage;
/// Shared primitive types.
pub mod types;
