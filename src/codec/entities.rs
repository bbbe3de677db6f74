//! Column-only codecs for logbooks and users.
//!
//! These entities are narrow, so every attribute has its own column and no
//! extension payload is involved. The interesting part is the optional
//! scalars: empty text, `false` and missing timestamps go through the
//! dialect's nullable converters.

use crate::{
    convert::require_id,
    dialect::Dialect,
    entity::{Logbook, User},
    error::CodecResult,
    mapper::{Mapper, MapperBuilder},
    storage::{LogbookRow, UserRow},
};

/// Logbook encoder and decoder for one backend.
#[derive(Debug)]
pub struct LogbookCodec<D: Dialect> {
    encoder: Mapper<Logbook, LogbookRow<D>>,
    decoder: Mapper<LogbookRow<D>, Logbook>,
}

impl<D: Dialect> LogbookCodec<D> {
    /// Builds both tables.
    pub fn new() -> CodecResult<Self> {
        let encoder = MapperBuilder::<Logbook, LogbookRow<D>>::new("encode logbook")
            .copy("Id", |l| &l.id, |r| &mut r.id)
            .convert("UserId", |l| &l.user_id, |r| &mut r.user_id, require_id)
            .copy("Name", |l| &l.name, |r| &mut r.name)
            .copy("Callsign", |l| &l.callsign, |r| &mut r.callsign)
            .convert("Description", |l| &l.description, |r| &mut r.description, D::encode_text)
            .convert("ApiKey", |l| &l.api_key, |r| &mut r.api_key, D::encode_text)
            .convert("CreatedAt", |l| &l.created_at, |r| &mut r.created_at, D::encode_timestamp)
            .build()?;

        let decoder = MapperBuilder::<LogbookRow<D>, Logbook>::new("decode logbook")
            .copy("Id", |r| &r.id, |l| &mut l.id)
            .copy("UserId", |r| &r.user_id, |l| &mut l.user_id)
            .copy("Name", |r| &r.name, |l| &mut l.name)
            .copy("Callsign", |r| &r.callsign, |l| &mut l.callsign)
            .convert("Description", |r| &r.description, |l| &mut l.description, D::decode_text)
            .convert("ApiKey", |r| &r.api_key, |l| &mut l.api_key, D::decode_text)
            .convert("CreatedAt", |r| &r.created_at, |l| &mut l.created_at, D::decode_timestamp)
            .build()?;

        Ok(Self { encoder, decoder })
    }

    /// Domain logbook to a storage row.
    pub fn encode(&self, logbook: &Logbook) -> CodecResult<LogbookRow<D>> {
        self.encoder.make(logbook)
    }

    /// Storage row to a domain logbook.
    pub fn decode(&self, row: &LogbookRow<D>) -> CodecResult<Logbook> {
        self.decoder.make(row)
    }
}

/// User encoder and decoder for one backend.
#[derive(Debug)]
pub struct UserCodec<D: Dialect> {
    encoder: Mapper<User, UserRow<D>>,
    decoder: Mapper<UserRow<D>, User>,
}

impl<D: Dialect> UserCodec<D> {
    /// Builds both tables.
    pub fn new() -> CodecResult<Self> {
        let encoder = MapperBuilder::<User, UserRow<D>>::new("encode user")
            .copy("Id", |u| &u.id, |r| &mut r.id)
            .copy("Callsign", |u| &u.callsign, |r| &mut r.callsign)
            .convert("BootstrapHash", |u| &u.bootstrap_hash, |r| &mut r.bootstrap_hash, D::encode_text)
            .convert(
                "BootstrapExpiresAt",
                |u| &u.bootstrap_expires_at,
                |r| &mut r.bootstrap_expires_at,
                D::encode_timestamp,
            )
            .convert("Active", |u| &u.active, |r| &mut r.active, D::encode_flag)
            .build()?;

        let decoder = MapperBuilder::<UserRow<D>, User>::new("decode user")
            .copy("Id", |r| &r.id, |u| &mut u.id)
            .copy("Callsign", |r| &r.callsign, |u| &mut u.callsign)
            .convert("BootstrapHash", |r| &r.bootstrap_hash, |u| &mut u.bootstrap_hash, D::decode_text)
            .convert(
                "BootstrapExpiresAt",
                |r| &r.bootstrap_expires_at,
                |u| &mut u.bootstrap_expires_at,
                D::decode_timestamp,
            )
            .convert("Active", |r| &r.active, |u| &mut u.active, D::decode_flag)
            .build()?;

        Ok(Self { encoder, decoder })
    }

    /// Domain user to a storage row.
    pub fn encode(&self, user: &User) -> CodecResult<UserRow<D>> {
        self.encoder.make(user)
    }

    /// Storage row to a domain user.
    pub fn decode(&self, row: &UserRow<D>) -> CodecResult<User> {
        self.decoder.make(row)
    }
}
