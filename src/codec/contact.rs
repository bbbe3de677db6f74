//! Hybrid column/extension codec for contacts.
//!
//! Encode maps the queryable subset of a [`ContactRecord`] onto core columns
//! and serializes every other attribute into the extension payload. Decode
//! reads the payload first and then overwrites the core fields from the
//! columns, so a stale copy inside the payload never wins.

use crate::{
    contact::ContactRecord,
    convert::require_id,
    dialect::Dialect,
    error::CodecResult,
    mapper::{Mapper, MapperBuilder},
    storage::ContactRow,
};

/// Attribute names of the core columns, as they appear on the wire.
pub mod field {
    /// Row id.
    pub const ID: &str = "Id";
    /// Owning logbook.
    pub const LOGBOOK_ID: &str = "LogbookId";
    /// Operating session.
    pub const SESSION_ID: &str = "SessionId";
    /// Band.
    pub const BAND: &str = "Band";
    /// Mode.
    pub const MODE: &str = "Mode";
    /// Frequency.
    pub const FREQ: &str = "Freq";
    /// Start date.
    pub const QSO_DATE: &str = "QsoDate";
    /// Start time.
    pub const TIME_ON: &str = "TimeOn";
    /// End time.
    pub const TIME_OFF: &str = "TimeOff";
    /// Report sent.
    pub const RST_SENT: &str = "RstSent";
    /// Report received.
    pub const RST_RCVD: &str = "RstRcvd";
    /// Contacted callsign.
    pub const CALL: &str = "Call";
    /// Contacted country.
    pub const COUNTRY: &str = "Country";
    /// Extension payload column.
    pub const EXTENSION: &str = "Extension";
}

const ENCODE_OP: &str = "encode contact";
const DECODE_OP: &str = "decode contact";

/// Encoder and decoder for one backend, built once and shared.
#[derive(Debug)]
pub struct ContactCodec<D: Dialect> {
    encoder: Mapper<ContactRecord, ContactRow<D>>,
    decoder: Mapper<ContactRow<D>, ContactRecord>,
}

impl<D: Dialect> ContactCodec<D> {
    /// Builds both mapping tables with the dialect's converters.
    pub fn new() -> CodecResult<Self> {
        Ok(Self {
            encoder: encoder::<D>()?,
            decoder: decoder::<D>()?,
        })
    }

    /// Domain record to a fresh storage row. Bookkeeping columns stay unset.
    pub fn encode(&self, contact: &ContactRecord) -> CodecResult<ContactRow<D>> {
        tracing::trace!(backend = %D::BACKEND, call = %contact.contacted.call, "encoding contact");
        self.encoder.make(contact)
    }

    /// Re-encodes onto an existing row, keeping its bookkeeping columns.
    pub fn encode_into(&self, contact: &ContactRecord, row: &mut ContactRow<D>) -> CodecResult<()> {
        self.encoder.adapt(contact, row)
    }

    /// Storage row to a domain record.
    pub fn decode(&self, row: &ContactRow<D>) -> CodecResult<ContactRecord> {
        tracing::trace!(backend = %D::BACKEND, id = ?row.id, "decoding contact");
        self.decoder.make(row)
    }

    /// Decodes onto `contact`, replacing it entirely. Left unchanged on error.
    pub fn decode_into(&self, row: &ContactRow<D>, contact: &mut ContactRecord) -> CodecResult<()> {
        self.decoder.adapt(row, contact)
    }

    /// Attribute names promoted to core columns.
    pub fn core_fields(&self) -> Vec<&'static str> {
        self.encoder.field_names()
    }

    /// Table used by [`Self::encode`].
    pub fn encoder(&self) -> &Mapper<ContactRecord, ContactRow<D>> {
        &self.encoder
    }

    /// Table used by [`Self::decode`].
    pub fn decoder(&self) -> &Mapper<ContactRow<D>, ContactRecord> {
        &self.decoder
    }
}

fn encoder<D: Dialect>() -> CodecResult<Mapper<ContactRecord, ContactRow<D>>> {
    let mut builder = MapperBuilder::<ContactRecord, ContactRow<D>>::new(ENCODE_OP)
        .copy(field::ID, |c| &c.id, |r| &mut r.id)
        .convert(field::LOGBOOK_ID, |c| &c.logbook_id, |r| &mut r.logbook_id, require_id)
        .copy(field::SESSION_ID, |c| &c.session_id, |r| &mut r.session_id)
        .copy(field::BAND, |c| &c.qso.band, |r| &mut r.band)
        .copy(field::MODE, |c| &c.qso.mode, |r| &mut r.mode)
        .convert(field::FREQ, |c| &c.qso.freq, |r| &mut r.freq, D::encode_frequency)
        .copy(field::QSO_DATE, |c| &c.qso.qso_date, |r| &mut r.qso_date)
        .copy(field::TIME_ON, |c| &c.qso.time_on, |r| &mut r.time_on)
        .copy(field::TIME_OFF, |c| &c.qso.time_off, |r| &mut r.time_off)
        .copy(field::RST_SENT, |c| &c.qso.rst_sent, |r| &mut r.rst_sent)
        .copy(field::RST_RCVD, |c| &c.qso.rst_rcvd, |r| &mut r.rst_rcvd)
        .copy(field::CALL, |c| &c.contacted.call, |r| &mut r.call)
        .copy(field::COUNTRY, |c| &c.contacted.country, |r| &mut r.country)
        .extension_into(field::EXTENSION, |r| &mut r.extension);

    builder
        .register_converter(field::QSO_DATE, |c| &c.qso.qso_date, |r| &mut r.qso_date, D::encode_date)?
        .register_converter(field::TIME_ON, |c| &c.qso.time_on, |r| &mut r.time_on, D::encode_time)?
        .register_converter(field::TIME_OFF, |c| &c.qso.time_off, |r| &mut r.time_off, D::encode_time)?;

    builder.build()
}

fn decoder<D: Dialect>() -> CodecResult<Mapper<ContactRow<D>, ContactRecord>> {
    let mut builder = MapperBuilder::<ContactRow<D>, ContactRecord>::new(DECODE_OP)
        .extension_from(field::EXTENSION, |r| &r.extension)
        .copy(field::ID, |r| &r.id, |c| &mut c.id)
        .copy(field::LOGBOOK_ID, |r| &r.logbook_id, |c| &mut c.logbook_id)
        .copy(field::SESSION_ID, |r| &r.session_id, |c| &mut c.session_id)
        .copy(field::BAND, |r| &r.band, |c| &mut c.qso.band)
        .copy(field::MODE, |r| &r.mode, |c| &mut c.qso.mode)
        .convert(field::FREQ, |r| &r.freq, |c| &mut c.qso.freq, D::decode_frequency)
        .copy(field::QSO_DATE, |r| &r.qso_date, |c| &mut c.qso.qso_date)
        .copy(field::TIME_ON, |r| &r.time_on, |c| &mut c.qso.time_on)
        .copy(field::TIME_OFF, |r| &r.time_off, |c| &mut c.qso.time_off)
        .copy(field::RST_SENT, |r| &r.rst_sent, |c| &mut c.qso.rst_sent)
        .copy(field::RST_RCVD, |r| &r.rst_rcvd, |c| &mut c.qso.rst_rcvd)
        .copy(field::CALL, |r| &r.call, |c| &mut c.contacted.call)
        .copy(field::COUNTRY, |r| &r.country, |c| &mut c.contacted.country);

    builder
        .register_converter(field::QSO_DATE, |r| &r.qso_date, |c| &mut c.qso.qso_date, D::decode_date)?
        .register_converter(field::TIME_ON, |r| &r.time_on, |c| &mut c.qso.time_on, D::decode_time)?
        .register_converter(field::TIME_OFF, |r| &r.time_off, |c| &mut c.qso.time_off, D::decode_time)?;

    builder.build()
}
