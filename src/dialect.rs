//! Backend dialects: one converter set per relational backend.
//!
//! A dialect fixes the native column types for the scalar kinds whose
//! representation differs between backends and names the converters that
//! move values across. Storage shapes are generic over a dialect, so the
//! column types of a `ContactRow<Sqlite>` and a `ContactRow<Postgres>` are
//! checked at compile time.

#![allow(clippy::ptr_arg)]

use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::{
    convert::{ConvertError, datetime, frequency, nullable},
    types::Backend,
};

/// Native column value bound shared by every dialect-specific column type.
pub trait Column: Debug + Clone + Default + PartialEq + Send + Sync + 'static {}

impl<T> Column for T where T: Debug + Clone + Default + PartialEq + Send + Sync + 'static {}

/// Converter set for one backend.
pub trait Dialect: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Backend identifier this converter set serves.
    const BACKEND: Backend;

    /// Native frequency column.
    type Frequency: Column;
    /// Native nullable boolean column.
    type Flag: Column;
    /// Native nullable timestamp column.
    type Timestamp: Column;

    /// Domain MHz text to the frequency column.
    fn encode_frequency(freq: &String) -> Result<Self::Frequency, ConvertError>;
    /// Frequency column to domain MHz text.
    fn decode_frequency(freq: &Self::Frequency) -> Result<String, ConvertError>;

    /// Domain date to storage date.
    fn encode_date(date: &String) -> Result<String, ConvertError> {
        datetime::encode_date(date)
    }
    /// Storage date to domain date.
    fn decode_date(date: &String) -> Result<String, ConvertError> {
        datetime::decode_date(date)
    }
    /// Domain time of day to storage time.
    fn encode_time(time: &String) -> Result<String, ConvertError> {
        datetime::encode_time(time)
    }
    /// Storage time to domain time of day.
    fn decode_time(time: &String) -> Result<String, ConvertError> {
        datetime::decode_time(time)
    }

    /// Domain text to a nullable text column.
    fn encode_text(value: &String) -> Result<Option<String>, ConvertError> {
        nullable::encode_string(value)
    }
    /// Nullable text column to domain text.
    fn decode_text(value: &Option<String>) -> Result<String, ConvertError> {
        nullable::decode_string(value)
    }

    /// Domain boolean to the flag column.
    fn encode_flag(value: &bool) -> Result<Self::Flag, ConvertError>;
    /// Flag column to domain boolean.
    fn decode_flag(value: &Self::Flag) -> Result<bool, ConvertError>;

    /// Domain timestamp to the timestamp column.
    fn encode_timestamp(value: &Option<DateTime<Utc>>) -> Result<Self::Timestamp, ConvertError>;
    /// Timestamp column to domain timestamp.
    fn decode_timestamp(value: &Self::Timestamp) -> Result<Option<DateTime<Utc>>, ConvertError>;
}

/// SQLite: integer hertz, 0/1 flags, RFC 3339 text timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqlite;

impl Dialect for Sqlite {
    const BACKEND: Backend = Backend::Sqlite;

    type Frequency = Option<i64>;
    type Flag = Option<i64>;
    type Timestamp = Option<String>;

    fn encode_frequency(freq: &String) -> Result<Self::Frequency, ConvertError> {
        frequency::encode_hz(freq)
    }

    fn decode_frequency(freq: &Self::Frequency) -> Result<String, ConvertError> {
        frequency::decode_hz(freq)
    }

    fn encode_flag(value: &bool) -> Result<Self::Flag, ConvertError> {
        nullable::encode_bool_int(value)
    }

    fn decode_flag(value: &Self::Flag) -> Result<bool, ConvertError> {
        nullable::decode_bool_int(value)
    }

    fn encode_timestamp(value: &Option<DateTime<Utc>>) -> Result<Self::Timestamp, ConvertError> {
        nullable::encode_timestamp_text(value)
    }

    fn decode_timestamp(value: &Self::Timestamp) -> Result<Option<DateTime<Utc>>, ConvertError> {
        nullable::decode_timestamp_text(value)
    }
}

/// PostgreSQL: NUMERIC MHz text, native booleans and `TIMESTAMPTZ`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postgres;

impl Dialect for Postgres {
    const BACKEND: Backend = Backend::Postgres;

    type Frequency = Option<String>;
    type Flag = Option<bool>;
    type Timestamp = Option<DateTime<Utc>>;

    fn encode_frequency(freq: &String) -> Result<Self::Frequency, ConvertError> {
        frequency::encode_numeric(freq)
    }

    fn decode_frequency(freq: &Self::Frequency) -> Result<String, ConvertError> {
        frequency::decode_numeric(freq)
    }

    fn encode_flag(value: &bool) -> Result<Self::Flag, ConvertError> {
        nullable::encode_bool(value)
    }

    fn decode_flag(value: &Self::Flag) -> Result<bool, ConvertError> {
        nullable::decode_bool(value)
    }

    fn encode_timestamp(value: &Option<DateTime<Utc>>) -> Result<Self::Timestamp, ConvertError> {
        nullable::encode_timestamp(value)
    }

    fn decode_timestamp(value: &Self::Timestamp) -> Result<Option<DateTime<Utc>>, ConvertError> {
        nullable::decode_timestamp(value)
    }
}
