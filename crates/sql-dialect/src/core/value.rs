//! Driver-neutral SQL value representation.
//!
//! Converters registered by a dialect coerce between driver-native and
//! domain-level representations of the same [`SqlValue`] payload. `Cow` is
//! used for text and byte data so values borrowed from a driver buffer can
//! be passed through conversion without copying.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

/// The kind of an [`SqlValue`], independent of the payload.
///
/// Used to describe what a converter consumes and produces, and to carry a
/// type hint on NULL values so downstream encoding stays type-correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    Text,
    Bytes,
    Uuid,
    Decimal,
    DateTime,
    DateTimeOffset,
    Date,
    Time,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "Bool",
            ValueKind::I16 => "I16",
            ValueKind::I32 => "I32",
            ValueKind::I64 => "I64",
            ValueKind::F32 => "F32",
            ValueKind::F64 => "F64",
            ValueKind::Text => "Text",
            ValueKind::Bytes => "Bytes",
            ValueKind::Uuid => "Uuid",
            ValueKind::Decimal => "Decimal",
            ValueKind::DateTime => "DateTime",
            ValueKind::DateTimeOffset => "DateTimeOffset",
            ValueKind::Date => "Date",
            ValueKind::Time => "Time",
        };
        f.write_str(name)
    }
}

/// SQL value enum for type-safe conversion with efficient memory usage.
///
/// # Lifetime
///
/// The `'a` lifetime allows borrowing from driver buffers. For owned data
/// that outlives the source buffer, use [`SqlValue::into_owned`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue<'a> {
    /// NULL with a kind hint for correct downstream encoding.
    Null(ValueKind),

    /// Boolean value.
    Bool(bool),

    /// 16-bit signed integer (smallint).
    I16(i16),

    /// 32-bit signed integer (int).
    I32(i32),

    /// 64-bit signed integer (bigint).
    I64(i64),

    /// 32-bit floating point (real/float4).
    F32(f32),

    /// 64-bit floating point (double precision/float8).
    F64(f64),

    /// Text data with zero-copy support.
    Text(Cow<'a, str>),

    /// Binary data with zero-copy support.
    Bytes(Cow<'a, [u8]>),

    /// UUID/GUID value.
    Uuid(Uuid),

    /// Decimal value with arbitrary precision.
    Decimal(Decimal),

    /// Timestamp without timezone.
    DateTime(NaiveDateTime),

    /// Timestamp with timezone offset.
    DateTimeOffset(DateTime<FixedOffset>),

    /// Date without time component.
    Date(NaiveDate),

    /// Time without date component.
    Time(NaiveTime),
}

impl<'a> SqlValue<'a> {
    /// Convert to a fully owned value with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> SqlValue<'static> {
        match self {
            SqlValue::Null(k) => SqlValue::Null(k),
            SqlValue::Bool(v) => SqlValue::Bool(v),
            SqlValue::I16(v) => SqlValue::I16(v),
            SqlValue::I32(v) => SqlValue::I32(v),
            SqlValue::I64(v) => SqlValue::I64(v),
            SqlValue::F32(v) => SqlValue::F32(v),
            SqlValue::F64(v) => SqlValue::F64(v),
            SqlValue::Text(v) => SqlValue::Text(Cow::Owned(v.into_owned())),
            SqlValue::Bytes(v) => SqlValue::Bytes(Cow::Owned(v.into_owned())),
            SqlValue::Uuid(v) => SqlValue::Uuid(v),
            SqlValue::Decimal(v) => SqlValue::Decimal(v),
            SqlValue::DateTime(v) => SqlValue::DateTime(v),
            SqlValue::DateTimeOffset(v) => SqlValue::DateTimeOffset(v),
            SqlValue::Date(v) => SqlValue::Date(v),
            SqlValue::Time(v) => SqlValue::Time(v),
        }
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null(_))
    }

    /// Get the [`ValueKind`] of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            SqlValue::Null(k) => *k,
            SqlValue::Bool(_) => ValueKind::Bool,
            SqlValue::I16(_) => ValueKind::I16,
            SqlValue::I32(_) => ValueKind::I32,
            SqlValue::I64(_) => ValueKind::I64,
            SqlValue::F32(_) => ValueKind::F32,
            SqlValue::F64(_) => ValueKind::F64,
            SqlValue::Text(_) => ValueKind::Text,
            SqlValue::Bytes(_) => ValueKind::Bytes,
            SqlValue::Uuid(_) => ValueKind::Uuid,
            SqlValue::Decimal(_) => ValueKind::Decimal,
            SqlValue::DateTime(_) => ValueKind::DateTime,
            SqlValue::DateTimeOffset(_) => ValueKind::DateTimeOffset,
            SqlValue::Date(_) => ValueKind::Date,
            SqlValue::Time(_) => ValueKind::Time,
        }
    }

    /// Create a text value from a borrowed string slice.
    #[must_use]
    pub fn text_borrowed(s: &'a str) -> Self {
        SqlValue::Text(Cow::Borrowed(s))
    }

    /// Create a text value from an owned String.
    #[must_use]
    pub fn text_owned(s: String) -> SqlValue<'static> {
        SqlValue::Text(Cow::Owned(s))
    }

    /// Create a bytes value from a borrowed byte slice.
    #[must_use]
    pub fn bytes_borrowed(b: &'a [u8]) -> Self {
        SqlValue::Bytes(Cow::Borrowed(b))
    }
}

impl From<bool> for SqlValue<'static> {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i16> for SqlValue<'static> {
    fn from(v: i16) -> Self {
        SqlValue::I16(v)
    }
}

impl From<i32> for SqlValue<'static> {
    fn from(v: i32) -> Self {
        SqlValue::I32(v)
    }
}

impl From<i64> for SqlValue<'static> {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<f64> for SqlValue<'static> {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<String> for SqlValue<'static> {
    fn from(v: String) -> Self {
        SqlValue::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(v: &'a str) -> Self {
        SqlValue::Text(Cow::Borrowed(v))
    }
}

impl From<Uuid> for SqlValue<'static> {
    fn from(v: Uuid) -> Self {
        SqlValue::Uuid(v)
    }
}

impl From<Decimal> for SqlValue<'static> {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(v)
    }
}

impl From<NaiveDateTime> for SqlValue<'static> {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::DateTime(v)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue<'static> {
    fn from(v: DateTime<FixedOffset>) -> Self {
        SqlValue::DateTimeOffset(v)
    }
}

impl From<NaiveDate> for SqlValue<'static> {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl From<NaiveTime> for SqlValue<'static> {
    fn from(v: NaiveTime) -> Self {
        SqlValue::Time(v)
    }
}
