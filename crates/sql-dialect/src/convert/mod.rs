//! Value converters between driver-native and domain representations.
//!
//! A [`Converter`] is a stateless, immutable, directional mapping between
//! one driver-native value kind and one domain value kind. Bidirectional
//! coercion is achieved by registering a reading/writing converter pair.
//!
//! Dialects declare the converters they need via
//! [`Dialect::converters`](crate::core::traits::Dialect::converters); the
//! broader conversion subsystem pulls that set once per dialect at startup
//! and applies the converters during result-set mapping and parameter
//! binding. This module never invokes converters itself.

use std::fmt;

use chrono::NaiveDateTime;

use crate::core::value::{SqlValue, ValueKind};
use crate::error::{DialectError, Result};

/// Which way a converter maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDirection {
    /// Driver-native value → domain value (result-set mapping).
    Reading,
    /// Domain value → driver-native value (parameter binding).
    Writing,
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionDirection::Reading => f.write_str("reading"),
            ConversionDirection::Writing => f.write_str("writing"),
        }
    }
}

/// A stateless value conversion registered by a dialect.
///
/// Implementations are pure: the same input always produces the same
/// output, and converting never touches shared mutable state, so one
/// instance can safely serve arbitrarily many concurrent sessions.
pub trait Converter: Send + Sync {
    /// Converter name for registration diagnostics and error messages.
    fn name(&self) -> &'static str;

    /// Which way this converter maps.
    fn direction(&self) -> ConversionDirection;

    /// The value kind this converter consumes.
    fn source_kind(&self) -> ValueKind;

    /// The value kind this converter produces.
    fn target_kind(&self) -> ValueKind;

    /// Convert a value.
    ///
    /// # Errors
    ///
    /// [`DialectError::Conversion`] if the value is not of
    /// [`source_kind`](Self::source_kind) — a programming error at the call
    /// site, not a recoverable runtime condition.
    fn convert(&self, value: &SqlValue<'_>) -> Result<SqlValue<'static>>;
}

fn mismatch(converter: &'static str, value: &SqlValue<'_>) -> DialectError {
    DialectError::Conversion {
        converter,
        kind: value.kind(),
    }
}

/// Reattaches the UTC zone to a timestamp the driver returned naive.
///
/// Some drivers hand back `TIMESTAMP` columns as zone-less values that are
/// documented to be UTC; domain models expecting an offset date-time need
/// the `+00:00` restored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampAtUtcToOffsetDateTime;

impl TimestampAtUtcToOffsetDateTime {
    /// Interpret a naive timestamp as UTC and attach the zero offset.
    pub fn reattach_utc(timestamp: NaiveDateTime) -> chrono::DateTime<chrono::FixedOffset> {
        timestamp.and_utc().fixed_offset()
    }
}

impl Converter for TimestampAtUtcToOffsetDateTime {
    fn name(&self) -> &'static str {
        "TimestampAtUtcToOffsetDateTime"
    }

    fn direction(&self) -> ConversionDirection {
        ConversionDirection::Reading
    }

    fn source_kind(&self) -> ValueKind {
        ValueKind::DateTime
    }

    fn target_kind(&self) -> ValueKind {
        ValueKind::DateTimeOffset
    }

    fn convert(&self, value: &SqlValue<'_>) -> Result<SqlValue<'static>> {
        match value {
            SqlValue::DateTime(ts) => Ok(SqlValue::DateTimeOffset(Self::reattach_utc(*ts))),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// Maps numeric 0/1 columns to booleans on read.
///
/// For databases that have no boolean column type and persist flags as
/// numbers: zero is false, anything else is true.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberToBoolean;

impl Converter for NumberToBoolean {
    fn name(&self) -> &'static str {
        "NumberToBoolean"
    }

    fn direction(&self) -> ConversionDirection {
        ConversionDirection::Reading
    }

    fn source_kind(&self) -> ValueKind {
        ValueKind::I32
    }

    fn target_kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn convert(&self, value: &SqlValue<'_>) -> Result<SqlValue<'static>> {
        let flag = match value {
            SqlValue::I16(v) => *v != 0,
            SqlValue::I32(v) => *v != 0,
            SqlValue::I64(v) => *v != 0,
            SqlValue::F32(v) => *v != 0.0,
            SqlValue::F64(v) => *v != 0.0,
            SqlValue::Decimal(v) => !v.is_zero(),
            other => return Err(mismatch(self.name(), other)),
        };
        Ok(SqlValue::Bool(flag))
    }
}

/// Maps booleans to integer 0/1 on write.
///
/// Total over booleans: true is 1, false is 0, and no other outcome exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanToInteger;

impl BooleanToInteger {
    /// The integer representation of a boolean flag.
    pub fn convert_bool(value: bool) -> i32 {
        if value {
            1
        } else {
            0
        }
    }
}

impl Converter for BooleanToInteger {
    fn name(&self) -> &'static str {
        "BooleanToInteger"
    }

    fn direction(&self) -> ConversionDirection {
        ConversionDirection::Writing
    }

    fn source_kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn target_kind(&self) -> ValueKind {
        ValueKind::I32
    }

    fn convert(&self, value: &SqlValue<'_>) -> Result<SqlValue<'static>> {
        match value {
            SqlValue::Bool(v) => Ok(SqlValue::I32(Self::convert_bool(*v))),
            other => Err(mismatch(self.name(), other)),
        }
    }
}
