//! Oracle dialect.

use std::sync::Arc;

use crate::convert::{BooleanToInteger, Converter, NumberToBoolean, TimestampAtUtcToOffsetDateTime};
use crate::core::traits::Dialect;
use crate::dialect::id_generation::{IdGeneration, SequenceStyle};

/// Oracle dialect implementation.
///
/// Diverges from the ANSI baseline in three places:
///
/// - the driver needs explicit key-column names to report generated keys
///   (they are not reported positionally)
/// - sequences are fetched with `SELECT <name>.nextval FROM DUAL`
/// - booleans are persisted numerically and timestamps come back as
///   zone-less UTC, so the matching converters are registered
#[derive(Debug, Clone, Default)]
pub struct OracleDialect;

impl OracleDialect {
    /// Create a new Oracle dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &str {
        "oracle"
    }

    fn id_generation(&self) -> IdGeneration {
        IdGeneration::new(
            self.name(),
            self.identifier_processing(),
            true,
            SequenceStyle::NextvalFromDual,
        )
    }

    fn converters(&self) -> Vec<Arc<dyn Converter>> {
        vec![
            Arc::new(TimestampAtUtcToOffsetDateTime),
            Arc::new(NumberToBoolean),
            Arc::new(BooleanToInteger),
        ]
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!(":{}", index)
    }
}
