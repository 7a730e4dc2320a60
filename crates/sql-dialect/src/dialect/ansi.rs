//! ANSI baseline dialect.

use crate::core::traits::Dialect;

/// The ANSI SQL baseline: correct for most databases, overridden per
/// vendor only where that vendor diverges.
///
/// Every policy comes from the [`Dialect`] trait defaults — double-quote
/// identifier quoting, positional generated-key reporting,
/// `NEXT VALUE FOR` sequences, no converters, `?` placeholders.
#[derive(Debug, Clone, Default)]
pub struct AnsiDialect;

impl AnsiDialect {
    /// Create a new ANSI dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for AnsiDialect {
    fn name(&self) -> &str {
        "ansi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::{IdentifierProcessing, SqlIdentifier};

    #[test]
    fn test_baseline_defaults() {
        let dialect = AnsiDialect::new();
        assert_eq!(dialect.name(), "ansi");
        assert_eq!(dialect.identifier_processing(), IdentifierProcessing::ANSI);
        assert!(!dialect.id_generation().driver_requires_key_column_names());
        assert!(dialect.converters().is_empty());
        assert_eq!(dialect.param_placeholder(1), "?");
    }

    #[test]
    fn test_baseline_sequence_query() {
        let dialect = AnsiDialect::new();
        assert_eq!(
            dialect
                .id_generation()
                .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
                .unwrap(),
            "SELECT NEXT VALUE FOR order_seq"
        );
    }

    #[test]
    fn test_baseline_insert_part() {
        let dialect = AnsiDialect::new();
        assert_eq!(
            dialect.insert_render_context().default_values_insert_part(),
            " VALUES (DEFAULT)"
        );
    }
}
