//! PostgreSQL dialect.

use crate::core::identifier::{IdentifierProcessing, LetterCasing, Quoting};
use crate::core::traits::Dialect;
use crate::dialect::id_generation::{IdGeneration, SequenceStyle};

/// PostgreSQL dialect implementation.
///
/// Diverges from the ANSI baseline in identifier case standardization
/// (PostgreSQL folds unquoted names to lower case), sequence syntax
/// (`nextval('<name>')`), and `$n` bind placeholders.
#[derive(Debug, Clone, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::new(Quoting::ANSI, LetterCasing::LowerCase)
    }

    fn id_generation(&self) -> IdGeneration {
        IdGeneration::new(
            self.name(),
            self.identifier_processing(),
            false,
            SequenceStyle::NextvalFunction,
        )
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::SqlIdentifier;

    #[test]
    fn test_quoting_and_case_folding() {
        let processing = PostgresDialect::new().identifier_processing();
        assert_eq!(processing.quote("Users"), "\"Users\"");
        assert_eq!(processing.standardize_letter_case("MyTable"), "mytable");
    }

    #[test]
    fn test_sequence_query() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            dialect
                .id_generation()
                .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
                .unwrap(),
            "SELECT nextval('order_seq')"
        );
        assert_eq!(
            dialect
                .id_generation()
                .create_sequence_query(&SqlIdentifier::quoted("Order_Seq"))
                .unwrap(),
            "SELECT nextval('\"Order_Seq\"')"
        );
    }

    #[test]
    fn test_generated_keys_are_positional() {
        let dialect = PostgresDialect::new();
        assert!(!dialect.id_generation().driver_requires_key_column_names());
    }

    #[test]
    fn test_param_placeholder() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.param_placeholder(1), "$1");
        assert_eq!(dialect.param_placeholder(10), "$10");
    }
}
