//! MySQL / MariaDB dialect.

use std::sync::Arc;

use crate::convert::{BooleanToInteger, Converter, NumberToBoolean};
use crate::core::identifier::{IdentifierProcessing, LetterCasing, Quoting};
use crate::core::traits::Dialect;
use crate::dialect::id_generation::{IdGeneration, SequenceStyle};

/// MySQL dialect implementation (also covers MariaDB).
///
/// Diverges from the ANSI baseline in identifier quoting (backticks) and
/// in having no sequence objects at all. Booleans are persisted as
/// `TINYINT(1)`, so the numeric boolean converter pair is registered.
#[derive(Debug, Clone, Default)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Create a new MySQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::new(Quoting::BACKTICK, LetterCasing::AsIs)
    }

    fn id_generation(&self) -> IdGeneration {
        IdGeneration::new(
            self.name(),
            self.identifier_processing(),
            false,
            SequenceStyle::Unsupported,
        )
    }

    fn converters(&self) -> Vec<Arc<dyn Converter>> {
        vec![Arc::new(NumberToBoolean), Arc::new(BooleanToInteger)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::SqlIdentifier;
    use crate::error::DialectError;

    #[test]
    fn test_backtick_quoting() {
        let processing = MySqlDialect::new().identifier_processing();
        assert_eq!(processing.quote("users"), "`users`");
        assert_eq!(processing.quote("table`name"), "`table``name`");
    }

    #[test]
    fn test_sequences_unsupported() {
        let dialect = MySqlDialect::new();
        let id_generation = dialect.id_generation();
        assert!(!id_generation.sequences_supported());

        let err = id_generation
            .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
            .unwrap_err();
        assert!(matches!(err, DialectError::SequencesUnsupported(_)));
    }

    #[test]
    fn test_boolean_converter_pair() {
        let dialect = MySqlDialect::new();
        let mut names: Vec<_> = dialect.converters().iter().map(|c| c.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["BooleanToInteger", "NumberToBoolean"]);
    }

    #[test]
    fn test_param_placeholder_is_baseline() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.param_placeholder(1), "?");
        assert_eq!(dialect.param_placeholder(5), "?");
    }
}
