//! SQL Server dialect.

use crate::core::identifier::{IdentifierProcessing, LetterCasing, Quoting};
use crate::core::traits::Dialect;
use crate::render::{InsertRenderContext, SQL_SERVER_INSERT_RENDER_CONTEXT};

/// Microsoft SQL Server dialect implementation.
///
/// Diverges from the ANSI baseline in identifier quoting (square brackets,
/// unambiguous regardless of the session's `QUOTED_IDENTIFIER` setting),
/// the column-less INSERT shape (`DEFAULT VALUES`), and `@Pn` bind
/// placeholders. Sequences use the baseline `NEXT VALUE FOR` syntax.
#[derive(Debug, Clone, Default)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Create a new SQL Server dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &str {
        "sqlserver"
    }

    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::new(Quoting::BRACKET, LetterCasing::AsIs)
    }

    fn insert_render_context(&self) -> &'static dyn InsertRenderContext {
        &SQL_SERVER_INSERT_RENDER_CONTEXT
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("@P{}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::SqlIdentifier;

    #[test]
    fn test_bracket_quoting() {
        let processing = SqlServerDialect::new().identifier_processing();
        assert_eq!(processing.quote("Users"), "[Users]");
        assert_eq!(processing.quote("table]name"), "[table]]name]");
    }

    #[test]
    fn test_sequence_query() {
        let dialect = SqlServerDialect::new();
        assert_eq!(
            dialect
                .id_generation()
                .create_sequence_query(&SqlIdentifier::quoted("order_seq"))
                .unwrap(),
            "SELECT NEXT VALUE FOR [order_seq]"
        );
    }

    #[test]
    fn test_default_values_insert_part() {
        let dialect = SqlServerDialect::new();
        assert_eq!(
            dialect.insert_render_context().default_values_insert_part(),
            " DEFAULT VALUES"
        );
    }

    #[test]
    fn test_param_placeholder() {
        let dialect = SqlServerDialect::new();
        assert_eq!(dialect.param_placeholder(1), "@P1");
        assert_eq!(dialect.param_placeholder(10), "@P10");
    }
}
