//! Key-generation policy per dialect.
//!
//! [`IdGeneration`] answers the three questions a statement renderer has for
//! an INSERT that needs database-generated keys: does the driver need the
//! key columns spelled out, how does the key column render, and what SQL
//! fetches the next value of a named sequence.
//!
//! The policy is a plain immutable value constructed from its owning
//! dialect's live configuration, so it can never observe a partially
//! constructed dialect and never diverges from the dialect's identifier
//! processing.

use crate::core::identifier::{IdentifierProcessing, SqlIdentifier};
use crate::error::{DialectError, Result};

/// How a dialect fetches the next value of a named sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceStyle {
    /// `SELECT NEXT VALUE FOR <name>` (SQL:2003; SQL Server, ANSI baseline).
    NextValueFor,
    /// `SELECT nextval('<name>')` (PostgreSQL).
    NextvalFunction,
    /// `SELECT <name>.nextval FROM DUAL` (Oracle).
    NextvalFromDual,
    /// The database has no sequence objects (MySQL).
    Unsupported,
}

/// Immutable key-generation policy for one dialect.
///
/// Pure functions of its inputs; no internal state. Obtained from
/// [`Dialect::id_generation`](crate::core::traits::Dialect::id_generation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGeneration {
    dialect: String,
    processing: IdentifierProcessing,
    requires_key_column_names: bool,
    sequence_style: SequenceStyle,
}

impl IdGeneration {
    /// Create a policy for the named dialect.
    ///
    /// `processing` must be the owning dialect's identifier processing so
    /// that [`key_column_name`](Self::key_column_name) and the dialect
    /// render identifiers identically.
    pub fn new(
        dialect: impl Into<String>,
        processing: IdentifierProcessing,
        requires_key_column_names: bool,
        sequence_style: SequenceStyle,
    ) -> Self {
        Self {
            dialect: dialect.into(),
            processing,
            requires_key_column_names,
            sequence_style,
        }
    }

    /// Whether the driver needs explicit key-column names to report
    /// generated keys (rather than reporting them positionally).
    pub fn driver_requires_key_column_names(&self) -> bool {
        self.requires_key_column_names
    }

    /// Render a key-column identifier through the owning dialect's
    /// identifier processing.
    pub fn key_column_name(&self, id: &SqlIdentifier) -> String {
        id.to_sql(&self.processing)
    }

    /// Whether this dialect has sequence objects at all.
    pub fn sequences_supported(&self) -> bool {
        self.sequence_style != SequenceStyle::Unsupported
    }

    /// Render the statement that fetches the next value of the named
    /// sequence.
    ///
    /// Only the sequence name is dialect-rendered; the surrounding keywords
    /// (`NEXT VALUE FOR`, `nextval`, `DUAL`) are fixed syntax.
    ///
    /// # Errors
    ///
    /// [`DialectError::SequencesUnsupported`] if the dialect has no
    /// sequences, or [`DialectError::Config`] if the name fails validation.
    pub fn create_sequence_query(&self, sequence: &SqlIdentifier) -> Result<String> {
        sequence.validate()?;
        let name = sequence.to_sql(&self.processing);
        match self.sequence_style {
            SequenceStyle::NextValueFor => Ok(format!("SELECT NEXT VALUE FOR {}", name)),
            SequenceStyle::NextvalFunction => Ok(format!("SELECT nextval('{}')", name)),
            SequenceStyle::NextvalFromDual => Ok(format!("SELECT {}.nextval FROM DUAL", name)),
            SequenceStyle::Unsupported => {
                Err(DialectError::SequencesUnsupported(self.dialect.clone()))
            }
        }
    }

    /// The identifier processing this policy renders through.
    pub fn identifier_processing(&self) -> IdentifierProcessing {
        self.processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> IdGeneration {
        IdGeneration::new(
            "ansi",
            IdentifierProcessing::ANSI,
            false,
            SequenceStyle::NextValueFor,
        )
    }

    #[test]
    fn test_key_column_name_uses_processing() {
        let policy = baseline();
        assert_eq!(
            policy.key_column_name(&SqlIdentifier::unquoted("id")),
            "id"
        );
        assert_eq!(
            policy.key_column_name(&SqlIdentifier::quoted("id")),
            "\"id\""
        );
    }

    #[test]
    fn test_next_value_for_style() {
        let policy = baseline();
        assert_eq!(
            policy
                .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
                .unwrap(),
            "SELECT NEXT VALUE FOR order_seq"
        );
    }

    #[test]
    fn test_nextval_function_style() {
        let policy = IdGeneration::new(
            "postgres",
            IdentifierProcessing::ANSI,
            false,
            SequenceStyle::NextvalFunction,
        );
        assert_eq!(
            policy
                .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
                .unwrap(),
            "SELECT nextval('order_seq')"
        );
    }

    #[test]
    fn test_unsupported_style_is_an_error() {
        let policy = IdGeneration::new(
            "mysql",
            IdentifierProcessing::NONE,
            false,
            SequenceStyle::Unsupported,
        );
        assert!(!policy.sequences_supported());
        let err = policy
            .create_sequence_query(&SqlIdentifier::unquoted("order_seq"))
            .unwrap_err();
        assert!(err.to_string().contains("mysql"));
    }

    #[test]
    fn test_sequence_name_is_validated() {
        let policy = baseline();
        assert!(policy
            .create_sequence_query(&SqlIdentifier::unquoted("bad\0seq"))
            .is_err());
    }

    #[test]
    fn test_policy_equality() {
        // Two policies built from the same configuration are the same value.
        assert_eq!(baseline(), baseline());
    }
}
