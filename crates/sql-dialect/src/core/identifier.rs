//! SQL identifiers and the per-dialect rules for rendering them.
//!
//! Identifiers (schema, table, and column names) cannot be bound as
//! parameters in prepared statements, so dynamic SQL has to splice them in
//! as text. This module keeps that safe and consistent:
//!
//! 1. Identifiers are validated for suspicious content (null bytes,
//!    excessive length) at the configuration boundary
//! 2. Quoting is applied per dialect (double quotes, backticks, brackets)
//! 3. The closing quote character is escaped by doubling inside the quotes
//!
//! [`SqlIdentifier`] is the opaque, possibly multi-part name handed in by
//! the mapping layer; [`IdentifierProcessing`] is the dialect-supplied rule
//! for turning it into SQL text.

use std::fmt;

use crate::error::{DialectError, Result};

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
/// - MySQL: 64 characters
/// - Oracle: 128 bytes (12.2+)
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// A quoting rule: prefix/suffix pair with escape-by-doubling.
///
/// Embedded occurrences of the closing character are doubled, so
/// `tab"le` quoted with [`Quoting::ANSI`] becomes `"tab""le"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quoting {
    prefix: &'static str,
    suffix: &'static str,
}

impl Quoting {
    /// ANSI double quotes (`"name"`), used by PostgreSQL, Oracle, and the
    /// SQL standard.
    pub const ANSI: Quoting = Quoting::new("\"", "\"");

    /// Backticks (`` `name` ``), used by MySQL and MariaDB.
    pub const BACKTICK: Quoting = Quoting::new("`", "`");

    /// Square brackets (`[name]`), used by SQL Server.
    pub const BRACKET: Quoting = Quoting::new("[", "]");

    /// No quoting at all; names pass through verbatim.
    pub const NONE: Quoting = Quoting::new("", "");

    /// Create a quoting rule from a prefix/suffix pair.
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Quote a raw name, escaping embedded closing characters by doubling.
    pub fn quote(&self, name: &str) -> String {
        if self.suffix.is_empty() {
            return name.to_string();
        }
        let doubled = format!("{}{}", self.suffix, self.suffix);
        format!(
            "{}{}{}",
            self.prefix,
            name.replace(self.suffix, &doubled),
            self.suffix
        )
    }
}

/// Letter-case standardization applied when identifiers are derived from
/// unquoted logical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCasing {
    /// Keep the name exactly as written.
    AsIs,
    /// Standardize to upper case (ANSI, Oracle).
    UpperCase,
    /// Standardize to lower case (PostgreSQL).
    LowerCase,
}

/// The rule for turning a logical name into dialect-correct SQL text.
///
/// Supplied by each dialect and treated as a value: two processings are
/// interchangeable iff they compare equal. Exactly one processing governs a
/// rendering session; mixing rules within one statement is a correctness bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentifierProcessing {
    quoting: Quoting,
    letter_casing: LetterCasing,
}

impl IdentifierProcessing {
    /// ANSI-compliant processing: double quotes, upper-case standardization.
    pub const ANSI: IdentifierProcessing =
        IdentifierProcessing::new(Quoting::ANSI, LetterCasing::UpperCase);

    /// Pass-through processing: no quoting, no case standardization.
    ///
    /// Used when the caller wants names rendered verbatim rather than
    /// dialect-quoted, e.g. by [`SimpleRenderContext`](crate::render::SimpleRenderContext).
    pub const NONE: IdentifierProcessing =
        IdentifierProcessing::new(Quoting::NONE, LetterCasing::AsIs);

    /// Create a processing from a quoting rule and a letter casing.
    pub const fn new(quoting: Quoting, letter_casing: LetterCasing) -> Self {
        Self {
            quoting,
            letter_casing,
        }
    }

    /// Quote a single raw name per this processing's quoting rule.
    pub fn quote(&self, name: &str) -> String {
        self.quoting.quote(name)
    }

    /// Standardize the letter case of an unquoted logical name.
    ///
    /// This is applied by the mapping layer when it derives identifiers,
    /// not by [`SqlIdentifier::to_sql`]: an identifier created unquoted
    /// renders exactly as it was written.
    pub fn standardize_letter_case(&self, name: &str) -> String {
        match self.letter_casing {
            LetterCasing::AsIs => name.to_string(),
            LetterCasing::UpperCase => name.to_uppercase(),
            LetterCasing::LowerCase => name.to_lowercase(),
        }
    }

    /// The quoting rule of this processing.
    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    /// The letter casing of this processing.
    pub fn letter_casing(&self) -> LetterCasing {
        self.letter_casing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IdentifierPart {
    name: String,
    quoted: bool,
}

/// An opaque, possibly multi-part SQL name (e.g. `schema.table.column`).
///
/// Immutable; created by the mapping layer and passed through unchanged.
/// Each part records whether it was created quoted or unquoted:
///
/// - quoted parts are rendered through the session's [`IdentifierProcessing`]
/// - unquoted parts render verbatim
///
/// # Example
///
/// ```rust
/// use sql_dialect::core::{IdentifierProcessing, SqlIdentifier};
///
/// let plain = SqlIdentifier::unquoted("my_seq");
/// assert_eq!(plain.to_sql(&IdentifierProcessing::ANSI), "my_seq");
///
/// let quoted = SqlIdentifier::quoted("my_seq");
/// assert_eq!(quoted.to_sql(&IdentifierProcessing::ANSI), "\"my_seq\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlIdentifier {
    parts: Vec<IdentifierPart>,
}

impl SqlIdentifier {
    /// Create a single-part identifier that renders quoted.
    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            parts: vec![IdentifierPart {
                name: name.into(),
                quoted: true,
            }],
        }
    }

    /// Create a single-part identifier that renders verbatim.
    pub fn unquoted(name: impl Into<String>) -> Self {
        Self {
            parts: vec![IdentifierPart {
                name: name.into(),
                quoted: false,
            }],
        }
    }

    /// Compose a multi-part identifier (e.g. schema-qualified table name)
    /// from existing identifiers, flattening any composites.
    pub fn composite<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = SqlIdentifier>,
    {
        Self {
            parts: parts.into_iter().flat_map(|id| id.parts).collect(),
        }
    }

    /// Whether this identifier has more than one part.
    pub fn is_composite(&self) -> bool {
        self.parts.len() > 1
    }

    /// Render this identifier as SQL text under the given processing.
    ///
    /// Parts are joined with `.`; quoted parts go through the processing's
    /// quoting rule, unquoted parts pass through unchanged.
    pub fn to_sql(&self, processing: &IdentifierProcessing) -> String {
        self.parts
            .iter()
            .map(|part| {
                if part.quoted {
                    processing.quote(&part.name)
                } else {
                    part.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Validate this identifier for use in dynamically assembled SQL.
    ///
    /// Rejects empty parts, parts containing null bytes, and parts
    /// exceeding the conservative cross-database length limit. Intended for
    /// the configuration boundary (e.g. sequence names read from config);
    /// rendering itself never fails.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Config`] with a descriptive message.
    pub fn validate(&self) -> Result<()> {
        for part in &self.parts {
            if part.name.is_empty() {
                return Err(DialectError::Config(
                    "Identifier cannot be empty".to_string(),
                ));
            }
            if part.name.contains('\0') {
                return Err(DialectError::Config(format!(
                    "Identifier contains null byte (possible injection attempt): {:?}",
                    part.name
                )));
            }
            if part.name.len() > MAX_IDENTIFIER_LENGTH {
                return Err(DialectError::Config(format!(
                    "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
                    MAX_IDENTIFIER_LENGTH,
                    part.name.len(),
                    part.name
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SqlIdentifier {
    /// Diagnostic form: raw part names joined with `.`, no quoting applied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self
            .parts
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&raw)
    }
}
