//! # sql-dialect
//!
//! Vendor-specific SQL rendering policy behind a uniform contract.
//!
//! A statement renderer walking an abstract SQL statement tree needs a
//! stream of small, per-database decisions without knowing which database
//! it targets. This library supplies them:
//!
//! - **Identifier quoting** via [`IdentifierProcessing`] (double quotes,
//!   backticks, brackets, or verbatim) and multi-part [`SqlIdentifier`]s
//! - **Key generation** via [`IdGeneration`]: whether the driver needs
//!   explicit key-column names and how to fetch the next sequence value
//! - **Value coercion** via per-dialect [`Converter`] sets (numeric
//!   booleans, UTC timestamp reattachment)
//! - **Statement shaping** via select/insert render contexts and
//!   bind-parameter markers
//!
//! One [`Dialect`] per database family; the ANSI baseline lives in the
//! trait defaults and vendor dialects override only what diverges. All
//! types are immutable after construction and safe to share across
//! concurrent rendering sessions.
//!
//! ## Example
//!
//! ```rust
//! use sql_dialect::{DialectRegistry, SqlIdentifier};
//!
//! # fn main() -> sql_dialect::Result<()> {
//! let registry = DialectRegistry::with_builtins();
//! let oracle = registry.resolve("oracle")?;
//!
//! let id_generation = oracle.id_generation();
//! assert!(id_generation.driver_requires_key_column_names());
//! assert_eq!(
//!     id_generation.create_sequence_query(&SqlIdentifier::unquoted("my_seq"))?,
//!     "SELECT my_seq.nextval FROM DUAL"
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod core;
pub mod dialect;
pub mod error;
pub mod render;

// Re-exports for convenient access
pub use config::RenderConfig;
pub use convert::{
    BooleanToInteger, ConversionDirection, Converter, NumberToBoolean,
    TimestampAtUtcToOffsetDateTime,
};
pub use crate::core::identifier::{IdentifierProcessing, LetterCasing, Quoting, SqlIdentifier};
pub use crate::core::registry::DialectRegistry;
pub use crate::core::traits::Dialect;
pub use crate::core::value::{SqlValue, ValueKind};
pub use dialect::{
    AnsiDialect, IdGeneration, MySqlDialect, OracleDialect, PostgresDialect, SequenceStyle,
    SqlServerDialect,
};
pub use error::{DialectError, Result};
pub use render::{
    AsIsNamingStrategy, DialectRenderContext, InsertRenderContext, InsertRenderContexts,
    RenderContext, RenderNamingStrategy, SelectRenderContext, SimpleRenderContext,
};
