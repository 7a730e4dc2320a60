//! Built-in dialect implementations.
//!
//! Each dialect module implements the [`Dialect`](crate::core::traits::Dialect)
//! trait, overriding only the policies where that database diverges from
//! the ANSI baseline supplied by the trait defaults.
//!
//! # Adding New Databases
//!
//! To add support for a new database:
//!
//! 1. Create a new module under `dialect/` starting from the nearest
//!    existing dialect family
//! 2. Override exactly the trait methods where the target database's SQL
//!    or type semantics diverge
//! 3. Add only the converters required by that divergence
//! 4. Register the dialect in
//!    [`DialectRegistry::with_builtins`](crate::core::registry::DialectRegistry::with_builtins)

pub mod id_generation;

mod ansi;
mod mysql;
mod oracle;
mod postgres;
mod sqlserver;

pub use ansi::AnsiDialect;
pub use id_generation::{IdGeneration, SequenceStyle};
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sqlserver::SqlServerDialect;
