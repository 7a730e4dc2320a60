//! Dialect registry for explicit dependency injection.
//!
//! The [`DialectRegistry`] maps database identifiers to shared dialect
//! instances. It is explicitly constructed and handed to whatever
//! configures a rendering session — there is no global singleton — which
//! keeps initialization deterministic and makes multi-dialect testing
//! trivial.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::core::traits::Dialect;
use crate::dialect::{AnsiDialect, MySqlDialect, OracleDialect, PostgresDialect, SqlServerDialect};
use crate::error::{DialectError, Result};

/// Registry of dialects keyed by database identifier.
///
/// A missing dialect is a fatal configuration error surfaced immediately
/// via [`require`](Self::require) — never retried, never degraded.
#[derive(Default)]
pub struct DialectRegistry {
    dialects: HashMap<String, Arc<dyn Dialect>>,
}

impl DialectRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in dialects registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("ansi", AnsiDialect::new());
        registry.register("oracle", OracleDialect::new());
        registry.register("postgres", PostgresDialect::new());
        registry.register("sqlserver", SqlServerDialect::new());
        registry.register("mysql", MySqlDialect::new());
        debug!(dialects = ?registry.names(), "registered built-in dialects");
        registry
    }

    /// Register a dialect by name.
    pub fn register(&mut self, name: impl Into<String>, dialect: impl Dialect + 'static) {
        self.dialects.insert(name.into(), Arc::new(dialect));
    }

    /// Register a dialect as an Arc (for sharing).
    pub fn register_arc(&mut self, name: impl Into<String>, dialect: Arc<dyn Dialect>) {
        self.dialects.insert(name.into(), dialect);
    }

    /// Get a dialect by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).cloned()
    }

    /// Get a dialect by exact name, failing fast if absent.
    pub fn require(&self, name: &str) -> Result<Arc<dyn Dialect>> {
        self.get(name)
            .ok_or_else(|| DialectError::Config(format!("Unknown database dialect: {}", name)))
    }

    /// Resolve a database identifier, accepting common aliases.
    ///
    /// `postgresql`/`pg` resolve to postgres, `mssql`/`sql_server` to
    /// sqlserver, `mariadb` to mysql; matching is case-insensitive.
    pub fn resolve(&self, db_type: &str) -> Result<Arc<dyn Dialect>> {
        self.require(Self::normalize_db_type(db_type)?)
    }

    /// Check if a dialect is registered under the exact name.
    pub fn has(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// Get all registered dialect names.
    pub fn names(&self) -> Vec<&str> {
        self.dialects.keys().map(String::as_str).collect()
    }

    /// Get the canonical database identifier for a (possibly aliased) name.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Config`] for identifiers no built-in dialect
    /// answers to.
    pub fn normalize_db_type(db_type: &str) -> Result<&'static str> {
        match db_type.to_lowercase().as_str() {
            "ansi" => Ok("ansi"),
            "oracle" => Ok("oracle"),
            "postgres" | "postgresql" | "pg" => Ok("postgres"),
            "mssql" | "sqlserver" | "sql_server" => Ok("sqlserver"),
            "mysql" | "mariadb" => Ok("mysql"),
            other => Err(DialectError::Config(format!(
                "Unknown database type: '{}'. Supported types: ansi, oracle, postgres, sqlserver, mysql",
                other
            ))),
        }
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.dialects.keys().collect::<Vec<_>>())
            .finish()
    }
}
