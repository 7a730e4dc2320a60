//! Configuration loading and validation.
//!
//! A rendering session is configured once: pick a database, decide whether
//! identifiers should be dialect-quoted, resolve against a
//! [`DialectRegistry`]. Bad configuration fails fast here, before any
//! statement is ever rendered.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::registry::DialectRegistry;
use crate::core::traits::Dialect;
use crate::error::Result;
use crate::render::{DialectRenderContext, RenderContext, SimpleRenderContext};

fn default_quote_identifiers() -> bool {
    true
}

/// Rendering-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Database identifier; aliases like `postgresql` or `mariadb` are
    /// accepted.
    pub database: String,

    /// Whether identifiers render dialect-quoted. When false the session
    /// uses the pass-through context and names render verbatim.
    #[serde(default = "default_quote_identifiers")]
    pub quote_identifiers: bool,
}

impl RenderConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RenderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// [`DialectError::Config`](crate::error::DialectError::Config) if the
    /// database identifier is not one a built-in dialect answers to.
    pub fn validate(&self) -> Result<()> {
        DialectRegistry::normalize_db_type(&self.database)?;
        Ok(())
    }

    /// Resolve the configured dialect against a registry.
    pub fn dialect(&self, registry: &DialectRegistry) -> Result<Arc<dyn Dialect>> {
        registry.resolve(&self.database)
    }

    /// Build the render context for one rendering session.
    ///
    /// Dialect-backed when identifiers are quoted, pass-through otherwise.
    pub fn create_render_context(
        &self,
        registry: &DialectRegistry,
    ) -> Result<Box<dyn RenderContext>> {
        let dialect = self.dialect(registry)?;
        debug!(
            database = %self.database,
            dialect = dialect.name(),
            quote_identifiers = self.quote_identifiers,
            "configured rendering session"
        );
        if self.quote_identifiers {
            Ok(Box::new(DialectRenderContext::new(dialect)))
        } else {
            Ok(Box::new(SimpleRenderContext::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::IdentifierProcessing;

    #[test]
    fn test_from_yaml() {
        let config = RenderConfig::from_yaml("database: oracle\n").unwrap();
        assert_eq!(config.database, "oracle");
        assert!(config.quote_identifiers);
    }

    #[test]
    fn test_from_yaml_with_quoting_disabled() {
        let config =
            RenderConfig::from_yaml("database: postgres\nquote_identifiers: false\n").unwrap();
        assert!(!config.quote_identifiers);
    }

    #[test]
    fn test_unknown_database_fails_fast() {
        assert!(RenderConfig::from_yaml("database: dbase\n").is_err());
    }

    #[test]
    fn test_create_render_context_dialect_backed() {
        let registry = DialectRegistry::with_builtins();
        let config = RenderConfig::from_yaml("database: sqlserver\n").unwrap();
        let ctx = config.create_render_context(&registry).unwrap();
        assert_eq!(
            ctx.insert_render_context().default_values_insert_part(),
            " DEFAULT VALUES"
        );
    }

    #[test]
    fn test_create_render_context_pass_through() {
        let registry = DialectRegistry::with_builtins();
        let config =
            RenderConfig::from_yaml("database: oracle\nquote_identifiers: false\n").unwrap();
        let ctx = config.create_render_context(&registry).unwrap();
        assert_eq!(ctx.identifier_processing(), IdentifierProcessing::NONE);
    }

    #[test]
    fn test_dialect_resolution_uses_aliases() {
        let registry = DialectRegistry::with_builtins();
        let config = RenderConfig::from_yaml("database: pg\n").unwrap();
        assert_eq!(config.dialect(&registry).unwrap().name(), "postgres");
    }
}
