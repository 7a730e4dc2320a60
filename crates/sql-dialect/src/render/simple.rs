//! Concrete render context implementations.

use std::fmt;
use std::sync::Arc;

use crate::core::identifier::IdentifierProcessing;
use crate::core::traits::Dialect;

use super::naming::{AsIsNamingStrategy, RenderNamingStrategy};
use super::{
    InsertRenderContext, RenderContext, SelectRenderContext, DEFAULT_INSERT_RENDER_CONTEXT,
    DEFAULT_SELECT_RENDER_CONTEXT,
};

/// Render context with dialect-neutral defaults.
///
/// Identifier processing is the pass-through policy — names render
/// verbatim rather than dialect-quoted — which makes this the right context
/// for naming-strategy-only rendering. The naming strategy is fixed at
/// construction; callers wanting a different one construct a new context.
pub struct SimpleRenderContext {
    naming_strategy: Arc<dyn RenderNamingStrategy>,
}

impl SimpleRenderContext {
    /// Create a context around the given naming strategy.
    pub fn new(naming_strategy: Arc<dyn RenderNamingStrategy>) -> Self {
        Self { naming_strategy }
    }
}

impl Default for SimpleRenderContext {
    fn default() -> Self {
        Self::new(Arc::new(AsIsNamingStrategy))
    }
}

impl RenderContext for SimpleRenderContext {
    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::NONE
    }

    fn select_render_context(&self) -> &dyn SelectRenderContext {
        &DEFAULT_SELECT_RENDER_CONTEXT
    }

    fn insert_render_context(&self) -> &dyn InsertRenderContext {
        &DEFAULT_INSERT_RENDER_CONTEXT
    }

    fn naming_strategy(&self) -> &dyn RenderNamingStrategy {
        self.naming_strategy.as_ref()
    }
}

impl fmt::Debug for SimpleRenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleRenderContext").finish_non_exhaustive()
    }
}

/// Render context bound to a chosen [`Dialect`].
///
/// A renderer is configured once with this context and from then on every
/// dialect-sensitive decision — identifier quoting, SELECT hooks, INSERT
/// shape — is answered by the same dialect instance.
pub struct DialectRenderContext {
    dialect: Arc<dyn Dialect>,
    naming_strategy: Arc<dyn RenderNamingStrategy>,
}

impl DialectRenderContext {
    /// Create a context for the given dialect with as-is naming.
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            naming_strategy: Arc::new(AsIsNamingStrategy),
        }
    }

    /// Replace the naming strategy (builder style, construction-time only).
    #[must_use]
    pub fn with_naming_strategy(mut self, naming_strategy: Arc<dyn RenderNamingStrategy>) -> Self {
        self.naming_strategy = naming_strategy;
        self
    }

    /// The dialect this context is bound to.
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }
}

impl RenderContext for DialectRenderContext {
    fn identifier_processing(&self) -> IdentifierProcessing {
        self.dialect.identifier_processing()
    }

    fn select_render_context(&self) -> &dyn SelectRenderContext {
        self.dialect.select_render_context()
    }

    fn insert_render_context(&self) -> &dyn InsertRenderContext {
        self.dialect.insert_render_context()
    }

    fn naming_strategy(&self) -> &dyn RenderNamingStrategy {
        self.naming_strategy.as_ref()
    }
}

impl fmt::Debug for DialectRenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectRenderContext")
            .field("dialect", &self.dialect.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::SqlIdentifier;
    use crate::dialect::{OracleDialect, SqlServerDialect};

    // Naming strategy that prefixes every table name, for observing that
    // distinct contexts keep distinct strategies.
    struct PrefixNaming {
        prefix: &'static str,
    }

    impl RenderNamingStrategy for PrefixNaming {
        fn table_name(&self, table: &SqlIdentifier) -> SqlIdentifier {
            SqlIdentifier::unquoted(format!("{}{}", self.prefix, table))
        }
    }

    #[test]
    fn test_simple_context_uses_pass_through_processing() {
        let ctx = SimpleRenderContext::default();
        assert_eq!(ctx.identifier_processing(), IdentifierProcessing::NONE);

        let id = SqlIdentifier::quoted("Users");
        assert_eq!(id.to_sql(&ctx.identifier_processing()), "Users");
    }

    #[test]
    fn test_simple_context_returns_its_naming_strategy() {
        let ctx = SimpleRenderContext::new(Arc::new(PrefixNaming { prefix: "app_" }));
        let rendered = ctx
            .naming_strategy()
            .table_name(&SqlIdentifier::unquoted("users"));
        assert_eq!(rendered, SqlIdentifier::unquoted("app_users"));
    }

    #[test]
    fn test_simple_contexts_are_independent() {
        let a = SimpleRenderContext::new(Arc::new(PrefixNaming { prefix: "a_" }));
        let b = SimpleRenderContext::new(Arc::new(PrefixNaming { prefix: "b_" }));

        let table = SqlIdentifier::unquoted("t");
        assert_eq!(
            a.naming_strategy().table_name(&table),
            SqlIdentifier::unquoted("a_t")
        );
        assert_eq!(
            b.naming_strategy().table_name(&table),
            SqlIdentifier::unquoted("b_t")
        );
    }

    #[test]
    fn test_select_context_singleton_is_shared() {
        let a = SimpleRenderContext::default();
        let b = SimpleRenderContext::default();

        let pa = a.select_render_context() as *const dyn SelectRenderContext as *const ();
        let pb = b.select_render_context() as *const dyn SelectRenderContext as *const ();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_dialect_context_delegates_to_dialect() {
        let ctx = DialectRenderContext::new(Arc::new(OracleDialect::new()));
        assert_eq!(ctx.identifier_processing(), IdentifierProcessing::ANSI);
        assert_eq!(ctx.dialect().name(), "oracle");

        let mssql = DialectRenderContext::new(Arc::new(SqlServerDialect::new()));
        assert_eq!(
            mssql
                .insert_render_context()
                .default_values_insert_part(),
            " DEFAULT VALUES"
        );
    }
}
