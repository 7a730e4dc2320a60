//! The dialect capability consumed by a statement renderer.
//!
//! [`Dialect`] bundles every per-database rendering policy: identifier
//! processing, key generation, value converters, statement sub-contexts,
//! and bind-parameter markers. The trait's default method bodies are the
//! ANSI baseline; a vendor dialect overrides only the methods where that
//! vendor diverges, never duplicating unaffected behavior.
//!
//! # Design Pattern
//!
//! This is a **Strategy** pattern — different implementations provide
//! interchangeable rendering policy, and the renderer stays database-
//! agnostic. Inheritance-of-defaults lives in the trait itself instead of a
//! base class.

use std::sync::Arc;

use crate::convert::Converter;
use crate::core::identifier::IdentifierProcessing;
use crate::dialect::id_generation::{IdGeneration, SequenceStyle};
use crate::render::{
    InsertRenderContext, SelectRenderContext, DEFAULT_INSERT_RENDER_CONTEXT,
    DEFAULT_SELECT_RENDER_CONTEXT,
};

/// Per-database rendering policy bundle.
///
/// Implementations are immutable after construction and shared freely
/// across concurrent rendering sessions; every method is a pure lookup.
/// Exactly one dialect governs a rendering session.
pub trait Dialect: Send + Sync {
    /// The dialect identifier (e.g. "oracle", "postgres").
    fn name(&self) -> &str;

    /// How this dialect quotes and standardizes identifiers.
    fn identifier_processing(&self) -> IdentifierProcessing {
        IdentifierProcessing::ANSI
    }

    /// The key-generation policy of this dialect.
    ///
    /// The returned policy renders through this dialect's own identifier
    /// processing; the two never diverge.
    fn id_generation(&self) -> IdGeneration {
        IdGeneration::new(
            self.name(),
            self.identifier_processing(),
            false,
            SequenceStyle::NextValueFor,
        )
    }

    /// The value converters this dialect needs.
    ///
    /// Pulled once per dialect by the external conversion subsystem;
    /// insertion order is irrelevant. The baseline needs none.
    fn converters(&self) -> Vec<Arc<dyn Converter>> {
        Vec::new()
    }

    /// SELECT-specific rendering decisions.
    fn select_render_context(&self) -> &'static dyn SelectRenderContext {
        &DEFAULT_SELECT_RENDER_CONTEXT
    }

    /// INSERT-specific rendering decisions.
    fn insert_render_context(&self) -> &'static dyn InsertRenderContext {
        &DEFAULT_INSERT_RENDER_CONTEXT
    }

    /// The bind-parameter marker for the given 1-based index.
    ///
    /// - ANSI / MySQL: `?`
    /// - PostgreSQL: `$1`, `$2`, …
    /// - SQL Server: `@P1`, `@P2`, …
    /// - Oracle: `:1`, `:2`, …
    fn param_placeholder(&self, index: usize) -> String {
        let _ = index;
        "?".to_string()
    }
}
