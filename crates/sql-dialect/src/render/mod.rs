//! Rendering contexts consumed by a statement renderer.
//!
//! A statement renderer walks an abstract SQL statement tree and asks a
//! [`RenderContext`] for every dialect-sensitive decision: how identifiers
//! render, what to append around SELECT clauses, and how a column-less
//! INSERT is shaped. All context types here are pure lookup objects —
//! construction is the only lifecycle event, there is no mutation or
//! teardown, and everything is safe to share across concurrent sessions.

mod naming;
mod simple;

pub use naming::{AsIsNamingStrategy, RenderNamingStrategy};
pub use simple::{DialectRenderContext, SimpleRenderContext};

use crate::core::identifier::IdentifierProcessing;

/// Session-scoped bundle of rendering decisions handed to a statement
/// renderer.
pub trait RenderContext: Send + Sync {
    /// The identifier processing governing this rendering session.
    fn identifier_processing(&self) -> IdentifierProcessing;

    /// SELECT-specific rendering decisions.
    fn select_render_context(&self) -> &dyn SelectRenderContext;

    /// INSERT-specific rendering decisions.
    fn insert_render_context(&self) -> &dyn InsertRenderContext;

    /// The naming strategy mapping logical names to rendered identifiers.
    fn naming_strategy(&self) -> &dyn RenderNamingStrategy;
}

/// SELECT-statement rendering hooks.
///
/// The defaults return empty fragments; a dialect that needs trailing
/// syntax (lock hints, pagination scaffolding) overrides the relevant hook.
pub trait SelectRenderContext: Send + Sync {
    /// Fragment appended directly after the FROM table list.
    fn after_from_table(&self) -> &str {
        ""
    }

    /// Fragment appended after the ORDER BY clause (or where it would be).
    fn after_order_by(&self, has_order_by: bool) -> &str {
        let _ = has_order_by;
        ""
    }
}

/// The dialect-neutral SELECT context: no overrides, no state.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSelectRenderContext;

impl SelectRenderContext for DefaultSelectRenderContext {}

/// Shared instance of [`DefaultSelectRenderContext`].
///
/// Every context that has no SELECT-specific behavior hands out a reference
/// to this one static value; sharing without per-instance state is
/// intentional and observable (pointer equality).
pub static DEFAULT_SELECT_RENDER_CONTEXT: DefaultSelectRenderContext = DefaultSelectRenderContext;

/// INSERT-statement rendering decisions.
pub trait InsertRenderContext: Send + Sync {
    /// The fragment completing an INSERT that carries no columns.
    ///
    /// Appended verbatim after `INSERT INTO <table>`.
    fn default_values_insert_part(&self) -> &str;
}

/// The process-wide INSERT rendering policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertRenderContexts {
    /// `VALUES (DEFAULT)` — the SQL-standard shape.
    Default,
    /// `DEFAULT VALUES` — SQL Server's shape.
    SqlServer,
}

impl InsertRenderContext for InsertRenderContexts {
    fn default_values_insert_part(&self) -> &str {
        match self {
            InsertRenderContexts::Default => " VALUES (DEFAULT)",
            InsertRenderContexts::SqlServer => " DEFAULT VALUES",
        }
    }
}

/// Shared instance of the standard INSERT policy.
pub static DEFAULT_INSERT_RENDER_CONTEXT: InsertRenderContexts = InsertRenderContexts::Default;

/// Shared instance of the SQL Server INSERT policy.
pub static SQL_SERVER_INSERT_RENDER_CONTEXT: InsertRenderContexts = InsertRenderContexts::SqlServer;
