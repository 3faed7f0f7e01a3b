//! Hask Formatter
//!
//! Speculative layout engine for Haskell-style expression trees.
//!
//! # Architecture
//!
//! Layout rules render candidate layouts against a sandboxed copy of the
//! printer state, measure the result, and then commit one layout or fall
//! back to another:
//!
//! 1. **Trial**: render a subtree into a private snapshot of the position
//! 2. **Measure**: ask whether it stayed on one line, overflowed, or is
//!    short or small
//! 3. **Commit**: adopt the accepted trial's text and position, or write
//!    the broken layout directly
//!
//! # Modules
//!
//! - [`config`]: layout thresholds and their validation
//! - [`printer`]: text sink, sandbox and commit
//! - [`predicates`]: structural and measuring layout predicates
//! - [`formatter`]: per-shape layout rules
//!
//! # Example
//!
//! ```
//! use hask_ir::AstBuilder;
//!
//! let mut b = AstBuilder::new();
//! let f = b.var("f");
//! let x = b.var("x");
//! let y = b.var("y");
//! let call = b.app(f, &[x, y]);
//! let (arena, interner) = b.finish();
//!
//! assert_eq!(hask_fmt::format_expr(&arena, &interner, call), "f x y");
//! ```

pub mod config;
pub mod formatter;
pub mod predicates;
pub mod printer;

use std::sync::Once;

use hask_ir::{Decl, ExprArena, ExprId, Module, StringInterner};

pub use config::{
    ConfigError, FormatConfig, COLUMN_LIMIT, INDENT_SPACES, OVERFLOW_MARGIN, SHORT_NAME,
    SMALL_COLUMN_LIMIT,
};
pub use formatter::Formatter;
pub use predicates::{is_flat, Trial};
pub use printer::{Candidate, Position, PrintState, Printer, Sandbox};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. Layout decisions are logged at `trace` level under the
/// `hask_fmt` target.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Format an expression with the default config.
#[tracing::instrument(level = "debug", skip_all)]
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut formatter = Formatter::new(arena, interner);
    formatter.expr(id);
    formatter.finish()
}

/// Format an expression with a custom config.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the config is rejected by
/// [`FormatConfig::validate`].
#[tracing::instrument(level = "debug", skip_all, fields(column_limit = config.column_limit))]
pub fn format_expr_with_config(
    arena: &ExprArena,
    interner: &StringInterner,
    id: ExprId,
    config: FormatConfig,
) -> Result<String, ConfigError> {
    let mut formatter = Formatter::with_config(arena, interner, config.validate()?);
    formatter.expr(id);
    Ok(formatter.finish())
}

/// Format a single declaration with the default config.
#[tracing::instrument(level = "debug", skip_all)]
pub fn format_decl(arena: &ExprArena, interner: &StringInterner, decl: &Decl) -> String {
    let mut formatter = Formatter::new(arena, interner);
    formatter.decl(decl);
    formatter.finish()
}

/// Format a module with the default config.
///
/// The result ends with exactly one newline.
#[tracing::instrument(level = "debug", skip_all)]
pub fn format_module(arena: &ExprArena, interner: &StringInterner, module: &Module) -> String {
    let mut formatter = Formatter::new(arena, interner);
    formatter.module(module);
    formatter.finalize()
}

/// Format a module with a custom config.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the config is rejected by
/// [`FormatConfig::validate`].
#[tracing::instrument(level = "debug", skip_all, fields(column_limit = config.column_limit))]
pub fn format_module_with_config(
    arena: &ExprArena,
    interner: &StringInterner,
    module: &Module,
    config: FormatConfig,
) -> Result<String, ConfigError> {
    let mut formatter = Formatter::with_config(arena, interner, config.validate()?);
    formatter.module(module);
    Ok(formatter.finalize())
}
