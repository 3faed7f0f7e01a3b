//! Layout predicates.
//!
//! [`is_flat`] looks only at a node's shape. Everything else measures a
//! sandboxed trial: [`trial`] runs a procedure and keeps the [`Candidate`]
//! together with where it started, so a rule can ask several questions of
//! one rendering and then commit it without rendering again.

use hask_ir::{ExprArena, ExprId, ExprKind};

use crate::config::FormatConfig;
use crate::printer::{Candidate, Sandbox};

/// Whether a node's shape guarantees a cheap single-line rendering.
///
/// Structural only: nothing is rendered.
pub fn is_flat(arena: &ExprArena, id: ExprId) -> bool {
    match *arena.get_expr(id) {
        ExprKind::Var(_)
        | ExprKind::Con(_)
        | ExprKind::Int(_)
        | ExprKind::Frac(_)
        | ExprKind::Char(_)
        | ExprKind::String(_)
        | ExprKind::VarQuote(_)
        | ExprKind::TypQuote(_)
        | ExprKind::Wildcard => true,
        ExprKind::List(items) => items.is_empty(),
        ExprKind::Lambda { body, .. } => is_flat(arena, body),
        ExprKind::App { func, arg } => {
            arena.get_expr(func).is_reference() && arena.get_expr(arg).is_reference()
        }
        ExprKind::InfixApp { left, right, .. } => is_flat(arena, left) && is_flat(arena, right),
        ExprKind::Neg(operand)
        | ExprKind::LeftSection { operand, .. }
        | ExprKind::RightSection { operand, .. }
        | ExprKind::Paren(operand) => is_flat(arena, operand),
        ExprKind::Tuple { .. }
        | ExprKind::If { .. }
        | ExprKind::Case { .. }
        | ExprKind::Do(_)
        | ExprKind::Let { .. }
        | ExprKind::RecordConstruct { .. }
        | ExprKind::RecordUpdate { .. }
        | ExprKind::TypeAnnotation { .. } => false,
    }
}

/// A sandboxed rendering and the position it started from.
#[derive(Debug)]
#[must_use = "a trial does nothing unless committed"]
pub struct Trial {
    start_line: usize,
    start_column: usize,
    candidate: Candidate,
}

impl Trial {
    /// No newline was emitted.
    pub fn is_single_line(&self) -> bool {
        self.candidate.line() == self.start_line
    }

    /// Ended past the column limit.
    pub fn overflows(&self, config: &FormatConfig) -> bool {
        self.candidate.column() > config.column_limit
    }

    /// Ended past the column limit plus the overflow margin.
    pub fn overflows_max(&self, config: &FormatConfig) -> bool {
        self.candidate.column() > config.tolerant_limit()
    }

    /// Single line and ended before the absolute small-column limit.
    pub fn is_small(&self, config: &FormatConfig) -> bool {
        self.is_single_line() && self.candidate.column() < config.small_column_limit
    }

    /// Single line and ended within the short-name delta of its start.
    pub fn is_short(&self, config: &FormatConfig) -> bool {
        self.is_single_line()
            && self.candidate.column() < self.start_column.saturating_add(config.short_name)
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn into_candidate(self) -> Candidate {
        self.candidate
    }
}

/// Run `procedure` in a sandbox and keep the result for measuring.
pub fn trial<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> Trial {
    let start_line = s.printer().line();
    let start_column = s.printer().effective_column();
    let ((), candidate) = s.sandbox(procedure);
    Trial {
        start_line,
        start_column,
        candidate,
    }
}

/// Whether `procedure` renders without emitting a newline.
pub fn is_single_liner<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> bool {
    trial(s, procedure).is_single_line()
}

/// Whether `procedure` ends past the column limit.
pub fn is_overflow<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> bool {
    let config = *s.printer().config();
    trial(s, procedure).overflows(&config)
}

/// Whether `procedure` ends past the column limit plus the overflow margin.
pub fn is_overflow_max<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> bool {
    let config = *s.printer().config();
    trial(s, procedure).overflows_max(&config)
}

/// Whether `procedure` stays on one line and ends before the small-column limit.
pub fn is_small<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> bool {
    let config = *s.printer().config();
    trial(s, procedure).is_small(&config)
}

/// Whether `procedure` stays on one line and ends within the short-name
/// delta of where it started.
pub fn is_short<S: Sandbox>(s: &mut S, procedure: impl FnOnce(&mut S)) -> bool {
    let config = *s.printer().config();
    trial(s, procedure).is_short(&config)
}

#[cfg(test)]
mod tests;
