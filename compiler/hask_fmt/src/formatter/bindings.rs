//! Bindings
//!
//! Everything that hangs a body off a separator: lambdas, right-hand sides,
//! guarded branches, case alternatives and record field updates. All of
//! them go through [`Formatter::dependent_or_newline`].

use hask_ir::{Alt, ExprId, ExprRange, FieldUpdate, GuardedRhs, Rhs};
use tracing::trace;

use super::Formatter;
use crate::predicates::{is_flat, trial};
use crate::printer::Sandbox;

impl Formatter<'_> {
    /// Render `left` and then `node`, either dependently on the same line or
    /// after a newline at the current indentation.
    ///
    /// Flat nodes are always kept dependent without a trial. Other nodes
    /// stay on the line only if the dependent rendering is small.
    pub(super) fn dependent_or_newline(
        &mut self,
        left: impl Fn(&mut Self),
        node: ExprId,
        render: impl Fn(&mut Self, ExprId),
    ) {
        if is_flat(self.arena, node) {
            self.depend(&left, |f| render(f, node));
            return;
        }

        let config = *self.config();
        let attempt = trial(self, |f| f.depend(&left, |f| render(f, node)));
        if attempt.is_small(&config) {
            trace!("dependent: small");
            self.commit(attempt.into_candidate());
            return;
        }

        trace!("dependent: newline");
        left(self);
        self.newline();
        render(self, node);
    }

    /// `\p1 p2 -> body`
    pub(super) fn lambda(&mut self, params: ExprRange, body: ExprId) {
        let arena = self.arena;
        self.depend(
            |f| f.write("\\"),
            |f| {
                f.spaced(arena.get_expr_list(params));
                f.dependent_or_newline(
                    |f| f.write(" -> "),
                    body,
                    |f, body| f.indented(1, |f| f.expr(body)),
                );
            },
        );
    }

    /// Right-hand side of a binding: ` = body` or guarded branches.
    pub(super) fn rhs(&mut self, rhs: Rhs) {
        self.rhs_with(rhs, " = ");
    }

    /// Case alternative: `pat -> body` or `pat` followed by guarded branches.
    pub(super) fn alt(&mut self, alt: Alt) {
        self.expr(alt.pat);
        self.rhs_with(alt.rhs, " -> ");
    }

    fn rhs_with(&mut self, rhs: Rhs, sep: &str) {
        let indent = self.printer.indent_width();
        match rhs {
            Rhs::Plain(body) => self.indented_by(indent, |f| {
                f.dependent_or_newline(|f| f.write(sep), body, Self::expr);
            }),
            Rhs::Guarded(branches) => {
                let arena = self.arena;
                self.indented_by(indent, |f| {
                    for &branch in arena.get_guarded_rhss(branches) {
                        f.newline();
                        f.guarded_rhs(branch, sep);
                    }
                });
            }
        }
    }

    /// `| g1` / `, g2` / `sep body`
    fn guarded_rhs(&mut self, branch: GuardedRhs, sep: &str) {
        let arena = self.arena;
        self.write("|");
        self.indented(1, |f| {
            f.prefixed_lined_with(",", arena.get_expr_list(branch.guards), |f, guard| {
                f.space();
                f.expr(guard);
            });
            f.dependent_or_newline(
                |f| f.write(sep),
                branch.body,
                |f, body| f.indented(1, |f| f.expr(body)),
            );
        });
    }

    /// `name = value` inside record braces. A broken value starts at the
    /// field's own column.
    pub(super) fn field_update(&mut self, field: FieldUpdate) {
        self.write_name(field.name);
        self.dependent_or_newline(|f| f.write(" = "), field.value, Self::expr);
    }
}
