//! Infix operator application.

use hask_ir::{ExprId, Op};
use tracing::trace;

use super::Formatter;
use crate::predicates::{is_flat, trial};
use crate::printer::Sandbox;

impl Formatter<'_> {
    /// Render `left op right`.
    ///
    /// A flat application that does not overflow stays on one line with the
    /// right operand dependent on the operator. Otherwise the line breaks
    /// after the operator and the right operand starts at
    /// `continuation + indent` when a continuation column is given (do
    /// statements pass their own column so the operand cannot be read as a
    /// new statement), or at the current indentation.
    pub(super) fn infix_app(
        &mut self,
        whole: ExprId,
        left: ExprId,
        op: Op,
        right: ExprId,
        continuation: Option<usize>,
    ) {
        let config = *self.config();
        if is_flat(self.arena, whole) {
            let attempt = trial(self, |f| f.infix_dependent(left, op, right));
            if !attempt.overflows(&config) {
                trace!("infix: dependent");
                self.commit(attempt.into_candidate());
                return;
            }
        }

        trace!(?continuation, "infix: broken after operator");
        self.expr(left);
        self.space();
        self.write_op(op);
        self.newline();
        match continuation {
            Some(column) => {
                let indent = self.printer.indent_width();
                self.with_indent_at(column + indent, |f| f.expr(right));
            }
            None => self.expr(right),
        }
    }

    fn infix_dependent(&mut self, left: ExprId, op: Op, right: ExprId) {
        self.depend(
            |f| {
                f.expr(left);
                f.space();
                f.write_op(op);
                f.space();
            },
            |f| f.expr(right),
        );
    }
}
