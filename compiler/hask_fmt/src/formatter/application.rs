//! Function Application
//!
//! Curried applications are flattened to a head and an argument list. The
//! head is rendered once in a sandbox to learn whether it is short, then
//! committed; the arguments either follow on the same line, hang aligned
//! after the head, or drop to an indented block below it.

use hask_ir::{ExprId, ExprKind};
use smallvec::SmallVec;
use tracing::trace;

use super::Formatter;
use crate::predicates::{is_flat, trial};
use crate::printer::Sandbox;

type Args = SmallVec<[ExprId; 4]>;

impl Formatter<'_> {
    /// Split `f a1 a2 ... an` into `f` and `[a1, ..., an]`.
    fn flatten_app(&self, id: ExprId) -> (ExprId, Args) {
        let mut args = Args::new();
        let mut head = id;
        while let ExprKind::App { func, arg } = *self.arena.get_expr(head) {
            args.push(arg);
            head = func;
        }
        args.reverse();
        (head, args)
    }

    pub(super) fn application(&mut self, id: ExprId) {
        let config = *self.config();
        let (head, args) = self.flatten_app(id);
        let orig = self.printer.indent();

        let head_trial = trial(self, |f| f.expr(head));
        let short = head_trial.is_short(&config);
        self.commit(head_trial.into_candidate());
        let args_column = self.printer.column() + 1;

        let non_flat = args.iter().filter(|&&arg| !is_flat(self.arena, arg)).count();
        let flatish = non_flat < 2;
        if (short && flatish) || non_flat == 0 {
            let attempt = trial(self, |f| {
                f.space();
                f.with_indent_at(args_column, |f| f.spaced(&args));
            });
            if attempt.is_single_line() && !attempt.overflows(&config) {
                trace!(short, "application: single line");
                self.commit(attempt.into_candidate());
                return;
            }
        }

        self.multi_line_application(orig, args_column, &args, short);
    }

    fn multi_line_application(
        &mut self,
        orig: usize,
        args_column: usize,
        args: &[ExprId],
        short: bool,
    ) {
        if short {
            trace!("application: hanging after short head");
            self.space();
            self.with_indent_at(args_column, |f| f.lined(args));
            return;
        }

        let (all_fit, hanging) = self.sandbox(|f| {
            f.space();
            f.with_indent_at(args_column, |f| f.lined_checked(args))
        });
        if all_fit {
            trace!("application: hanging after long head");
            self.commit(hanging);
            return;
        }

        trace!("application: indented block");
        self.newline();
        let indent = self.printer.indent_width();
        self.with_indent_at(orig + indent, |f| f.lined(args));
    }

    /// Render arguments one per line, reporting whether each stayed on a
    /// single line. The tolerant limit lets a slightly wide argument still
    /// hang after the head.
    fn lined_checked(&mut self, args: &[ExprId]) -> bool {
        let config = *self.config();
        let mut all_fit = true;
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            let attempt = trial(self, |f| f.expr(arg));
            all_fit &= attempt.is_single_line() && !attempt.overflows_max(&config);
            self.commit(attempt.into_candidate());
        }
        all_fit
    }
}
