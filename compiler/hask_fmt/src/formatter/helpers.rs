//! Separator combinators and operator spelling.

use hask_ir::{ExprId, Op, OpKind};

use super::Formatter;
use crate::printer::Sandbox;

/// Negative indentation shift matching the width of `prefix`.
fn dedent_for(prefix: &str) -> isize {
    -isize::try_from(prefix.chars().count()).unwrap_or(isize::MAX)
}

impl Formatter<'_> {
    /// Render items separated by `sep`.
    pub(super) fn inter_with<T: Copy>(
        &mut self,
        sep: &str,
        items: &[T],
        mut render: impl FnMut(&mut Self, T),
    ) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            render(self, item);
        }
    }

    /// Render expressions separated by `sep`.
    pub(super) fn inter(&mut self, sep: &str, items: &[ExprId]) {
        self.inter_with(sep, items, Self::expr);
    }

    /// Render expressions separated by single spaces.
    pub(super) fn spaced(&mut self, items: &[ExprId]) {
        self.inter(" ", items);
    }

    /// Render items one per line at the current indentation.
    pub(super) fn lined_with<T: Copy>(
        &mut self,
        items: &[T],
        mut render: impl FnMut(&mut Self, T),
    ) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            render(self, item);
        }
    }

    pub(super) fn lined(&mut self, items: &[ExprId]) {
        self.lined_with(items, Self::expr);
    }

    /// Render items one per line; every line after the first starts with
    /// `prefix`, shifted left by its width so the items stay aligned.
    pub(super) fn prefixed_lined_with<T: Copy>(
        &mut self,
        prefix: &str,
        items: &[T],
        render: impl Fn(&mut Self, T),
    ) {
        let Some((&first, rest)) = items.split_first() else {
            return;
        };
        render(self, first);
        self.indented(dedent_for(prefix), |f| {
            for &item in rest {
                f.newline();
                f.depend(|f| f.write(prefix), |f| render(f, item));
            }
        });
    }

    pub(super) fn prefixed_lined(&mut self, prefix: &str, items: &[ExprId]) {
        self.prefixed_lined_with(prefix, items, Self::expr);
    }

    /// Operator in infix position: `+` or `` `div` ``.
    pub(super) fn write_op(&mut self, op: Op) {
        let name = self.lookup(op.name);
        match op.kind {
            OpKind::Symbol => self.write(name),
            OpKind::Backtick => {
                self.write("`");
                self.write(name);
                self.write("`");
            }
        }
    }
}
