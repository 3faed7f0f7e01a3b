//! Tuples, lists and record braces.
//!
//! All three try a comma-joined single line first and fall back to one
//! element per line with a leading comma under the opening delimiter.

use hask_ir::{Boxed, ExprRange, FieldUpdateRange};
use tracing::trace;

use super::Formatter;
use crate::predicates::trial;
use crate::printer::Sandbox;

impl Formatter<'_> {
    /// `(a, b, c)` or `(# a, b #)`
    pub(super) fn tuple(&mut self, boxed: Boxed, items: ExprRange) {
        let arena = self.arena;
        let items = arena.get_expr_list(items);
        if items.is_empty() {
            self.write(boxed.empty());
            return;
        }
        let config = *self.config();
        self.depend(
            |f| f.write(boxed.open()),
            |f| {
                let inline = trial(f, |f| f.inter(", ", items));
                if inline.is_single_line() && !inline.overflows(&config) {
                    trace!("tuple: inline");
                    f.commit(inline.into_candidate());
                } else {
                    trace!("tuple: stacked");
                    f.prefixed_lined(",", items);
                }
                f.write(boxed.close());
            },
        );
    }

    /// `[a, b, c]`
    pub(super) fn list(&mut self, items: ExprRange) {
        if items.is_empty() {
            self.write("[]");
            return;
        }
        let arena = self.arena;
        let items = arena.get_expr_list(items);
        let config = *self.config();
        let inline = trial(self, |f| {
            f.depend(
                |f| f.write("["),
                |f| {
                    f.inter(", ", items);
                    f.write("]");
                },
            );
        });
        if inline.is_single_line() && !inline.overflows(&config) {
            trace!("list: inline");
            self.commit(inline.into_candidate());
            return;
        }

        trace!("list: stacked");
        self.depend(
            |f| f.write("["),
            |f| {
                f.prefixed_lined(",", items);
                f.write("]");
            },
        );
    }

    /// `{a = x, b = y}` after a record constructor or expression.
    pub(super) fn record_fields(&mut self, fields: FieldUpdateRange) {
        let arena = self.arena;
        let fields = arena.get_field_updates(fields);
        let config = *self.config();
        self.depend(
            |f| f.write("{"),
            |f| {
                let inline = trial(f, |f| f.inter_with(", ", fields, Self::field_update));
                if inline.is_single_line() && !inline.overflows(&config) {
                    trace!("record: inline");
                    f.commit(inline.into_candidate());
                } else {
                    trace!("record: stacked");
                    f.prefixed_lined_with(",", fields, Self::field_update);
                }
                f.write("}");
            },
        );
    }
}
