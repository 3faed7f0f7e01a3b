//! Type Signatures
//!
//! `names :: type`, with the type dependent on the column after `::`. An
//! explicit quantifier and a class context each go on their own line, with
//! `=>` aligned under `::`. The remaining type stays inline when small and
//! otherwise breaks into its arrow components, with `->` aligned the same way.

use hask_ir::{NameRange, TypeId, TypeKind};
use smallvec::SmallVec;
use tracing::trace;

use super::Formatter;
use crate::predicates::trial;
use crate::printer::Sandbox;

/// Width of `=> ` and `-> `.
const ARROW_WIDTH: isize = 3;

impl Formatter<'_> {
    pub(super) fn type_sig(&mut self, names: NameRange, ty: TypeId) {
        let arena = self.arena;
        self.depend(
            |f| {
                f.inter_with(", ", arena.get_name_list(names), Self::write_name);
                f.write(" :: ");
            },
            |f| f.decl_type(ty),
        );
    }

    /// Quantifier and context always get their own lines; only the type
    /// after them may stay inline.
    fn decl_type(&mut self, ty: TypeId) {
        let arena = self.arena;
        let TypeKind::Forall {
            binders,
            context,
            body,
        } = *arena.get_type(ty)
        else {
            self.arrow_chain(ty);
            return;
        };

        trace!(
            binders = binders.len(),
            context = context.len(),
            "signature: broken quantified type"
        );
        if !binders.is_empty() {
            self.write("forall ");
            self.inter_with(" ", arena.get_name_list(binders), Self::write_name);
            self.write(".");
            self.newline();
        }
        if context.is_empty() {
            self.arrow_chain(body);
            return;
        }
        self.context(arena.get_type_list(context));
        self.newline();
        self.indented(-ARROW_WIDTH, |f| {
            f.depend(|f| f.write("=> "), |f| f.arrow_chain(body));
        });
    }

    /// The type after the quantifier and context: inline if small, else one
    /// arrow component per line.
    fn arrow_chain(&mut self, ty: TypeId) {
        let config = *self.config();
        let inline = trial(self, |f| f.ty(ty));
        if inline.is_small(&config) {
            trace!("signature: inline");
            self.commit(inline.into_candidate());
        } else {
            self.break_arrows(ty);
        }
    }

    fn break_arrows(&mut self, ty: TypeId) {
        let arena = self.arena;
        let mut components: SmallVec<[TypeId; 4]> = SmallVec::new();
        let mut rest = ty;
        while let TypeKind::Fun { arg, result } = *arena.get_type(rest) {
            components.push(arg);
            rest = result;
        }
        components.push(rest);
        trace!(components = components.len(), "signature: arrows");
        self.prefixed_lined_with("-> ", &components, Self::ty);
    }
}
