//! Type expressions as they appear in signatures and annotations.

use super::expr::Boxed;
use super::ranges::{NameRange, TypeRange};
use crate::{Name, TypeId};

/// Type variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// Type constructor: `Int`, `Maybe`, `IO`
    Con(Name),

    /// Type variable: `a`
    Var(Name),

    /// Type application: `Maybe a`
    App { func: TypeId, arg: TypeId },

    /// Function arrow: `a -> b` (right-nested for longer chains)
    Fun { arg: TypeId, result: TypeId },

    /// Tuple type: `(a, b)`, `()` when empty
    Tuple { boxed: Boxed, items: TypeRange },

    /// List type: `[a]`
    List(TypeId),

    /// Parenthesised type
    Paren(TypeId),

    /// Quantified and/or qualified type: `forall a. (Show a) => body`.
    ///
    /// Empty `binders` means no explicit `forall`; empty `context` means no
    /// `=>`. Each context entry is an assertion such as `Show a`.
    Forall {
        binders: NameRange,
        context: TypeRange,
        body: TypeId,
    },
}
