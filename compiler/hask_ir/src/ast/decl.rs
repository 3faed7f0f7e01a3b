//! Declarations, right-hand sides and case alternatives.

use super::ranges::{DeclRange, ExprRange, GuardedRhsRange, NameRange};
use crate::{ExprId, Name, TypeId};

/// Top-level or `let`-bound declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    /// `a, b :: T`
    TypeSig { names: NameRange, ty: TypeId },

    /// One equation of a function: `name p1 p2 = rhs`
    FunBind {
        name: Name,
        params: ExprRange,
        rhs: Rhs,
    },

    /// Pattern binding: `(a, b) = rhs`
    PatBind { pat: ExprId, rhs: Rhs },
}

/// Right-hand side of a binding or alternative.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rhs {
    /// `= e` / `-> e`
    Plain(ExprId),
    /// One or more `| guards = e` branches
    Guarded(GuardedRhsRange),
}

/// `| g1, g2 = body`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GuardedRhs {
    pub guards: ExprRange,
    pub body: ExprId,
}

/// Case alternative: `pat -> rhs`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alt {
    pub pat: ExprId,
    pub rhs: Rhs,
}

/// A module is an ordered list of declarations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub decls: DeclRange,
}
