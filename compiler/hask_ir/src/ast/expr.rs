//! Expression Types
//!
//! All children are indices into [`ExprArena`](crate::ExprArena), never boxes.

use super::ranges::{AltRange, DeclRange, ExprRange, FieldUpdateRange, StmtRange};
use crate::{ExprId, Name, TypeId};

/// How an infix operator is spelled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpKind {
    /// Symbolic operator: `+`, `>>=`, `<$>`
    Symbol,
    /// Identifier in backticks: `` `div` ``
    Backtick,
}

/// An operator in infix position or inside a section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Op {
    pub name: Name,
    pub kind: OpKind,
}

impl Op {
    pub fn symbol(name: Name) -> Self {
        Op {
            name,
            kind: OpKind::Symbol,
        }
    }

    pub fn backtick(name: Name) -> Self {
        Op {
            name,
            kind: OpKind::Backtick,
        }
    }
}

/// Delimiters of a tuple: `( )` or `(# #)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Boxed {
    #[default]
    Boxed,
    Unboxed,
}

impl Boxed {
    /// Opening delimiter.
    pub fn open(self) -> &'static str {
        match self {
            Boxed::Boxed => "(",
            Boxed::Unboxed => "(# ",
        }
    }

    /// Closing delimiter.
    pub fn close(self) -> &'static str {
        match self {
            Boxed::Boxed => ")",
            Boxed::Unboxed => " #)",
        }
    }

    /// A tuple with no items.
    pub fn empty(self) -> &'static str {
        match self {
            Boxed::Boxed => "()",
            Boxed::Unboxed => "(# #)",
        }
    }
}

/// Expression variants.
///
/// Patterns share this representation: a pattern is an expression built from
/// variables, constructors, literals, wildcards, tuples, lists and
/// applications.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Variable reference: `x`, `foldr`, `(+)`
    Var(Name),

    /// Constructor reference: `Just`, `True`
    Con(Name),

    /// Integer literal
    Int(i64),

    /// Fractional literal, kept as its source text: `3.14`
    Frac(Name),

    /// Character literal
    Char(char),

    /// String literal (unescaped contents)
    String(Name),

    /// Template Haskell name quote: `'foo`
    VarQuote(Name),

    /// Template Haskell type quote: `''Foo`
    TypQuote(Name),

    /// Wildcard pattern: `_`
    Wildcard,

    /// Single-argument application: `f x`. Curried calls nest on `func`.
    App { func: ExprId, arg: ExprId },

    /// Infix application: `a + b`
    InfixApp {
        left: ExprId,
        op: Op,
        right: ExprId,
    },

    /// Negation: `-x`
    Neg(ExprId),

    /// Left section: `(x +)`
    LeftSection { operand: ExprId, op: Op },

    /// Right section: `(+ x)`
    RightSection { op: Op, operand: ExprId },

    /// Lambda: `\x y -> body`
    Lambda { params: ExprRange, body: ExprId },

    /// Tuple: `(a, b)` or `(# a, b #)`
    Tuple { boxed: Boxed, items: ExprRange },

    /// List literal: `[a, b]`
    List(ExprRange),

    /// Parenthesised expression
    Paren(ExprId),

    /// Conditional: `if c then a else b`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Case expression: `case e of alts`
    Case { scrutinee: ExprId, alts: AltRange },

    /// Do block
    Do(StmtRange),

    /// Let expression: `let decls in body`
    Let { decls: DeclRange, body: ExprId },

    /// Record construction: `Foo {a = 1}`
    RecordConstruct { con: Name, fields: FieldUpdateRange },

    /// Record update: `r {a = 1}`
    RecordUpdate {
        record: ExprId,
        fields: FieldUpdateRange,
    },

    /// Type annotation: `e :: T`
    TypeAnnotation { expr: ExprId, ty: TypeId },
}

impl ExprKind {
    /// Variable or constructor reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, ExprKind::Var(_) | ExprKind::Con(_))
    }

    /// Literal of any kind.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ExprKind::Int(_) | ExprKind::Frac(_) | ExprKind::Char(_) | ExprKind::String(_)
        )
    }
}

/// `name = value` inside record braces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldUpdate {
    pub name: Name,
    pub value: ExprId,
}

/// Statement in a `do` block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// `pat <- expr`
    Bind { pat: ExprId, expr: ExprId },
    /// Bare expression statement
    Expr(ExprId),
    /// `let decls`
    Let(DeclRange),
}
