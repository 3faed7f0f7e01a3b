//! Hask IR - immutable trees for the layout engine
//!
//! This crate contains the data structures the formatter reads:
//! - Names for interned identifiers
//! - Flat, arena-allocated expressions, types and declarations
//! - [`AstBuilder`] for constructing trees without a parser
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Read-only after construction**: nothing in the formatter mutates a tree

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{
    Alt, AltRange, Boxed, Decl, DeclRange, ExprKind, ExprRange, FieldUpdate, FieldUpdateRange,
    GuardedRhs, GuardedRhsRange, Module, NameRange, Op, OpKind, Rhs, Stmt, StmtRange, TypeKind,
    TypeRange,
};
pub use builder::AstBuilder;
pub use expr_id::{ExprId, TypeId};
pub use interner::StringInterner;
pub use name::Name;
