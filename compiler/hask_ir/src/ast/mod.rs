//! Flat AST types using arena allocation.
//!
//! # Module Structure
//!
//! - `expr`: expressions, operators, statements, field updates
//! - `types`: type expressions
//! - `decl`: declarations, right-hand sides, alternatives, modules
//! - `ranges`: arena range types for list children

mod decl;
mod expr;
mod ranges;
mod types;

pub use decl::{Alt, Decl, GuardedRhs, Module, Rhs};
pub use expr::{Boxed, ExprKind, FieldUpdate, Op, OpKind, Stmt};
pub use ranges::{
    AltRange, DeclRange, ExprRange, FieldUpdateRange, GuardedRhsRange, NameRange, StmtRange,
    TypeRange,
};
pub use types::TypeKind;
