//! Expression arena.
//!
//! Struct-of-vectors storage for every node kind. Expressions and types are
//! addressed by ID; child lists are stored flattened and addressed by range.
//!
//! # Index Spaces
//!
//! - `exprs` / `types`: indexed by [`ExprId`] / [`TypeId`]
//! - `expr_lists`, `type_lists`, `name_lists`: flat ID lists for ranges
//! - `decls`, `stmts`, `alts`, `guarded_rhss`, `field_updates`: stored inline,
//!   addressed by their range types

use crate::ast::{
    Alt, AltRange, Decl, DeclRange, ExprKind, ExprRange, FieldUpdate, FieldUpdateRange,
    GuardedRhs, GuardedRhsRange, NameRange, Stmt, StmtRange, TypeKind, TypeRange,
};
use crate::{ExprId, Name, TypeId};

/// Convert a length to `u32`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a length to `u16`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

/// Append `items` to `storage`, returning `(start, len)` for a range handle.
fn push_slice<T: Copy>(storage: &mut Vec<T>, items: &[T], what: &str) -> (u32, u16) {
    let start = to_u32(storage.len(), what);
    storage.extend_from_slice(items);
    (start, to_u16(items.len(), what))
}

/// Arena owning an immutable tree.
///
/// Nodes are appended and never mutated; the formatter only reads.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    types: Vec<TypeKind>,
    expr_lists: Vec<ExprId>,
    type_lists: Vec<TypeId>,
    name_lists: Vec<Name>,
    decls: Vec<Decl>,
    stmts: Vec<Stmt>,
    alts: Vec<Alt>,
    guarded_rhss: Vec<GuardedRhs>,
    field_updates: Vec<FieldUpdate>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(kind);
        id
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Allocate a type, returning its ID.
    pub fn alloc_type(&mut self, kind: TypeKind) -> TypeId {
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(kind);
        id
    }

    #[inline]
    pub fn get_type(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn alloc_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.expr_lists, ids, "expression lists");
        ExprRange::new(start, len)
    }

    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    pub fn alloc_type_list(&mut self, ids: &[TypeId]) -> TypeRange {
        if ids.is_empty() {
            return TypeRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.type_lists, ids, "type lists");
        TypeRange::new(start, len)
    }

    pub fn get_type_list(&self, range: TypeRange) -> &[TypeId] {
        &self.type_lists[range.bounds()]
    }

    pub fn alloc_name_list(&mut self, names: &[Name]) -> NameRange {
        if names.is_empty() {
            return NameRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.name_lists, names, "name lists");
        NameRange::new(start, len)
    }

    pub fn get_name_list(&self, range: NameRange) -> &[Name] {
        &self.name_lists[range.bounds()]
    }

    pub fn alloc_decls(&mut self, decls: &[Decl]) -> DeclRange {
        if decls.is_empty() {
            return DeclRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.decls, decls, "declarations");
        DeclRange::new(start, len)
    }

    pub fn get_decls(&self, range: DeclRange) -> &[Decl] {
        &self.decls[range.bounds()]
    }

    pub fn alloc_stmts(&mut self, stmts: &[Stmt]) -> StmtRange {
        if stmts.is_empty() {
            return StmtRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.stmts, stmts, "statements");
        StmtRange::new(start, len)
    }

    pub fn get_stmts(&self, range: StmtRange) -> &[Stmt] {
        &self.stmts[range.bounds()]
    }

    pub fn alloc_alts(&mut self, alts: &[Alt]) -> AltRange {
        if alts.is_empty() {
            return AltRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.alts, alts, "alternatives");
        AltRange::new(start, len)
    }

    pub fn get_alts(&self, range: AltRange) -> &[Alt] {
        &self.alts[range.bounds()]
    }

    pub fn alloc_guarded_rhss(&mut self, rhss: &[GuardedRhs]) -> GuardedRhsRange {
        if rhss.is_empty() {
            return GuardedRhsRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.guarded_rhss, rhss, "guarded right-hand sides");
        GuardedRhsRange::new(start, len)
    }

    pub fn get_guarded_rhss(&self, range: GuardedRhsRange) -> &[GuardedRhs] {
        &self.guarded_rhss[range.bounds()]
    }

    pub fn alloc_field_updates(&mut self, fields: &[FieldUpdate]) -> FieldUpdateRange {
        if fields.is_empty() {
            return FieldUpdateRange::EMPTY;
        }
        let (start, len) = push_slice(&mut self.field_updates, fields, "field updates");
        FieldUpdateRange::new(start, len)
    }

    pub fn get_field_updates(&self, range: FieldUpdateRange) -> &[FieldUpdate] {
        &self.field_updates[range.bounds()]
    }
}
