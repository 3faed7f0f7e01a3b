//! Convenience constructor for trees.
//!
//! There is no parser in this workspace; callers and tests build trees
//! through [`AstBuilder`], which owns an [`ExprArena`] and a
//! [`StringInterner`] and interns names on the way in.

use crate::ast::{
    Alt, Boxed, Decl, ExprKind, FieldUpdate, GuardedRhs, Module, Op, Rhs, Stmt, TypeKind,
};
use crate::{ExprArena, ExprId, StringInterner, TypeId};

/// Owns an arena and interner while a tree is being built.
#[derive(Default)]
pub struct AstBuilder {
    arena: ExprArena,
    interner: StringInterner,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Give up ownership of the finished tree.
    pub fn finish(self) -> (ExprArena, StringInterner) {
        (self.arena, self.interner)
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(kind)
    }

    // -- Leaves --

    pub fn var(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Var(name))
    }

    pub fn con(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Con(name))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.expr(ExprKind::Int(value))
    }

    pub fn frac(&mut self, text: &str) -> ExprId {
        let text = self.interner.intern(text);
        self.expr(ExprKind::Frac(text))
    }

    pub fn char(&mut self, c: char) -> ExprId {
        self.expr(ExprKind::Char(c))
    }

    pub fn string(&mut self, s: &str) -> ExprId {
        let s = self.interner.intern(s);
        self.expr(ExprKind::String(s))
    }

    pub fn var_quote(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::VarQuote(name))
    }

    pub fn typ_quote(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::TypQuote(name))
    }

    pub fn wildcard(&mut self) -> ExprId {
        self.expr(ExprKind::Wildcard)
    }

    // -- Compound expressions --

    /// Curried application `func a1 a2 ...`, nested left to right.
    pub fn app(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        args.iter()
            .fold(func, |func, &arg| self.expr(ExprKind::App { func, arg }))
    }

    pub fn op(&mut self, symbol: &str) -> Op {
        Op::symbol(self.interner.intern(symbol))
    }

    pub fn backtick_op(&mut self, name: &str) -> Op {
        Op::backtick(self.interner.intern(name))
    }

    pub fn infix(&mut self, left: ExprId, op: &str, right: ExprId) -> ExprId {
        let op = self.op(op);
        self.expr(ExprKind::InfixApp { left, op, right })
    }

    pub fn infix_backtick(&mut self, left: ExprId, name: &str, right: ExprId) -> ExprId {
        let op = self.backtick_op(name);
        self.expr(ExprKind::InfixApp { left, op, right })
    }

    pub fn neg(&mut self, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Neg(operand))
    }

    pub fn left_section(&mut self, operand: ExprId, op: &str) -> ExprId {
        let op = self.op(op);
        self.expr(ExprKind::LeftSection { operand, op })
    }

    pub fn right_section(&mut self, op: &str, operand: ExprId) -> ExprId {
        let op = self.op(op);
        self.expr(ExprKind::RightSection { op, operand })
    }

    pub fn lambda(&mut self, params: &[ExprId], body: ExprId) -> ExprId {
        let params = self.arena.alloc_expr_list(params);
        self.expr(ExprKind::Lambda { params, body })
    }

    pub fn tuple(&mut self, items: &[ExprId]) -> ExprId {
        let items = self.arena.alloc_expr_list(items);
        self.expr(ExprKind::Tuple {
            boxed: Boxed::Boxed,
            items,
        })
    }

    pub fn unboxed_tuple(&mut self, items: &[ExprId]) -> ExprId {
        let items = self.arena.alloc_expr_list(items);
        self.expr(ExprKind::Tuple {
            boxed: Boxed::Unboxed,
            items,
        })
    }

    pub fn list(&mut self, items: &[ExprId]) -> ExprId {
        let items = self.arena.alloc_expr_list(items);
        self.expr(ExprKind::List(items))
    }

    pub fn paren(&mut self, inner: ExprId) -> ExprId {
        self.expr(ExprKind::Paren(inner))
    }

    pub fn if_then_else(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    ) -> ExprId {
        self.expr(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn case(&mut self, scrutinee: ExprId, alts: &[Alt]) -> ExprId {
        let alts = self.arena.alloc_alts(alts);
        self.expr(ExprKind::Case { scrutinee, alts })
    }

    pub fn do_block(&mut self, stmts: &[Stmt]) -> ExprId {
        let stmts = self.arena.alloc_stmts(stmts);
        self.expr(ExprKind::Do(stmts))
    }

    pub fn let_in(&mut self, decls: &[Decl], body: ExprId) -> ExprId {
        let decls = self.arena.alloc_decls(decls);
        self.expr(ExprKind::Let { decls, body })
    }

    fn field_updates(&mut self, fields: &[(&str, ExprId)]) -> Vec<FieldUpdate> {
        fields
            .iter()
            .map(|&(name, value)| FieldUpdate {
                name: self.interner.intern(name),
                value,
            })
            .collect()
    }

    pub fn record(&mut self, con: &str, fields: &[(&str, ExprId)]) -> ExprId {
        let con = self.interner.intern(con);
        let fields = self.field_updates(fields);
        let fields = self.arena.alloc_field_updates(&fields);
        self.expr(ExprKind::RecordConstruct { con, fields })
    }

    pub fn record_update(&mut self, record: ExprId, fields: &[(&str, ExprId)]) -> ExprId {
        let fields = self.field_updates(fields);
        let fields = self.arena.alloc_field_updates(&fields);
        self.expr(ExprKind::RecordUpdate { record, fields })
    }

    pub fn annotate(&mut self, expr: ExprId, ty: TypeId) -> ExprId {
        self.expr(ExprKind::TypeAnnotation { expr, ty })
    }

    // -- Right-hand sides, alternatives, statements --

    /// Guarded branches, each a list of guards and a body.
    pub fn guarded(&mut self, branches: &[(&[ExprId], ExprId)]) -> Rhs {
        let rhss: Vec<GuardedRhs> = branches
            .iter()
            .map(|&(guards, body)| GuardedRhs {
                guards: self.arena.alloc_expr_list(guards),
                body,
            })
            .collect();
        Rhs::Guarded(self.arena.alloc_guarded_rhss(&rhss))
    }

    pub fn let_stmt(&mut self, decls: &[Decl]) -> Stmt {
        Stmt::Let(self.arena.alloc_decls(decls))
    }

    // -- Types --

    fn ty(&mut self, kind: TypeKind) -> TypeId {
        self.arena.alloc_type(kind)
    }

    pub fn tcon(&mut self, name: &str) -> TypeId {
        let name = self.interner.intern(name);
        self.ty(TypeKind::Con(name))
    }

    pub fn tvar(&mut self, name: &str) -> TypeId {
        let name = self.interner.intern(name);
        self.ty(TypeKind::Var(name))
    }

    /// Curried type application `func a1 a2 ...`.
    pub fn tapp(&mut self, func: TypeId, args: &[TypeId]) -> TypeId {
        args.iter()
            .fold(func, |func, &arg| self.ty(TypeKind::App { func, arg }))
    }

    /// Function type `c1 -> c2 -> ... -> cn`, right-nested.
    ///
    /// A single component is returned unchanged.
    pub fn tfun(&mut self, components: &[TypeId]) -> TypeId {
        let Some((&last, init)) = components.split_last() else {
            return self.ttuple(&[]);
        };
        init.iter()
            .rev()
            .fold(last, |result, &arg| self.ty(TypeKind::Fun { arg, result }))
    }

    pub fn ttuple(&mut self, items: &[TypeId]) -> TypeId {
        let items = self.arena.alloc_type_list(items);
        self.ty(TypeKind::Tuple {
            boxed: Boxed::Boxed,
            items,
        })
    }

    pub fn tlist(&mut self, elem: TypeId) -> TypeId {
        self.ty(TypeKind::List(elem))
    }

    pub fn tparen(&mut self, inner: TypeId) -> TypeId {
        self.ty(TypeKind::Paren(inner))
    }

    pub fn forall(&mut self, binders: &[&str], context: &[TypeId], body: TypeId) -> TypeId {
        let binders: Vec<_> = binders.iter().map(|b| self.interner.intern(b)).collect();
        let binders = self.arena.alloc_name_list(&binders);
        let context = self.arena.alloc_type_list(context);
        self.ty(TypeKind::Forall {
            binders,
            context,
            body,
        })
    }

    // -- Declarations --

    pub fn type_sig(&mut self, names: &[&str], ty: TypeId) -> Decl {
        let names: Vec<_> = names.iter().map(|n| self.interner.intern(n)).collect();
        Decl::TypeSig {
            names: self.arena.alloc_name_list(&names),
            ty,
        }
    }

    pub fn fun_bind(&mut self, name: &str, params: &[ExprId], rhs: Rhs) -> Decl {
        Decl::FunBind {
            name: self.interner.intern(name),
            params: self.arena.alloc_expr_list(params),
            rhs,
        }
    }

    pub fn module(&mut self, decls: &[Decl]) -> Module {
        Module {
            decls: self.arena.alloc_decls(decls),
        }
    }
}
