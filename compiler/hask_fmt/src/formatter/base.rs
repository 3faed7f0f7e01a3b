//! Default Renderer
//!
//! Shapes without a dedicated layout rule: literals, references, parens,
//! sections, conditionals, `case`, `do`, `let`, records, annotations, and
//! every type form.

use hask_ir::{ExprId, ExprKind, Stmt, TypeId, TypeKind};
use tracing::trace;

use super::Formatter;
use crate::predicates::trial;
use crate::printer::Sandbox;

/// Escape a character for a Haskell char or string literal.
fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            out.push('\\');
            out.push_str(&u32::from(c).to_string());
        }
        c => out.push(c),
    }
}

fn char_literal(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    escape_into(&mut out, c, '\'');
    out.push('\'');
    out
}

fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        escape_into(&mut out, c, '"');
        // `\&` ends a numeric escape that a digit would otherwise extend.
        if c.is_control()
            && !matches!(c, '\n' | '\t' | '\r')
            && chars.peek().is_some_and(char::is_ascii_digit)
        {
            out.push_str("\\&");
        }
    }
    out.push('"');
    out
}

impl Formatter<'_> {
    pub(super) fn base_expr(&mut self, id: ExprId) {
        let arena = self.arena;
        match *arena.get_expr(id) {
            ExprKind::Var(name) | ExprKind::Con(name) | ExprKind::Frac(name) => {
                self.write_name(name);
            }
            ExprKind::Int(value) => self.write(&value.to_string()),
            ExprKind::Char(c) => self.write(&char_literal(c)),
            ExprKind::String(s) => {
                let text = string_literal(self.lookup(s));
                self.write(&text);
            }
            ExprKind::VarQuote(name) => {
                self.write("'");
                self.write_name(name);
            }
            ExprKind::TypQuote(name) => {
                self.write("''");
                self.write_name(name);
            }
            ExprKind::Wildcard => self.write("_"),
            ExprKind::Neg(operand) => {
                self.write("-");
                self.expr(operand);
            }
            ExprKind::Paren(inner) => self.depend(
                |f| f.write("("),
                |f| {
                    f.expr(inner);
                    f.write(")");
                },
            ),
            ExprKind::LeftSection { operand, op } => self.depend(
                |f| f.write("("),
                |f| {
                    f.expr(operand);
                    f.space();
                    f.write_op(op);
                    f.write(")");
                },
            ),
            ExprKind::RightSection { op, operand } => self.depend(
                |f| {
                    f.write("(");
                    f.write_op(op);
                    f.space();
                },
                |f| {
                    f.expr(operand);
                    f.write(")");
                },
            ),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.if_then_else(cond, then_branch, else_branch),
            ExprKind::Case { scrutinee, alts } => {
                self.depend(|f| f.write("case "), |f| f.expr(scrutinee));
                self.write(" of");
                let indent = self.printer.indent_width();
                self.indented_by(indent, |f| {
                    for &alt in arena.get_alts(alts) {
                        f.newline();
                        f.alt(alt);
                    }
                });
            }
            ExprKind::Do(stmts) => self.depend(
                |f| f.write("do "),
                |f| f.lined_with(arena.get_stmts(stmts), Self::stmt),
            ),
            ExprKind::Let { decls, body } => {
                self.depend(
                    |f| f.write("let "),
                    |f| f.lined_with(arena.get_decls(decls), |f, decl| f.decl(&decl)),
                );
                self.newline();
                self.depend(|f| f.write("in "), |f| f.expr(body));
            }
            ExprKind::RecordConstruct { con, fields } => {
                self.write_name(con);
                self.space();
                self.record_fields(fields);
            }
            ExprKind::RecordUpdate { record, fields } => {
                self.expr(record);
                self.space();
                self.record_fields(fields);
            }
            ExprKind::TypeAnnotation { expr, ty } => self.depend(
                |f| {
                    f.expr(expr);
                    f.write(" :: ");
                },
                |f| f.ty(ty),
            ),
            ExprKind::App { .. }
            | ExprKind::InfixApp { .. }
            | ExprKind::Lambda { .. }
            | ExprKind::Tuple { .. }
            | ExprKind::List(_) => self.expr(id),
        }
    }

    /// `if c then a else b` when it fits on the line, otherwise `then` and
    /// `else` aligned under the condition.
    fn if_then_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) {
        let config = *self.config();
        let inline = trial(self, |f| {
            f.write("if ");
            f.expr(cond);
            f.write(" then ");
            f.expr(then_branch);
            f.write(" else ");
            f.expr(else_branch);
        });
        if inline.is_single_line() && !inline.overflows(&config) {
            trace!("if: inline");
            self.commit(inline.into_candidate());
            return;
        }
        trace!("if: broken");
        self.depend(
            |f| f.write("if "),
            |f| {
                f.expr(cond);
                f.newline();
                f.depend(|f| f.write("then "), |f| f.expr(then_branch));
                f.newline();
                f.depend(|f| f.write("else "), |f| f.expr(else_branch));
            },
        );
    }

    fn stmt(&mut self, stmt: Stmt) {
        match stmt {
            Stmt::Bind { pat, expr } => {
                self.expr(pat);
                let indent = self.printer.indent_width();
                self.indented_by(indent, |f| {
                    f.dependent_or_newline(|f| f.write(" <- "), expr, Self::expr);
                });
            }
            Stmt::Expr(expr) => match *self.arena.get_expr(expr) {
                ExprKind::InfixApp { left, op, right } => {
                    let column = self.printer.effective_column();
                    self.infix_app(expr, left, op, right, Some(column));
                }
                _ => self.expr(expr),
            },
            Stmt::Let(decls) => {
                let arena = self.arena;
                self.depend(
                    |f| f.write("let "),
                    |f| f.lined_with(arena.get_decls(decls), |f, decl| f.decl(&decl)),
                );
            }
        }
    }

    /// Run `f` with the indentation base increased by `spaces`.
    pub(super) fn indented_by<R>(&mut self, spaces: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let column = self.printer.indent() + spaces;
        self.with_indent_at(column, f)
    }

    /// Render a type inline.
    pub(super) fn ty(&mut self, id: TypeId) {
        let arena = self.arena;
        match *arena.get_type(id) {
            TypeKind::Con(name) | TypeKind::Var(name) => self.write_name(name),
            TypeKind::App { func, arg } => {
                self.ty(func);
                self.space();
                self.ty(arg);
            }
            TypeKind::Fun { arg, result } => {
                self.ty(arg);
                self.write(" -> ");
                self.ty(result);
            }
            TypeKind::Tuple { boxed, items } => {
                let items = arena.get_type_list(items);
                if items.is_empty() {
                    self.write(boxed.empty());
                } else {
                    self.write(boxed.open());
                    self.inter_with(", ", items, Self::ty);
                    self.write(boxed.close());
                }
            }
            TypeKind::List(elem) => {
                self.write("[");
                self.ty(elem);
                self.write("]");
            }
            TypeKind::Paren(inner) => {
                self.write("(");
                self.ty(inner);
                self.write(")");
            }
            TypeKind::Forall {
                binders,
                context,
                body,
            } => {
                if !binders.is_empty() {
                    self.write("forall ");
                    self.inter_with(" ", arena.get_name_list(binders), Self::write_name);
                    self.write(". ");
                }
                if !context.is_empty() {
                    self.context(arena.get_type_list(context));
                    self.write(" => ");
                }
                self.ty(body);
            }
        }
    }

    /// A class context: a single assertion bare, several in parentheses.
    pub(super) fn context(&mut self, assertions: &[TypeId]) {
        match assertions {
            [single] => self.ty(*single),
            _ => {
                self.write("(");
                self.inter_with(", ", assertions, Self::ty);
                self.write(")");
            }
        }
    }
}
