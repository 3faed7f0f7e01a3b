//! Formatter Core
//!
//! Top-down renderer. Each node shape with a layout rule is dispatched to
//! it; every other shape goes to the default renderer in [`base`].
//!
//! # Algorithm
//!
//! A rule measures one or more sandboxed trials with the predicates in
//! [`crate::predicates`], then commits exactly one rendering: an accepted
//! trial is committed as-is, a rejected one is dropped and the broken
//! layout is written directly.
//!
//! # Modules
//!
//! - [`application`]: function application
//! - [`infix`]: infix operator application
//! - [`bindings`]: dependent-or-newline, lambdas, right-hand sides, guards,
//!   field updates, case alternatives
//! - [`collections`]: tuples, lists, record braces
//! - [`signature`]: type signatures
//! - [`base`]: default renderer for everything else
//! - [`helpers`]: separators and operator spelling

mod application;
mod base;
mod bindings;
mod collections;
mod helpers;
mod infix;
mod signature;

use hask_ir::{Decl, ExprArena, ExprId, ExprKind, Module, Name, StringInterner};
use tracing::debug;

use crate::config::FormatConfig;
use crate::printer::{Printer, Sandbox};

/// Renders trees from one arena into a [`Printer`].
pub struct Formatter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    printer: Printer,
}

impl<'a> Formatter<'a> {
    /// Create a formatter with the default config.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Self::with_config(arena, interner, FormatConfig::default())
    }

    /// Create a formatter with a custom config.
    ///
    /// The config is used as given; see [`FormatConfig::validate`].
    pub fn with_config(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        config: FormatConfig,
    ) -> Self {
        Self {
            arena,
            interner,
            printer: Printer::new(config),
        }
    }

    /// Start rendering as if `column` characters were already on the line.
    #[must_use]
    pub fn with_starting_column(mut self, column: usize) -> Self {
        self.printer = self.printer.with_starting_column(column);
        self
    }

    /// Start rendering with the given indentation base.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.printer.set_indent(indent);
        self
    }

    pub fn config(&self) -> &FormatConfig {
        self.printer.config()
    }

    /// Render an expression, dispatching on its shape.
    pub fn expr(&mut self, id: ExprId) {
        match *self.arena.get_expr(id) {
            ExprKind::App { .. } => self.application(id),
            ExprKind::InfixApp { left, op, right } => self.infix_app(id, left, op, right, None),
            ExprKind::Lambda { params, body } => self.lambda(params, body),
            ExprKind::Tuple { boxed, items } => self.tuple(boxed, items),
            ExprKind::List(items) => self.list(items),
            _ => self.base_expr(id),
        }
    }

    /// Render one declaration.
    pub fn decl(&mut self, decl: &Decl) {
        match *decl {
            Decl::TypeSig { names, ty } => self.type_sig(names, ty),
            Decl::FunBind { name, params, rhs } => {
                let arena = self.arena;
                self.write_name(name);
                for &param in arena.get_expr_list(params) {
                    self.space();
                    self.expr(param);
                }
                self.rhs(rhs);
            }
            Decl::PatBind { pat, rhs } => {
                self.expr(pat);
                self.rhs(rhs);
            }
        }
    }

    /// Render a module: declarations separated by blank lines, except that a
    /// type signature stays next to the binding after it.
    pub fn module(&mut self, module: &Module) {
        let arena = self.arena;
        let decls = arena.get_decls(module.decls);
        debug!(decls = decls.len(), "formatting module");
        for (i, decl) in decls.iter().enumerate() {
            if i > 0 {
                self.newline();
                if !matches!(decls[i - 1], Decl::TypeSig { .. }) {
                    self.newline();
                }
            }
            self.decl(decl);
        }
    }

    /// Consume the formatter, returning its text.
    pub fn finish(self) -> String {
        self.printer.finish()
    }

    /// Consume the formatter, returning its text with one trailing newline.
    pub fn finalize(self) -> String {
        self.printer.finalize()
    }

    // -- Printer shorthands --

    fn write(&mut self, text: &str) {
        self.printer.write(text);
    }

    fn space(&mut self) {
        self.printer.space();
    }

    fn newline(&mut self) {
        self.printer.newline();
    }

    fn write_name(&mut self, name: Name) {
        let text = self.lookup(name);
        self.printer.write(text);
    }

    fn lookup(&self, name: Name) -> &'a str {
        self.interner.lookup(name)
    }
}

impl Sandbox for Formatter<'_> {
    fn printer(&self) -> &Printer {
        &self.printer
    }

    fn printer_mut(&mut self) -> &mut Printer {
        &mut self.printer
    }
}
