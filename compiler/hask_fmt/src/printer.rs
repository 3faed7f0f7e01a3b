//! Printer
//!
//! Stateful text sink tracking line, column and indentation, plus the
//! sandbox used to measure a rendering before deciding whether to keep it.
//!
//! # Trials
//!
//! [`Sandbox::sandbox`] swaps the live [`PrintState`] for a snapshot that
//! carries only the position (line, column, indentation, line-start flag)
//! and an empty buffer, runs the procedure, then swaps the live state back.
//! The procedure's end state comes back as a [`Candidate`]. Dropping the
//! candidate discards the trial; [`Sandbox::commit`] appends its text and
//! adopts its position. Trials nest: an inner trial snapshots the outer
//! trial's state, not the live one.

use std::mem;

use crate::config::FormatConfig;

/// A line/column pair. Lines and columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Emitter state: position, indentation base and the text written so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintState {
    output: String,
    line: usize,
    column: usize,
    indent: usize,
    /// A newline was the last thing emitted; the indentation is written
    /// lazily by the next non-empty write.
    at_line_start: bool,
}

impl PrintState {
    /// Copy of this state's position with an empty buffer.
    fn snapshot(&self) -> Self {
        PrintState {
            output: String::new(),
            line: self.line,
            column: self.column,
            indent: self.indent,
            at_line_start: self.at_line_start,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Column the next write starts at, counting pending indentation.
    pub fn effective_column(&self) -> usize {
        if self.at_line_start {
            self.indent
        } else {
            self.column
        }
    }

    /// Text written into this state.
    pub fn output(&self) -> &str {
        &self.output
    }
}

/// The uncommitted end state of a sandboxed trial.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a candidate does nothing unless committed"]
pub struct Candidate {
    state: PrintState,
}

impl Candidate {
    pub fn state(&self) -> &PrintState {
        &self.state
    }

    pub fn line(&self) -> usize {
        self.state.line
    }

    pub fn column(&self) -> usize {
        self.state.column
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    /// Text the trial produced.
    pub fn text(&self) -> &str {
        &self.state.output
    }
}

/// Text emitter with column/line bookkeeping.
#[derive(Debug, Clone)]
pub struct Printer {
    state: PrintState,
    config: FormatConfig,
}

impl Printer {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            state: PrintState {
                at_line_start: true,
                ..PrintState::default()
            },
            config,
        }
    }

    /// Start as if `column` characters were already on the current line.
    ///
    /// Used when rendering a fragment that continues a line written by
    /// someone else.
    #[must_use]
    pub fn with_starting_column(mut self, column: usize) -> Self {
        self.state.column = column;
        self.state.at_line_start = false;
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn column_limit(&self) -> usize {
        self.config.column_limit
    }

    /// Configured indentation step.
    pub fn indent_width(&self) -> usize {
        self.config.indent_spaces
    }

    pub fn state(&self) -> &PrintState {
        &self.state
    }

    pub fn line(&self) -> usize {
        self.state.line
    }

    pub fn column(&self) -> usize {
        self.state.column
    }

    /// Current indentation base.
    pub fn indent(&self) -> usize {
        self.state.indent
    }

    pub fn effective_column(&self) -> usize {
        self.state.effective_column()
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    pub fn output(&self) -> &str {
        &self.state.output
    }

    /// Write text. Embedded `\n` characters are emitted as newlines.
    pub fn write(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_fragment(first);
        }
        for rest in lines {
            self.newline();
            self.write_fragment(rest);
        }
    }

    fn write_fragment(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.state.at_line_start {
            let indent = self.state.indent;
            self.state.output.extend(std::iter::repeat(' ').take(indent));
            self.state.column = indent;
            self.state.at_line_start = false;
        }
        self.state.output.push_str(text);
        self.state.column += text.chars().count();
    }

    pub fn space(&mut self) {
        self.write(" ");
    }

    /// Emit a newline. Indentation is applied by the next write.
    pub fn newline(&mut self) {
        self.state.output.push('\n');
        self.state.line += 1;
        self.state.column = 0;
        self.state.at_line_start = true;
    }

    /// Set the indentation base, returning the previous one.
    pub fn set_indent(&mut self, indent: usize) -> usize {
        mem::replace(&mut self.state.indent, indent)
    }

    /// Make a trial's end state live.
    pub fn commit(&mut self, candidate: Candidate) {
        let Candidate { state } = candidate;
        self.state.output.push_str(&state.output);
        self.state.line = state.line;
        self.state.column = state.column;
        self.state.indent = state.indent;
        self.state.at_line_start = state.at_line_start;
    }

    /// Consume the printer, returning its text with trailing whitespace
    /// stripped from every line.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.state.output.len());
        for (i, line) in self.state.output.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.trim_end());
        }
        out
    }

    /// Like [`finish`](Self::finish), then drop trailing blank lines and end
    /// with exactly one newline.
    pub fn finalize(self) -> String {
        let mut out = self.finish();
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

/// Scoped printer operations shared by [`Printer`] and anything that owns one.
///
/// Implementors only provide access to their printer; the trial and
/// indentation combinators pass `&mut Self` through so a procedure can
/// render whole subtrees.
pub trait Sandbox: Sized {
    fn printer(&self) -> &Printer;

    fn printer_mut(&mut self) -> &mut Printer;

    /// Run `f` against a snapshot of the current state without committing.
    fn sandbox<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, Candidate) {
        let snapshot = self.printer().state.snapshot();
        let live = mem::replace(&mut self.printer_mut().state, snapshot);
        let result = f(self);
        let trial = mem::replace(&mut self.printer_mut().state, live);
        (result, Candidate { state: trial })
    }

    fn commit(&mut self, candidate: Candidate) {
        self.printer_mut().commit(candidate);
    }

    /// Run `f` with the indentation base set to `column`.
    fn with_indent_at<R>(&mut self, column: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.printer_mut().set_indent(column);
        let result = f(self);
        self.printer_mut().set_indent(saved);
        result
    }

    /// Run `f` with the indentation base shifted by `delta` (clamped at 0).
    fn indented<R>(&mut self, delta: isize, f: impl FnOnce(&mut Self) -> R) -> R {
        let column = self.printer().indent().saturating_add_signed(delta);
        self.with_indent_at(column, f)
    }

    /// Run `left`, then run `right` indented to the column `left` ended at.
    ///
    /// If `left` wrote nothing, `right` keeps the current indentation.
    fn depend<R>(&mut self, left: impl FnOnce(&mut Self), right: impl FnOnce(&mut Self) -> R) -> R {
        let before = self.printer().position();
        left(self);
        let after = self.printer().position();
        if before == after {
            right(self)
        } else {
            self.with_indent_at(after.column, right)
        }
    }
}

impl Sandbox for Printer {
    fn printer(&self) -> &Printer {
        self
    }

    fn printer_mut(&mut self) -> &mut Printer {
        self
    }
}
