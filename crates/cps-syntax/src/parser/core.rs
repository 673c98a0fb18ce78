//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};

const DEBUG_FUEL: u32 = 256;

/// Everything a finished parse hands back to the caller.
#[derive(Debug)]
pub struct ParseOutput {
    pub green: GreenNode,
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// Trivia tokens are buffered and flushed when starting a new node.
///
/// The first syntax error inside a definition puts the parser into recovery. While
/// recovering, lookahead reports end of file, so every production unwinds without
/// consuming input or reporting again. The definition loop then skips to the next
/// resynchronization point and clears the flag.
pub struct Parser<'src, 'c> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) namespace_depth: u32,
    pub(super) recovering: bool,
    pub(super) debug_fuel: Cell<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    cancellation: Option<&'c dyn Fn() -> bool>,
    fatal_error: Option<Error>,
}

impl<'src, 'c> Parser<'src, 'c> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            namespace_depth: 0,
            recovering: false,
            debug_fuel: Cell::new(DEBUG_FUEL),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            cancellation: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Polled between top-level definitions; returning `true` stops the parse.
    pub fn with_cancellation(mut self, cancelled: Option<&'c dyn Fn() -> bool>) -> Self {
        self.cancellation = cancelled;
        self
    }

    pub fn parse(mut self) -> Result<ParseOutput, Error> {
        self.parse_program();
        self.finish()
    }

    fn finish(self) -> Result<ParseOutput, Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok(ParseOutput {
            green: self.builder.finish(),
            tokens: self.tokens,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Recovering or stopped for good: lookahead sees end of file.
    pub(super) fn halted(&self) -> bool {
        self.recovering || self.fatal_error.is_some()
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        if self.halted() {
            return SyntaxKind::Eof;
        }
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        let source = self.source;
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// No significant tokens left. Ignores recovery.
    pub(super) fn eof(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.halted() || self.eof()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    pub(super) fn nth_is(&mut self, n: usize, kind: SyntaxKind) -> bool {
        self.peek_nth(n) == kind
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    /// Pending trivia goes to the enclosing node, so nodes never start with trivia.
    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.eat_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: report `expected <kind>, found ...` but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_expected(kind.describe());
        false
    }

    pub(super) fn expect_name(&mut self) -> bool {
        if self.eat_token(SyntaxKind::Id) {
            return true;
        }
        self.error(DiagnosticKind::ExpectedName);
        false
    }

    /// Closing delimiter for an opener at `open`.
    ///
    /// Running into end of file or the next definition means the opener was never
    /// closed; anything else is an ordinary unexpected token.
    pub(super) fn expect_closing(&mut self, close: SyntaxKind, open: TextRange) -> bool {
        if self.eat_token(close) {
            return true;
        }
        if self.halted() {
            return false;
        }
        if !self.eof() && !self.at_def_start() {
            self.error_expected(close.describe());
            return false;
        }

        let (kind, opener) = match close {
            SyntaxKind::ParenClose => (DiagnosticKind::UnclosedParen, "`(`"),
            SyntaxKind::BracketClose => (DiagnosticKind::UnclosedBracket, "`[`"),
            _ => (DiagnosticKind::UnclosedBlock, "`{`"),
        };
        let range = self.current_span();
        let found = self.found();
        if let Some(diag) = self.start_error(kind, range) {
            diag.message(format!("found {found}"))
                .related_to(format!("{opener} opened here"), open)
                .emit();
        }
        false
    }

    /// Describes the current token for `found ...` messages.
    pub(super) fn found(&mut self) -> String {
        self.skip_trivia_to_buffer();
        let Some(token) = self.tokens.get(self.pos) else {
            return "end of file".to_string();
        };
        let description = token.kind.describe();
        if description.starts_with('`') {
            return description.to_string();
        }
        format!("{} `{}`", description, token_text(self.source, token))
    }

    /// Starts a diagnostic and enters recovery. Returns `None` while already recovering.
    pub(super) fn start_error(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
    ) -> Option<DiagnosticBuilder<'_>> {
        if self.halted() {
            return None;
        }
        self.recovering = true;
        Some(self.diagnostics.report(kind, range))
    }

    /// A lexer error token at the current position outranks whatever the grammar expected.
    fn report_lex_error(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        let Some(&token) = self.tokens.get(self.pos) else {
            return false;
        };
        let kind = match token.kind {
            SyntaxKind::Garbage => DiagnosticKind::InvalidCharacter,
            SyntaxKind::MalformedNumber => DiagnosticKind::MalformedNumber,
            SyntaxKind::UnterminatedComment => DiagnosticKind::UnterminatedComment,
            _ => return false,
        };
        let text = token_text(self.source, &token);
        if let Some(diag) = self.start_error(kind, token.span) {
            match kind {
                DiagnosticKind::UnterminatedComment => diag.emit(),
                _ => diag.message(text).emit(),
            }
        }
        true
    }

    /// Reports `kind` at the current token with a `found ...` detail.
    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        if self.halted() || self.report_lex_error() {
            return;
        }
        let range = self.current_span();
        let found = self.found();
        if let Some(diag) = self.start_error(kind, range) {
            diag.message(format!("found {found}")).emit();
        }
    }

    pub(super) fn error_expected(&mut self, what: &str) {
        self.error_expected_as(DiagnosticKind::UnexpectedToken, what);
    }

    /// Reports `expected <what>, found ...` under the given kind.
    pub(super) fn error_expected_as(&mut self, kind: DiagnosticKind, what: &str) {
        if self.halted() || self.report_lex_error() {
            return;
        }
        let range = self.current_span();
        let found = self.found();
        if let Some(diag) = self.start_error(kind, range) {
            diag.message(format!("expected {what}, found {found}")).emit();
        }
    }

    /// Reports `kind` at an explicit range with an optional detail.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, detail: Option<&str>) {
        if let Some(diag) = self.start_error(kind, range) {
            match detail {
                Some(detail) => diag.message(detail).emit(),
                None => diag.emit(),
            }
        }
    }

    /// Reserved syntax at the current token.
    pub(super) fn unsupported(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        self.error_at(kind, range, None);
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Polls the cancellation callback. Returns `true` once the parse must stop.
    pub(super) fn check_cancelled(&mut self) -> bool {
        if let Some(cancelled) = self.cancellation
            && self.fatal_error.is_none()
            && cancelled()
        {
            self.fatal_error = Some(Error::Cancelled);
        }
        self.has_fatal_error()
    }

    /// `fn Id`, `tail fn Id`, `coro Id` or `namespace Id`.
    ///
    /// The identifier separates definitions from function types such as `fn(int) int`.
    pub(super) fn at_def_start(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwFn | SyntaxKind::KwCoro | SyntaxKind::KwNamespace => {
                self.next_is(SyntaxKind::Id)
            }
            SyntaxKind::KwTail => {
                self.next_is(SyntaxKind::KwFn) && self.nth_is(2, SyntaxKind::Id)
            }
            _ => false,
        }
    }

    /// `struct Id`, `union Id` or `enum Id`: reserved, not keywords.
    pub(super) fn at_type_definition(&mut self) -> bool {
        self.currently_is(SyntaxKind::Id)
            && matches!(self.current_text(), "struct" | "union" | "enum")
            && self.next_is(SyntaxKind::Id)
    }

    pub(super) fn at_sync_point(&mut self) -> bool {
        self.at_def_start() || self.at_type_definition()
    }

    /// Consumes tokens up to the next place where definitions can resume.
    ///
    /// Braces are balanced from token index `from`, so the failed definition swallows its
    /// own closing braces. An unmatched `}` ends the skip only inside a namespace, where it
    /// closes the namespace body.
    pub(super) fn skip_to_sync_point(&mut self, from: usize) {
        let mut depth = self.tokens[from..self.pos]
            .iter()
            .fold(0u32, |depth, t| match t.kind {
                SyntaxKind::BraceOpen => depth + 1,
                SyntaxKind::BraceClose => depth.saturating_sub(1),
                _ => depth,
            });

        while !self.should_stop() && !self.at_sync_point() {
            match self.current() {
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose if depth > 0 => depth -= 1,
                SyntaxKind::BraceClose if self.namespace_depth > 0 => break,
                _ => {}
            }
            self.bump();
        }
    }
}
