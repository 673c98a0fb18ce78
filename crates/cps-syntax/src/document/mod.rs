//! Parse entry points: configuration, the parsed document, and its printers.

mod printer;
mod source;


use rowan::{GreenNode, TextRange};

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::parser::ast::Program;
use crate::parser::lexer::{Token, lex, token_text};
use crate::parser::{Parser, SyntaxNode};

pub use printer::{AstPrinter, CstPrinter};
pub use source::{LineCol, LineIndex, Source, Span};

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 4096;

/// Resource limits for one parse. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

pub struct ParseBuilder<'c> {
    source: Source,
    config: ParseConfig,
    cancellation: Option<Box<dyn Fn() -> bool + 'c>>,
}

impl<'c> ParseBuilder<'c> {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            source: source.into(),
            config: ParseConfig::default(),
            cancellation: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.source = self.source.name(name);
        self
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.exec_fuel = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.config.recursion_fuel = limit;
        self
    }

    /// The callback runs between top-level definitions; `true` stops the parse
    /// with [`crate::Error::Cancelled`].
    pub fn with_cancellation(mut self, cancelled: impl Fn() -> bool + 'c) -> Self {
        self.cancellation = Some(Box::new(cancelled));
        self
    }

    pub fn parse(self) -> Result<Parsed> {
        let text = self.source.text();
        let output = Parser::new(text, lex(text))
            .with_exec_fuel(self.config.exec_fuel)
            .with_recursion_fuel(self.config.recursion_fuel)
            .with_cancellation(self.cancellation.as_deref())
            .parse()?;

        let line_index = LineIndex::new(text);
        Ok(Parsed {
            source: self.source,
            green: output.green,
            tokens: output.tokens,
            diagnostics: output.diagnostics,
            line_index,
            exec_fuel_consumed: output.exec_fuel_consumed,
        })
    }
}

/// Parses `text` with default limits.
pub fn parse(text: &str) -> Result<Parsed> {
    ParseBuilder::new(text).parse()
}

/// A parsed document: the immutable tree plus everything collected while building it.
///
/// The tree is complete even when diagnostics exist.
#[derive(Debug, Clone)]
pub struct Parsed {
    source: Source,
    green: GreenNode,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
    line_index: LineIndex,
    exec_fuel_consumed: u32,
}

impl Parsed {
    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn text(&self) -> &str {
        self.source.text()
    }

    /// The thread-safe green tree; build per-thread views with [`SyntaxNode::new_root`].
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> Program {
        Program::cast(self.syntax()).expect("parser always produces Program")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Every lexed token, trivia included, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_text(&self, token: &Token) -> &str {
        token_text(self.source.text(), token)
    }

    pub fn span(&self, range: TextRange) -> Span {
        self.line_index.span(range)
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// Diagnostics as annotated snippets, titled with the source name if any.
    pub fn render_diagnostics(&self, colored: bool) -> String {
        let mut printer = self
            .diagnostics
            .printer()
            .source(self.source.text())
            .colored(colored);
        if let Some(name) = self.source.get_name() {
            printer = printer.path(name);
        }
        printer.render()
    }

    pub fn cst_printer(&self) -> CstPrinter {
        CstPrinter::new(self.syntax())
    }

    pub fn ast_printer(&self) -> AstPrinter {
        AstPrinter::new(self.root())
    }
}
