//! Program, definitions and namespaces.

use rowan::{Checkpoint, TextRange};

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_, '_> {
    pub fn parse_program(&mut self) {
        // Leading trivia belongs to the root, so open it before anything is drained.
        self.builder.start_node(SyntaxKind::Program.into());
        self.def_list();
        self.eat_trivia();
        self.finish_node();
        self.assert_balanced();
    }

    /// Definitions until end of file, or until the `}` closing the current namespace.
    fn def_list(&mut self) {
        loop {
            if self.eof() || self.has_fatal_error() {
                break;
            }
            if self.namespace_depth > 0 && self.currently_is(SyntaxKind::BraceClose) {
                break;
            }
            if self.check_cancelled() {
                break;
            }

            if self.at_def_start() {
                self.top_level_def();
            } else if self.at_type_definition() {
                self.type_definition();
            } else {
                self.stray_tokens();
            }
        }
    }

    fn top_level_def(&mut self) {
        self.skip_trivia_to_buffer();
        let from = self.pos;
        let checkpoint = self.checkpoint();
        self.assert_at_def_start();

        let kind = match self.current() {
            SyntaxKind::KwFn => self.function_like(SyntaxKind::FunctionDef),
            SyntaxKind::KwTail => self.function_like(SyntaxKind::TailFunctionDef),
            SyntaxKind::KwCoro => self.function_like(SyntaxKind::CoroutineDef),
            _ => self.namespace_def(),
        };

        self.close_def(checkpoint, from, kind);
    }

    /// Wraps everything since `checkpoint` as `kind`, or as one `Error` node
    /// (extended to the next sync point) when the definition failed.
    fn close_def(&mut self, checkpoint: Checkpoint, from: usize, kind: SyntaxKind) {
        let kind = if self.recovering && !self.has_fatal_error() {
            self.recovering = false;
            self.skip_to_sync_point(from);
            SyntaxKind::Error
        } else {
            kind
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// `fn`, `tail fn` and `coro` definitions share one shape:
    /// keyword, name, `(` params `)`, return types, body.
    fn function_like(&mut self, kind: SyntaxKind) -> SyntaxKind {
        if kind == SyntaxKind::TailFunctionDef {
            self.bump();
        }
        self.bump();
        self.assert_current(SyntaxKind::Id);
        self.bump();

        self.param_list();
        self.return_types();
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.block();
        } else {
            self.error_expected("function body `{`");
        }
        kind
    }

    fn param_list(&mut self) {
        let open = self.current_span();
        if !self.expect(SyntaxKind::ParenOpen) {
            return;
        }

        if !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
            self.start_node(SyntaxKind::ParamList);
            self.param();
            while self.eat_token(SyntaxKind::Comma) {
                self.param();
            }
            self.finish_node();
        }

        self.expect_closing(SyntaxKind::ParenClose, open);
    }

    /// `type name`
    fn param(&mut self) {
        self.start_node(SyntaxKind::Param);
        self.parse_type();
        self.expect_name();
        self.finish_node();
    }

    fn return_types(&mut self) {
        if self.halted() {
            return;
        }
        self.type_list(SyntaxKind::TypeList);
    }

    fn namespace_def(&mut self) -> SyntaxKind {
        self.assert_current(SyntaxKind::KwNamespace);
        self.bump();
        self.bump();

        match self.current() {
            SyntaxKind::Semicolon => {
                self.bump();
                SyntaxKind::NamespaceSetDef
            }
            SyntaxKind::BraceOpen => {
                self.namespace_body();
                SyntaxKind::NamespaceDef
            }
            _ => {
                self.error_expected("`{` or `;`");
                SyntaxKind::NamespaceDef
            }
        }
    }

    /// A missing `}` at end of file is reported without failing the namespace,
    /// so the definitions parsed inside it survive.
    fn namespace_body(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let open = self.current_span();
        self.bump();

        self.namespace_depth += 1;
        self.def_list();
        self.namespace_depth -= 1;

        if !self.eat_token(SyntaxKind::BraceClose) && !self.has_fatal_error() {
            let range = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnclosedNamespace, range)
                .message("found end of file")
                .related_to("namespace body opened here", open)
                .emit();
        }
        self.exit_recursion();
    }

    /// `struct Name ...`, `union Name ...`, `enum Name ...`
    fn type_definition(&mut self) {
        self.skip_trivia_to_buffer();
        let from = self.pos;
        let checkpoint = self.checkpoint();

        let keyword = self.current_text();
        let start = self.current_span().start();
        self.bump();
        let end = self.current_span().end();
        self.bump();

        self.error_at(
            DiagnosticKind::UnsupportedTypeDefinition,
            TextRange::new(start, end),
            Some(keyword),
        );
        self.close_def(checkpoint, from, SyntaxKind::Error);
    }

    /// A run of tokens that cannot start a definition: one `Error` node, one diagnostic.
    fn stray_tokens(&mut self) {
        self.skip_trivia_to_buffer();
        let from = self.pos;

        self.start_node(SyntaxKind::Error);
        self.error(DiagnosticKind::ExpectedDefinition);
        self.recovering = false;
        self.bump();
        self.skip_to_sync_point(from);
        self.finish_node();
    }
}
