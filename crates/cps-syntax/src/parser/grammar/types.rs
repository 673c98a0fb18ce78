//! Type grammar: named, pointer, fixed array and function types.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_, '_> {
    pub(crate) fn parse_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::Id => {
                self.start_node(SyntaxKind::NamedType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Star => {
                self.start_node(SyntaxKind::PointerType);
                self.bump();
                self.expect_name();
                self.finish_node();
            }
            SyntaxKind::BracketOpen => self.fixed_array_type(),
            SyntaxKind::KwFn => self.fn_type(SyntaxKind::FnType),
            SyntaxKind::KwTail => self.fn_type(SyntaxKind::TailFnType),
            SyntaxKind::KwCoro => self.fn_type(SyntaxKind::CoroFnType),
            _ => self.error(DiagnosticKind::ExpectedType),
        }
        self.exit_recursion();
    }

    /// Comma-separated, one or more. Used for return types and function-type parameters.
    pub(crate) fn type_list(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.parse_type();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_type();
        }
        self.finish_node();
    }

    /// `[size]name`, where size is a decimal integer literal.
    /// A lone `0` lexes as an integer but is not a valid size.
    fn fixed_array_type(&mut self) {
        self.start_node(SyntaxKind::FixedArrayType);
        let open = self.current_span();
        self.bump();

        if self.currently_is(SyntaxKind::IntLiteral) && self.current_text() != "0" {
            self.bump();
        } else {
            self.error(DiagnosticKind::InvalidArraySize);
        }
        self.expect_closing(SyntaxKind::BracketClose, open);
        self.expect_name();
        self.finish_node();
    }

    /// `fn(params) ret`, `tail fn(params) ret`, `coro(params) ret`
    fn fn_type(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        if kind == SyntaxKind::TailFnType {
            self.bump();
            self.expect(SyntaxKind::KwFn);
        } else {
            self.bump();
        }

        let open = self.current_span();
        if self.expect(SyntaxKind::ParenOpen) {
            self.type_list(SyntaxKind::TypeParamList);
            self.expect_closing(SyntaxKind::ParenClose, open);
        }
        self.parse_type();
        self.finish_node();
    }
}
