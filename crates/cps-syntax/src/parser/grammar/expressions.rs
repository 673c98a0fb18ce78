//! Expressions via precedence climbing.
//!
//! Binary operators are left-associative; each loop iteration retroactively wraps the
//! operand parsed so far into a `BinaryExpr` using a checkpoint. Calls and parentheses
//! bind tighter than every binary operator.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::LITERALS;

/// Precedence of `||`, the loosest binary operator.
const LOWEST_PRECEDENCE: u8 = 4;

impl Parser<'_, '_> {
    pub(crate) fn parse_expr(&mut self) {
        self.binary_expr(LOWEST_PRECEDENCE);
    }

    fn binary_expr(&mut self, min_precedence: u8) {
        let checkpoint = self.checkpoint();
        self.postfix_expr();

        loop {
            let Some(precedence) = self.current().binary_precedence() else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            self.binary_expr(precedence + 1);
            self.finish_node();
        }
    }

    /// Calls chain to the left: `f(a)(b)` calls the result of `f(a)`.
    fn postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.primary_expr();

        loop {
            match self.current() {
                SyntaxKind::ParenOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    self.call_args();
                    self.finish_node();
                }
                SyntaxKind::Dot => {
                    self.unsupported(DiagnosticKind::UnsupportedMemberAccess);
                    break;
                }
                SyntaxKind::Colon if self.next_is(SyntaxKind::ParenOpen) => {
                    self.unsupported(DiagnosticKind::UnsupportedMemberCall);
                    break;
                }
                _ => break,
            }
        }
    }

    fn call_args(&mut self) {
        let open = self.current_span();
        self.bump();

        if !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
            self.start_node(SyntaxKind::ArgList);
            self.parse_expr();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_expr();
            }
            self.finish_node();
        }

        self.expect_closing(SyntaxKind::ParenClose, open);
    }

    fn primary_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            kind if LITERALS.contains(kind) => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Id => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::ParenOpen => self.paren_expr(),
            SyntaxKind::Bang | SyntaxKind::Tilde => {
                self.unsupported(DiagnosticKind::UnsupportedUnaryOperator)
            }
            _ => self.error(DiagnosticKind::ExpectedExpression),
        }
        self.exit_recursion();
    }

    fn paren_expr(&mut self) {
        self.start_node(SyntaxKind::ParenExpr);
        let open = self.current_span();
        self.bump();
        self.parse_expr();
        self.expect_closing(SyntaxKind::ParenClose, open);
        self.finish_node();
    }
}
