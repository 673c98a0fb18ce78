//! Atomic and complex statements, blocks.
//!
//! Every atomic statement is accepted where a complex statement is expected.
//! Statements inside a block are separated by exactly one `;`; a trailing `;`
//! before `}` is an error.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    ATOMIC_STMT_FIRST, COMPLEX_STMT_FIRST, EXPR_FIRST, FOR_HEADER_STOP,
};

impl Parser<'_, '_> {
    /// `{ stmt ; stmt ... }`
    pub(crate) fn block(&mut self) {
        self.assert_current(SyntaxKind::BraceOpen);
        self.start_node(SyntaxKind::Block);
        let open = self.current_span();
        self.bump();

        if !self.currently_is(SyntaxKind::BraceClose) && !self.should_stop() {
            self.stmt_list();
        }

        if !self.eat_token(SyntaxKind::BraceClose) {
            if self.currently_is_one_of(COMPLEX_STMT_FIRST) {
                self.error(DiagnosticKind::MissingSeparator);
            } else {
                self.expect_closing(SyntaxKind::BraceClose, open);
            }
        }
        self.finish_node();
    }

    fn stmt_list(&mut self) {
        self.start_node(SyntaxKind::StmtList);
        loop {
            self.complex_stmt();
            if !self.currently_is(SyntaxKind::Semicolon) {
                break;
            }
            let separator = self.current_span();
            self.bump();
            if self.currently_is(SyntaxKind::BraceClose) {
                self.error_at(DiagnosticKind::TrailingSeparator, separator, None);
                break;
            }
        }
        self.finish_node();
    }

    pub(crate) fn complex_stmt(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::KwIf => self.if_stmt(),
            SyntaxKind::KwWhile => self.while_stmt(),
            SyntaxKind::KwDo => self.do_while_stmt(),
            SyntaxKind::KwFor => self.for_stmt(),
            SyntaxKind::BraceOpen => self.block(),
            kind if ATOMIC_STMT_FIRST.contains(kind) => self.atomic_stmt(),
            _ => self.error(DiagnosticKind::ExpectedStatement),
        }
        self.exit_recursion();
    }

    pub(crate) fn atomic_stmt(&mut self) {
        match self.current() {
            SyntaxKind::KwVar => self.binding(SyntaxKind::VarDef),
            SyntaxKind::KwLet => self.binding(SyntaxKind::LetDef),
            SyntaxKind::Id => self.assignment(),
            SyntaxKind::KwReturn => self.return_stmt(),
            SyntaxKind::KwContinue => self.bare_stmt(SyntaxKind::ContinueStmt),
            SyntaxKind::KwBreak => self.bare_stmt(SyntaxKind::BreakStmt),
            SyntaxKind::KwSuspend => self.bare_stmt(SyntaxKind::SuspendStmt),
            SyntaxKind::KwGoto => self.goto_stmt(),
            SyntaxKind::Colon => self.labeled_stmt(),
            _ => self.error(DiagnosticKind::ExpectedStatement),
        }
    }

    /// `var name type = expr` / `let name type = expr`
    fn binding(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.expect_name();
        self.parse_type();
        self.expect(SyntaxKind::Eq);
        self.parse_expr();
        self.finish_node();
    }

    /// `name op expr`
    fn assignment(&mut self) {
        self.start_node(SyntaxKind::Assignment);
        self.bump();

        match self.current() {
            kind if kind.is_assign_op() => {
                self.bump();
                self.parse_expr();
            }
            SyntaxKind::Dot => self.unsupported(DiagnosticKind::UnsupportedMemberAccess),
            SyntaxKind::Colon if self.next_is(SyntaxKind::ParenOpen) => {
                self.unsupported(DiagnosticKind::UnsupportedMemberCall)
            }
            SyntaxKind::ParenOpen => {
                let range = self.current_span();
                if let Some(diag) = self.start_error(DiagnosticKind::ExpectedAssignOp, range) {
                    diag.message("found `(`")
                        .hint("calls are expressions and cannot stand alone as statements")
                        .emit();
                }
            }
            _ => self.error(DiagnosticKind::ExpectedAssignOp),
        }
        self.finish_node();
    }

    fn return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump();
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `continue`, `break`, `suspend`
    fn bare_stmt(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    fn goto_stmt(&mut self) {
        self.start_node(SyntaxKind::GotoStmt);
        self.bump();
        self.expect_name();
        self.finish_node();
    }

    /// `:label stmt`
    fn labeled_stmt(&mut self) {
        self.start_node(SyntaxKind::LabeledStmt);
        self.bump();
        self.expect_name();
        self.complex_stmt();
        self.finish_node();
    }

    /// `if (cond) stmt [else stmt]`; a dangling `else` goes to the innermost `if`.
    fn if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.paren_condition();
        self.complex_stmt();
        if self.eat_token(SyntaxKind::KwElse) {
            self.complex_stmt();
        }
        self.finish_node();
    }

    fn while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.paren_condition();
        self.complex_stmt();
        self.finish_node();
    }

    fn do_while_stmt(&mut self) {
        self.start_node(SyntaxKind::DoWhileStmt);
        self.bump();
        self.complex_stmt();
        self.expect(SyntaxKind::KwWhile);
        self.paren_condition();
        self.finish_node();
    }

    fn paren_condition(&mut self) {
        let open = self.current_span();
        if self.expect(SyntaxKind::ParenOpen) {
            self.parse_expr();
            self.expect_closing(SyntaxKind::ParenClose, open);
        }
    }

    /// `for ( [init] ; [cond] ; [update] ; ) body`
    ///
    /// The `;` after the update slot is part of the header, so `for (;;;)` is the
    /// shortest form and `for (;;)` is malformed.
    fn for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump();

        let open = self.current_span();
        if self.expect(SyntaxKind::ParenOpen) {
            if !self.currently_is_one_of(FOR_HEADER_STOP) {
                self.atomic_stmt();
            }
            self.for_separator();
            if !self.currently_is_one_of(FOR_HEADER_STOP) {
                self.parse_expr();
            }
            self.for_separator();
            if !self.currently_is_one_of(FOR_HEADER_STOP) {
                self.atomic_stmt();
            }
            self.for_separator();
            self.expect_closing(SyntaxKind::ParenClose, open);
        }

        self.complex_stmt();
        self.finish_node();
    }

    fn for_separator(&mut self) {
        if !self.eat_token(SyntaxKind::Semicolon) {
            self.error_expected_as(DiagnosticKind::MalformedForHeader, "`;`");
        }
    }
}
