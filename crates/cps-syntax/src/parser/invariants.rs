//! Internal consistency checks. A failure here is a parser bug, never bad input.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;
use super::cst::token_sets::DEF_KEYWORDS;

impl Parser<'_, '_> {
    /// Lookahead without consuming is bounded; the budget refills on every bump.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.debug_fuel.get();
        assert!(left != 0, "cps parser made no progress at token {}", self.pos);
        self.debug_fuel.set(left - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "cps parser invariant: expected {expected:?} at token {}, found {found:?}",
            self.pos,
        );
    }

    /// Callers dispatch on `at_def_start`, so a definition keyword is always next.
    #[inline]
    pub(super) fn assert_at_def_start(&mut self) {
        let found = self.current();
        assert!(
            DEF_KEYWORDS.contains(found),
            "cps parser invariant: definition cannot start with {found:?}",
        );
    }

    /// Every namespace and nesting level opened must be closed by the time the
    /// root node is finished, fatal errors included.
    #[inline]
    pub(super) fn assert_balanced(&self) {
        assert_eq!(self.depth, 0, "cps parser invariant: unbalanced recursion depth");
        assert_eq!(
            self.namespace_depth, 0,
            "cps parser invariant: unbalanced namespace depth"
        );
    }
}
