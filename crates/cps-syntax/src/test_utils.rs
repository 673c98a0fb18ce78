//! Test-only dump methods and parse shorthands.

use crate::{ParseBuilder, Parsed};

impl Parsed {
    pub fn dump_cst(&self) -> String {
        self.cst_printer().dump()
    }

    pub fn dump_cst_full(&self) -> String {
        self.cst_printer().with_trivia(true).dump()
    }

    pub fn dump_cst_with_spans(&self) -> String {
        self.cst_printer().with_spans(true).dump()
    }

    pub fn dump_ast(&self) -> String {
        self.ast_printer().dump()
    }

    /// One diagnostic per line, without source snippets.
    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics().printer().render()
    }

    /// CST, then diagnostics after a `---` separator when there are any.
    pub fn snapshot_cst(&self) -> String {
        let mut out = self.dump_cst();
        if !self.is_valid() {
            out.push_str("---\n");
            out.push_str(&self.dump_diagnostics());
        }
        out
    }

    pub fn snapshot_ast(&self) -> String {
        let mut out = self.dump_ast();
        if !self.is_valid() {
            out.push_str("---\n");
            out.push_str(&self.dump_diagnostics());
        }
        out
    }
}

/// Parses with default limits, panicking on fuel exhaustion or cancellation.
pub fn parse(text: &str) -> Parsed {
    ParseBuilder::new(text)
        .parse()
        .expect("parse should not hit a fatal limit")
}

/// Parses and asserts the input is free of diagnostics.
pub fn parse_valid(text: &str) -> Parsed {
    let parsed = parse(text);
    assert!(
        parsed.is_valid(),
        "expected no diagnostics, got:\n{}",
        parsed.dump_diagnostics()
    );
    assert_lossless(&parsed);
    parsed
}

/// Parses and asserts the input produced at least one diagnostic.
pub fn parse_invalid(text: &str) -> Parsed {
    let parsed = parse(text);
    assert!(!parsed.is_valid(), "expected diagnostics for {text:?}");
    assert_lossless(&parsed);
    parsed
}

pub fn assert_lossless(parsed: &Parsed) {
    assert_eq!(parsed.syntax().to_string(), parsed.text());
}
