//! Broad inputs checked for losslessness and bounded diagnostics.

use crate::SyntaxKind;
use crate::test_utils::{assert_lossless, parse};

const MALFORMED: &[&str] = &[
    "",
    "   \n\t",
    "// only a comment",
    "fn",
    "fn f",
    "fn f(",
    "fn f(int",
    "fn f(int a,",
    "fn f(int a,)",
    "fn f() int",
    "fn f() int {",
    "fn f() int { return",
    "fn f() int { return (1 + }",
    "fn f() int { if ( }",
    "fn f() int { if (x) }",
    "fn f() int { do { } }",
    "fn f() int { for (;; }",
    "fn f() int { :l }",
    "fn f() int { var }",
    "fn f() int { var x = 1 }",
    "fn f() int { x += }",
    "fn f() int { ; }",
    "fn f() int { x = 1;; }",
    "tail",
    "coro c() int { yield }",
    "namespace",
    "namespace ns {",
    "namespace ns { fn }",
    "}}}",
    "(((",
    "struct",
    "struct S {",
    "@ # $",
    "0x 09 1.",
    "/* open",
    "fn f([]int a) int {}",
    "fn f(fn( int g) int {}",
    "fn f() int, { }",
    "fn f() int { return a.b.c }",
    "fn f() int { return -x }",
    "fn f() int { return f(,) }",
];

#[test]
fn malformed_inputs_are_lossless() {
    for input in MALFORMED {
        let parsed = parse(input);
        assert_lossless(&parsed);
        assert_eq!(parsed.syntax().kind(), SyntaxKind::Program, "{input:?}");
    }
}

#[test]
fn each_failed_definition_reports_once() {
    for input in MALFORMED {
        let parsed = parse(input);
        let errors = parsed.root().errors().count();
        let diagnostics = parsed.diagnostics().len();
        assert!(
            diagnostics <= errors.max(1) + 1,
            "{input:?}: {diagnostics} diagnostics for {errors} error nodes\n{}",
            parsed.dump_diagnostics()
        );
    }
}

#[test]
fn valid_definitions_survive_malformed_neighbours() {
    for input in MALFORMED {
        let text = format!("fn before() int {{}}\n{input}\nfn after() int {{}}");
        let parsed = parse(&text);
        assert_lossless(&parsed);

        let names: Vec<String> = parsed
            .root()
            .defs()
            .filter_map(|def| def.name().map(|n| n.text().to_string()))
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("before"), "{input:?}");
    }
}

#[test]
fn error_nodes_hold_significant_tokens() {
    for input in MALFORMED {
        let parsed = parse(input);
        for error in parsed.root().errors() {
            let has_token = error
                .as_cst()
                .descendants_with_tokens()
                .filter_map(|e| e.into_token())
                .any(|t| !t.kind().is_trivia());
            assert!(has_token, "{input:?}: empty error node");
        }
    }
}

#[test]
fn valid_program_is_lossless_with_trivia() {
    let input = "\n// lead\nfn f(int a) int { /* in */ return a }\n\n// tail\n";
    let parsed = crate::test_utils::parse_valid(input);
    let first = parsed.syntax().first_token().unwrap();
    assert_eq!(first.kind(), SyntaxKind::Newline);
    let last = parsed.syntax().last_token().unwrap();
    assert_eq!(last.kind(), SyntaxKind::Newline);
}
