use crate::test_utils::{parse_invalid, parse_valid};
use crate::{DiagnosticKind, ErrorClass};
use indoc::indoc;

#[test]
fn stray_tokens_before_definition() {
    let parsed = parse_invalid("x = 1;\nfn f() int {}");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
      Error
        Id "x"
        Eq "="
        IntLiteral "1"
        Semicolon ";"
      top_level_def: FunctionDef
        KwFn "fn"
        name: Id "f"
        ParenOpen "("
        ParenClose ")"
        return_types: TypeList
          types: NamedType
            name: Id "int"
        body: Block
          BraceOpen "{"
          BraceClose "}"
    ---
    parse error at 0..1: expected a top-level definition, found identifier `x`
    "#);
}

#[test]
fn stray_closing_brace() {
    let parsed = parse_invalid("}");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 0..1: expected a top-level definition, found `}`");
}

#[test]
fn fn_without_name_is_stray() {
    let parsed = parse_invalid("fn (int a) int {}");
    let kinds: Vec<_> = parsed.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedDefinition]);
    assert_eq!(parsed.root().errors().count(), 1);
}

#[test]
fn one_diagnostic_per_failed_definition() {
    let input = indoc! {r#"
    fn a() int { return + }
    fn b() int { x = }
    fn c() int { return 1 }
    "#};

    let parsed = parse_invalid(input);

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    <error>
    <error>
    fn c() int
      return 1
    ---
    parse error at 20..21: expected `}`, found operator `+`
    parse error at 41..42: expected an expression, found `}`
    ");
}

#[test]
fn missing_parameter_name() {
    let parsed = parse_invalid("fn f(int) int {}");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 8..9: expected a name, found `)`");
}

#[test]
fn missing_return_type() {
    let parsed = parse_invalid("fn f() {}");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 7..8: expected a type, found `{`");
}

#[test]
fn missing_function_body() {
    let parsed = parse_invalid("fn f() int return");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 11..17: expected function body `{`, found keyword `return`");
}

#[test]
fn unexpected_statement_token() {
    let parsed = parse_invalid("fn f() int { else }");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 13..17: expected a statement, found `else`");
}

#[test]
fn call_used_as_statement() {
    let parsed = parse_invalid("fn f() int { g(1) }");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 14..15: expected an assignment operator, found `(` (hint: calls are expressions and cannot stand alone as statements)");
}

#[test]
fn missing_assignment_operator() {
    let parsed = parse_invalid("fn f() int { x 1 }");
    let diag = &parsed.diagnostics().as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedAssignOp);
    assert_eq!(diag.message(), "expected an assignment operator, found integer literal `1`");
    assert!(diag.hints().is_empty());
}

#[test]
fn invalid_array_size() {
    let parsed = parse_invalid("fn f([n]int a) int {}");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 6..7: array size must be a decimal integer literal, found identifier `n` (hint: e.g., `[16]int`)");

    let parsed = parse_invalid("fn f([0x10]int a) int {}");
    assert_eq!(
        parsed.diagnostics().as_slice()[0].message(),
        "array size must be a decimal integer literal, found numeric literal `0x10`"
    );

    let parsed = parse_invalid("fn f([0]int a) int {}");
    let diag = &parsed.diagnostics().as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::InvalidArraySize);
    assert_eq!(
        diag.message(),
        "array size must be a decimal integer literal, found integer literal `0`"
    );
    assert_eq!(parsed.root().errors().count(), 1);
}

#[test]
fn array_size_may_contain_zeros() {
    let parsed = parse_valid("fn f([10]int a, [1_000]int b) int {}");
    assert_eq!(parsed.root().defs().count(), 1);
}

#[test]
fn empty_function_type_params() {
    let parsed = parse_invalid("fn f(fn() int g) int {}");
    let diag = &parsed.diagnostics().as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedType);
    assert_eq!(diag.message(), "expected a type, found `)`");
}

#[test]
fn namespace_without_body_or_semicolon() {
    let parsed = parse_invalid("namespace ns fn f() int {}");
    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    <error>
    fn f() int
    ---
    parse error at 13..15: expected `{` or `;`, found `fn`
    ");
}

#[test]
fn namespace_without_name() {
    let parsed = parse_invalid("namespace { fn f() int {} }");
    let kinds: Vec<_> = parsed.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::ExpectedDefinition, DiagnosticKind::ExpectedDefinition]
    );
    assert_eq!(parsed.root().defs().count(), 1);
}

#[test]
fn recovery_diagnostics_are_parse_errors() {
    let parsed = parse_invalid("fn f() int { x = ; }");
    assert!(parsed.diagnostics().iter().all(|d| d.class() == ErrorClass::Parse));
}
