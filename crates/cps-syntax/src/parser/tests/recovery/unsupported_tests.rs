use crate::test_utils::parse_invalid;
use crate::{DiagnosticKind, ErrorClass};
use indoc::indoc;

#[test]
fn unary_operators() {
    let parsed = parse_invalid("fn f() int { return !x }");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"unsupported construct at 20..21: unary operators are not supported in this grammar version");

    let parsed = parse_invalid("fn f() int { x = ~y }");
    assert_eq!(
        parsed.diagnostics().as_slice()[0].kind(),
        DiagnosticKind::UnsupportedUnaryOperator
    );
}

#[test]
fn member_access_in_statement() {
    let parsed = parse_invalid("fn f() int { x.y = 1 }");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"unsupported construct at 14..15: member access is not supported in this grammar version");
}

#[test]
fn member_access_in_expression() {
    let parsed = parse_invalid("fn f() int { return a.b }");
    assert_eq!(
        parsed.diagnostics().as_slice()[0].kind(),
        DiagnosticKind::UnsupportedMemberAccess
    );
}

#[test]
fn member_call() {
    let parsed = parse_invalid("fn f() int { return x:(1) }");
    insta::assert_snapshot!(parsed.dump_diagnostics(), @"unsupported construct at 21..22: member calls are not supported in this grammar version");

    let parsed = parse_invalid("fn f() int { x:(1) }");
    assert_eq!(
        parsed.diagnostics().as_slice()[0].kind(),
        DiagnosticKind::UnsupportedMemberCall
    );
}

#[test]
fn type_definitions() {
    let input = indoc! {r#"
    struct Point { int x; int y }
    fn main() int {}
    union U { }
    enum E { A }
    "#};

    let parsed = parse_invalid(input);

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    <error>
    fn main() int
    <error>
    <error>
    ---
    unsupported construct at 0..12: `struct` definitions are not supported in this grammar version
    unsupported construct at 47..54: `union` definitions are not supported in this grammar version
    unsupported construct at 59..65: `enum` definitions are not supported in this grammar version
    ");
    assert!(
        parsed
            .diagnostics()
            .iter()
            .all(|d| d.class() == ErrorClass::Unsupported)
    );
}

#[test]
fn type_definition_words_are_still_identifiers() {
    let parsed = crate::test_utils::parse_valid("fn f(struct s) int { var enum int = 1; return enum }");
    assert_eq!(parsed.root().defs().count(), 1);
}
