use crate::DiagnosticKind;
use crate::test_utils::parse_invalid;

#[test]
fn trailing_separator_fails_the_definition() {
    let parsed = parse_invalid("fn f() int { return 1; }");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
      Error
        KwFn "fn"
        Id "f"
        ParenOpen "("
        ParenClose ")"
        TypeList
          types: NamedType
            name: Id "int"
        Block
          BraceOpen "{"
          stmts: StmtList
            stmt: ReturnStmt
              KwReturn "return"
              expr: Literal
                IntLiteral "1"
            Semicolon ";"
        BraceClose "}"
    ---
    parse error at 21..22: expected statement after `;` (hint: remove the `;` before `}`)
    "#);
}

#[test]
fn missing_separator_between_statements() {
    let parsed = parse_invalid("fn f() int { x = 1 y = 2 }");

    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 19..20: missing `;` between statements, found identifier `y` (hint: statements in a block are separated by `;`)");
    assert_eq!(parsed.root().errors().count(), 1);
    assert_eq!(parsed.root().defs().count(), 0);
}

#[test]
fn missing_separator_before_compound_statement() {
    let parsed = parse_invalid("fn f() int { x = 1 if (x) return }");
    let kinds: Vec<_> = parsed.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::MissingSeparator]);
}

#[test]
fn next_definition_survives() {
    let parsed = parse_invalid("fn f() int { return 1; }\nfn g() int { return 2 }");
    assert_eq!(parsed.diagnostics().len(), 1);
    let names: Vec<_> = parsed
        .root()
        .defs()
        .map(|d| d.name().unwrap().text().to_string())
        .collect();
    assert_eq!(names, ["g"]);
}

#[test]
fn malformed_for_header() {
    let parsed = parse_invalid("fn f() int { for (;;) break }");

    insta::assert_snapshot!(parsed.dump_diagnostics(), @"parse error at 20..21: malformed `for` header, expected `;`, found `)` (hint: the update clause is terminated by `;`: `for (init ; cond ; update ; )`)");
}

#[test]
fn for_header_with_extra_slot() {
    let parsed = parse_invalid("fn f() int { for (;;;;) break }");
    let diag = &parsed.diagnostics().as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedToken);
    assert_eq!(diag.message(), "expected `)`, found `;`");
}
