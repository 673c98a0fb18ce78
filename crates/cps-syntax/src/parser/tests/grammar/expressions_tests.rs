use crate::test_utils::parse_valid;

fn returned(expr: &str) -> String {
    let parsed = parse_valid(&format!("fn f() int {{ return {expr} }}"));
    parsed
        .dump_ast()
        .lines()
        .nth(1)
        .expect("return statement")
        .trim()
        .to_string()
}

#[test]
fn precedence_ladder() {
    insta::assert_snapshot!(
        returned("a || b && c | d ^ e & f == g < h << i + j * k"),
        @"return (a || (b && (c | (d ^ (e & (f == (g < (h << (i + (j * k))))))))))"
    );
}

#[test]
fn same_level_is_left_associative() {
    insta::assert_snapshot!(
        returned("a - b + c * d / e % f"),
        @"return ((a - b) + (((c * d) / e) % f))"
    );
}

#[test]
fn comparisons_chain_left() {
    insta::assert_snapshot!(returned("a < b == c"), @"return ((a < b) == c)");
}

#[test]
fn parentheses_group() {
    insta::assert_snapshot!(returned("(a || b) && c"), @"return ((a || b) && c)");
}

#[test]
fn calls_bind_tighter_than_operators() {
    insta::assert_snapshot!(returned("f(x) + g(y, z)(w)"), @"return (f(x) + g(y, z)(w))");
}

#[test]
fn call_arguments_are_expressions() {
    insta::assert_snapshot!(returned("f(g(1), (x), a * b)"), @"return f(g(1), x, (a * b))");
}

#[test]
fn literals() {
    insta::assert_snapshot!(
        returned("f(0, 12_000, 1.5e3, 0b1, 0x7F, 0644, true, false, null)"),
        @"return f(0, 12_000, 1.5e3, 0b1, 0x7F, 0644, true, false, null)"
    );
}

#[test]
fn binary_expr_cst() {
    let parsed = parse_valid("fn f() int { return a * (b + 1) }");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
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
          stmts: StmtList
            stmt: ReturnStmt
              KwReturn "return"
              expr: BinaryExpr
                lhs_expr: NameRef
                  name: Id "a"
                operator: Star "*"
                rhs_expr: ParenExpr
                  ParenOpen "("
                  expr: BinaryExpr
                    lhs_expr: NameRef
                      name: Id "b"
                    operator: Plus "+"
                    rhs_expr: Literal
                      IntLiteral "1"
                  ParenClose ")"
          BraceClose "}"
    "#);
}

#[test]
fn call_cst() {
    let parsed = parse_valid("fn f() int { return g(a, 1)() }");
    let dump = parsed.dump_cst();
    let call_section: Vec<_> = dump
        .lines()
        .skip_while(|l| !l.contains("expr: CallExpr"))
        .take(11)
        .map(str::trim)
        .collect();
    assert_eq!(
        call_section,
        [
            "expr: CallExpr",
            "fn: CallExpr",
            "fn: NameRef",
            "name: Id \"g\"",
            "ParenOpen \"(\"",
            "arguments: ArgList",
            "args: NameRef",
            "name: Id \"a\"",
            "Comma \",\"",
            "args: Literal",
            "IntLiteral \"1\"",
        ]
    );
}
