use crate::test_utils::parse_valid;
use indoc::indoc;

#[test]
fn function_with_params() {
    let parsed = parse_valid("fn add(int a, int b) int { return a + b }");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
      top_level_def: FunctionDef
        KwFn "fn"
        name: Id "add"
        ParenOpen "("
        params: ParamList
          param: Param
            type: NamedType
              name: Id "int"
            name: Id "a"
          Comma ","
          param: Param
            type: NamedType
              name: Id "int"
            name: Id "b"
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
                operator: Plus "+"
                rhs_expr: NameRef
                  name: Id "b"
          BraceClose "}"
    "#);
}

#[test]
fn namespace_with_body() {
    let parsed = parse_valid("namespace ns { fn f() int {} }");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
      top_level_def: NamespaceDef
        KwNamespace "namespace"
        name: Id "ns"
        BraceOpen "{"
        defs: FunctionDef
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
        BraceClose "}"
    "#);
}

#[test]
fn namespace_set() {
    let parsed = parse_valid("namespace std;");

    insta::assert_snapshot!(parsed.snapshot_cst(), @r#"
    Program
      top_level_def: NamespaceSetDef
        KwNamespace "namespace"
        name: Id "std"
        Semicolon ";"
    "#);
}

#[test]
fn tail_functions_and_coroutines() {
    let input = indoc! {r#"
    tail fn step(int n, *int acc) int { return n }
    coro gen() int, bool { suspend }
    "#};

    let parsed = parse_valid(input);

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    tail fn step(int n, *int acc) int
      return n
    coro gen() int, bool
      suspend
    ");
}

#[test]
fn nested_namespaces() {
    let input = indoc! {r#"
    namespace outer {
      namespace inner {
        fn f() int {}
      }
      namespace outer;
    }
    fn main() int {}
    "#};

    let parsed = parse_valid(input);

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    namespace outer
      namespace inner
        fn f() int
      namespace outer;
    fn main() int
    ");
}

#[test]
fn empty_program() {
    let parsed = parse_valid("");
    insta::assert_snapshot!(parsed.snapshot_cst(), @"Program");
    assert_eq!(parsed.root().defs().count(), 0);
}

#[test]
fn only_trivia() {
    let parsed = parse_valid("  // nothing here\n/* at all */\n");
    assert_eq!(parsed.root().defs().count(), 0);
    insta::assert_snapshot!(parsed.dump_cst_full(), @r#"
    Program
      Whitespace "  "
      LineComment "// nothing here"
      Newline "\n"
      BlockComment "/* at all */"
      Newline "\n"
    "#);
}

#[test]
fn definitions_in_source_order() {
    let parsed = parse_valid("coro c() int {} namespace n; tail fn t() int {} fn f() int {}");
    let names: Vec<_> = parsed
        .root()
        .defs()
        .map(|d| d.name().unwrap().text().to_string())
        .collect();
    assert_eq!(names, ["c", "n", "t", "f"]);
}
