use crate::test_utils::parse_valid;
use indoc::indoc;

#[test]
fn every_statement_form() {
    let input = indoc! {r#"
    fn f(int n) int {
      var x int = 0;
      let y *int = p;
      if (n > 0) { x += 1; x -= 2 } else return x;
      while (x < 10) x *= 2;
      do { suspend } while (x);
      for (;;;) break;
      :again goto again;
      { continue };
      return
    }
    "#};

    let parsed = parse_valid(input);

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    fn f(int n) int
      var x int = 0
      let y *int = p
      if (n > 0)
        x += 1
        x -= 2
      else
        return x
      while (x < 10)
        x *= 2
      do
        suspend
      while x
      for _; _; _
        break
      :again
        goto again
      block
        continue
      return
    ");
}

#[test]
fn all_assignment_operators() {
    let input = "fn f() int { a = 1; a += 1; a -= 1; a *= 1; a /= 1; a %= 1; a <<= 1; a >>= 1; a &= 1; a ^= 1; a |= 1 }";
    let parsed = parse_valid(input);
    assert_eq!(parsed.dump_ast().lines().count(), 12);
}

#[test]
fn for_statement_cst() {
    let parsed = parse_valid("fn f() int { for (var i int = 0; i < 3; i += 1;) x += i }");

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
            stmt: ForStmt
              KwFor "for"
              ParenOpen "("
              initializer: VarDef
                KwVar "var"
                name: Id "i"
                type: NamedType
                  name: Id "int"
                Eq "="
                expr: Literal
                  IntLiteral "0"
              Semicolon ";"
              condition: BinaryExpr
                lhs_expr: NameRef
                  name: Id "i"
                operator: Lt "<"
                rhs_expr: Literal
                  IntLiteral "3"
              Semicolon ";"
              update: Assignment
                name: Id "i"
                operator: PlusEq "+="
                value: Literal
                  IntLiteral "1"
              Semicolon ";"
              ParenClose ")"
              body: Assignment
                name: Id "x"
                operator: PlusEq "+="
                value: NameRef
                  name: Id "i"
          BraceClose "}"
    "#);
}

#[test]
fn for_header_with_some_slots() {
    let parsed = parse_valid(indoc! {r#"
    fn f() int {
      for (i = 0; ; ;) suspend;
      for (; ; i += 1;) { }
    }
    "#});

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    fn f() int
      for i = 0; _; _
        suspend
      for _; _; i += 1
    ");
}

#[test]
fn labeled_statement_cst() {
    let parsed = parse_valid("fn f() int { :top if (x) goto top }");

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
            stmt: LabeledStmt
              Colon ":"
              label: Id "top"
              stmt: IfStmt
                KwIf "if"
                ParenOpen "("
                cond_expr: NameRef
                  name: Id "x"
                ParenClose ")"
                true_stmt: GotoStmt
                  KwGoto "goto"
                  label: Id "top"
          BraceClose "}"
    "#);
}

#[test]
fn nested_blocks() {
    let parsed = parse_valid("fn f() int { { { return } } }");

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    fn f() int
      block
        block
          return
    ");
}

#[test]
fn else_if_chain() {
    let parsed = parse_valid("fn f() int { if (a) return 1 else if (b) return 2 else return 3 }");

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    fn f() int
      if a
        return 1
      else
        if b
          return 2
        else
          return 3
    ");
}

#[test]
fn return_with_and_without_value() {
    let parsed = parse_valid("fn f() int { if (a) return; return g(a) }");

    insta::assert_snapshot!(parsed.snapshot_ast(), @r"
    fn f() int
      if a
        return
      return g(a)
    ");
}
