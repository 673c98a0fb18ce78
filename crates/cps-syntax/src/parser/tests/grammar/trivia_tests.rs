use crate::test_utils::parse_valid;
use indoc::indoc;

#[test]
fn leading_comment_belongs_to_program() {
    let input = indoc! {r#"
    // c
    fn f() int {}
    "#};

    let parsed = parse_valid(input);

    insta::assert_snapshot!(parsed.dump_cst_full(), @r#"
    Program
      LineComment "// c"
      Newline "\n"
      top_level_def: FunctionDef
        KwFn "fn"
        Whitespace " "
        name: Id "f"
        ParenOpen "("
        ParenClose ")"
        Whitespace " "
        return_types: TypeList
          types: NamedType
            name: Id "int"
        Whitespace " "
        body: Block
          BraceOpen "{"
          BraceClose "}"
      Newline "\n"
    "#);
}

#[test]
fn comments_inside_statements() {
    let input = indoc! {r#"
    fn f() int {
      return /* value */ a // done
    }
    "#};

    let parsed = parse_valid(input);
    let text = parsed.syntax().to_string();
    assert_eq!(text, input);

    let ret = parsed
        .syntax()
        .descendants()
        .find(|n| n.kind() == crate::SyntaxKind::ReturnStmt)
        .unwrap();
    assert_eq!(ret.text().to_string(), "return /* value */ a");
}

#[test]
fn nodes_never_start_with_trivia() {
    let input = indoc! {r#"
    /* head */
    namespace n {
      // inner
      fn f(int a) int {
        var x int = a; // trailing
        return x
      }
    }
    "#};

    let parsed = parse_valid(input);
    for node in parsed.syntax().descendants().skip(1) {
        let first = node.first_token().expect("non-empty node");
        assert!(!first.kind().is_trivia(), "{:?} starts with {:?}", node.kind(), first.kind());
    }
}

#[test]
fn spans_are_byte_offsets() {
    let parsed = parse_valid("fn f() int {}");

    insta::assert_snapshot!(parsed.dump_cst_with_spans(), @r#"
    Program [0..13]
      top_level_def: FunctionDef [0..13]
        KwFn [0..2] "fn"
        name: Id [3..4] "f"
        ParenOpen [4..5] "("
        ParenClose [5..6] ")"
        return_types: TypeList [7..10]
          types: NamedType [7..10]
            name: Id [7..10] "int"
        body: Block [11..13]
          BraceOpen [11..12] "{"
          BraceClose [12..13] "}"
    "#);
}
