mod grammar {
    mod definitions_tests;
    mod expressions_tests;
    mod statements_tests;
    mod trivia_tests;
    mod types_tests;
}

mod recovery {
    mod coverage_tests;
    mod lexical_tests;
    mod limits_tests;
    mod separators_tests;
    mod unclosed_tests;
    mod unexpected_tests;
    mod unsupported_tests;
}
