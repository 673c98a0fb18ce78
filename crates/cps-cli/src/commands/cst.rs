//! Show the concrete syntax tree.

use cps_syntax::Parsed;

use super::run_common::{Limits, SourceInput, load_and_parse, report_diagnostics};

pub struct CstArgs {
    pub input: SourceInput,
    pub limits: Limits,
    pub spans: bool,
    pub trivia: bool,
    pub fields: bool,
    pub color: bool,
}

pub fn run(args: CstArgs) {
    let parsed = load_and_parse(&args.input, args.limits);
    print!("{}", render(&parsed, &args));
    report_diagnostics(&parsed, args.color);
}

pub fn render(parsed: &Parsed, args: &CstArgs) -> String {
    parsed
        .cst_printer()
        .with_spans(args.spans)
        .with_trivia(args.trivia)
        .with_fields(args.fields)
        .dump()
}
