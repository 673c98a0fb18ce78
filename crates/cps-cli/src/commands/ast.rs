//! Show the typed outline of a program.

use super::run_common::{Limits, SourceInput, load_and_parse, report_diagnostics};

pub struct AstArgs {
    pub input: SourceInput,
    pub limits: Limits,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let parsed = load_and_parse(&args.input, args.limits);
    print!("{}", parsed.ast_printer().with_spans(args.spans).dump());
    report_diagnostics(&parsed, args.color);
}
