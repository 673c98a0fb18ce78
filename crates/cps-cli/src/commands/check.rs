use super::run_common::{Limits, SourceInput, load_and_parse, report_diagnostics};

pub struct CheckArgs {
    pub input: SourceInput,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let parsed = load_and_parse(&args.input, args.limits);

    if !parsed.is_valid() {
        report_diagnostics(&parsed, args.color);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
