//! Show the token stream.

use std::fmt::Write;

use cps_syntax::{Parsed, Span};
use serde::Serialize;

use super::run_common::{Limits, SourceInput, load_and_parse, report_diagnostics};

pub struct TokensArgs {
    pub input: SourceInput,
    pub limits: Limits,
    pub trivia: bool,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: String,
    text: &'a str,
    span: Span,
}

pub fn run(args: TokensArgs) {
    let parsed = load_and_parse(&args.input, args.limits);

    if args.json {
        match format_json(&parsed, args.trivia) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_text(&parsed, args.trivia));
    }

    report_diagnostics(&parsed, args.color);
}

fn records(parsed: &Parsed, trivia: bool) -> Vec<TokenRecord<'_>> {
    parsed
        .tokens()
        .iter()
        .filter(|token| trivia || !token.kind.is_trivia())
        .map(|token| TokenRecord {
            kind: format!("{:?}", token.kind),
            text: parsed.token_text(token),
            span: parsed.span(token.span),
        })
        .collect()
}

/// One token per line: kind, `line:col-line:col`, quoted text.
pub fn format_text(parsed: &Parsed, trivia: bool) -> String {
    let mut out = String::new();
    for record in records(parsed, trivia) {
        let _ = writeln!(out, "{} {} {:?}", record.kind, record.span, record.text);
    }
    out
}

pub fn format_json(parsed: &Parsed, trivia: bool) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&records(parsed, trivia))
}
