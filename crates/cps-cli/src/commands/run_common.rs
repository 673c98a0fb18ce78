//! Shared input loading and parsing for all commands.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use cps_syntax::{ParseBuilder, Parsed, Source};

/// Where the source comes from: positional FILE (or "-") or `-s TEXT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

/// Parser limits from the command line. `None` keeps the library default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

/// Load source code from inline text, stdin, or a file.
pub fn load_source(input: &SourceInput) -> Result<Source, String> {
    if let Some(text) = &input.text {
        return Ok(Source::new(text.as_str()));
    }

    let Some(path) = &input.path else {
        return Err("source is required: use positional FILE, \"-\" for stdin, or -s/--source".to_string());
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(Source::new(buf).name("<stdin>"));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(Source::new(content).name(path.to_string_lossy()))
}

/// Parse with the requested limits.
pub fn parse_source(source: Source, limits: Limits) -> cps_syntax::Result<Parsed> {
    let mut builder = ParseBuilder::new(source);
    if let Some(fuel) = limits.exec_fuel {
        builder = builder.with_exec_fuel(Some(fuel));
    }
    if let Some(depth) = limits.recursion_fuel {
        builder = builder.with_recursion_fuel(Some(depth));
    }
    builder.parse()
}

/// Load and parse, exiting with status 1 when either step fails.
///
/// Syntax errors are not failures here: the tree is returned alongside them.
pub fn load_and_parse(input: &SourceInput, limits: Limits) -> Parsed {
    let source = load_source(input).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    parse_source(source, limits).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Write rendered diagnostics to stderr, if there are any.
pub fn report_diagnostics(parsed: &Parsed, color: bool) {
    if !parsed.is_valid() {
        eprintln!("{}", parsed.render_diagnostics(color));
    }
}
