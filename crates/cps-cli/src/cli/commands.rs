//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.
//! Every command takes a source (positional FILE or `-s TEXT`), `--color`,
//! and the parser limits.

use clap::Command;

use super::args::*;

/// Source input, color and parser limits, shared by all subcommands.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(color_arg())
        .arg(fuel_arg())
        .arg(max_depth_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cps")
        .about("Parser front end for the cps language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(cst_command())
        .subcommand(ast_command())
        .subcommand(check_command())
}

/// Show the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream with line:column spans")
        .override_usage(
            "\
  cps tokens <FILE>
  cps tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cps tokens main.cps                 # significant tokens
  cps tokens main.cps --trivia        # include whitespace and comments
  cps tokens -s 'fn f() int {}' --json"#,
        )
        .arg(trivia_arg())
        .arg(json_arg());

    with_common_args(cmd)
}

/// Show the concrete syntax tree.
pub fn cst_command() -> Command {
    let cmd = Command::new("cst")
        .about("Show the concrete syntax tree")
        .override_usage(
            "\
  cps cst <FILE>
  cps cst -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cps cst main.cps                    # tree with field labels
  cps cst main.cps --spans --trivia   # byte ranges, whitespace and comments
  cps cst -s 'namespace ns;' --no-fields"#,
        )
        .arg(spans_arg())
        .arg(trivia_arg())
        .arg(no_fields_arg());

    with_common_args(cmd)
}

/// Show the typed outline.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the typed outline of a program")
        .override_usage(
            "\
  cps ast <FILE>
  cps ast -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cps ast main.cps
  cps ast main.cps --spans
  cps ast -s 'fn f() int { return 1 + 2 * 3 }'"#,
        )
        .arg(spans_arg());

    with_common_args(cmd)
}

/// Validate a source file.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check a source file for errors")
        .override_usage(
            "\
  cps check <FILE>
  cps check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cps check main.cps                  # silent on success, exit 1 on errors
  cps check - < main.cps              # read from stdin
  cps check -s 'fn f() int { x = }' --color never"#,
        );

    with_common_args(cmd)
}
