use std::cell::Cell;

use crate::{Error, ParseBuilder};

fn nested_parens(depth: usize) -> String {
    format!(
        "fn f() int {{ return {}1{} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    )
}

#[test]
fn exec_fuel_counts_consumed_tokens() {
    let parsed = ParseBuilder::new("fn f() int {}").parse().unwrap();
    assert_eq!(parsed.exec_fuel_consumed(), 7);
}

#[test]
fn exec_fuel_exactly_enough() {
    let result = ParseBuilder::new("fn f() int {}").with_exec_fuel(Some(7)).parse();
    assert!(result.is_ok());
}

#[test]
fn exec_fuel_exhausted() {
    let result = ParseBuilder::new("fn f() int {}").with_exec_fuel(Some(6)).parse();
    assert!(
        matches!(result, Err(Error::ExecFuelExhausted)),
        "expected ExecFuelExhausted, got {:?}",
        result.map(|p| p.diagnostics().len())
    );
}

#[test]
fn exec_fuel_unlimited() {
    let input = "fn f() int { return 1 }\n".repeat(200);
    let parsed = ParseBuilder::new(input).with_exec_fuel(None).parse().unwrap();
    assert!(parsed.is_valid());
    assert_eq!(parsed.exec_fuel_consumed(), 0);
}

#[test]
fn exec_fuel_applies_to_error_recovery() {
    let input = "x ".repeat(100);
    let result = ParseBuilder::new(input).with_exec_fuel(Some(50)).parse();
    assert!(matches!(result, Err(Error::ExecFuelExhausted)));
}

#[test]
fn deeply_nested_parens_hit_recursion_limit() {
    let result = ParseBuilder::new(nested_parens(100))
        .with_recursion_fuel(Some(64))
        .parse();
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn deeply_nested_blocks_hit_recursion_limit() {
    let input = format!("fn f() int {}{}", "{ ".repeat(101), "} ".repeat(101));
    let result = ParseBuilder::new(input).with_recursion_fuel(Some(64)).parse();
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn deeply_nested_namespaces_hit_recursion_limit() {
    let input = format!("{}{}", "namespace n { ".repeat(100), "} ".repeat(100));
    let result = ParseBuilder::new(input).with_recursion_fuel(Some(64)).parse();
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn nesting_within_limit_parses() {
    let parsed = ParseBuilder::new(nested_parens(40))
        .with_recursion_fuel(Some(128))
        .parse()
        .unwrap();
    assert!(parsed.is_valid());
}

#[test]
fn recursion_unlimited() {
    let parsed = ParseBuilder::new(nested_parens(100))
        .with_recursion_fuel(None)
        .parse()
        .unwrap();
    assert!(parsed.is_valid());
}

#[test]
fn cancellation_before_first_definition() {
    let result = ParseBuilder::new("fn f() int {}").with_cancellation(|| true).parse();
    assert!(matches!(result, Err(Error::Cancelled)));
}

#[test]
fn cancellation_between_definitions() {
    let polls = Cell::new(0);
    let input = "fn a() int {}\nfn b() int {}\nfn c() int {}\nfn d() int {}";
    let result = ParseBuilder::new(input)
        .with_cancellation(|| {
            polls.set(polls.get() + 1);
            polls.get() > 2
        })
        .parse();
    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(polls.get(), 3);
}

#[test]
fn cancellation_inside_nested_namespaces() {
    let polls = Cell::new(0);
    let input = "namespace a { namespace b { fn f() int {} fn g() int {} } }";
    let result = ParseBuilder::new(input)
        .with_cancellation(|| {
            polls.set(polls.get() + 1);
            polls.get() > 3
        })
        .parse();
    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(polls.get(), 4);
}

#[test]
fn exec_fuel_runs_out_while_nested() {
    let input = format!("namespace a {{ {} }}", nested_parens(20));
    let result = ParseBuilder::new(input).with_exec_fuel(Some(12)).parse();
    assert!(matches!(result, Err(Error::ExecFuelExhausted)));
}

#[test]
fn cancellation_polled_once_per_definition() {
    let polls = Cell::new(0);
    let input = "fn a() int {}\nnamespace n;\nfn c() int {}";
    let parsed = ParseBuilder::new(input)
        .with_cancellation(|| {
            polls.set(polls.get() + 1);
            false
        })
        .parse()
        .unwrap();
    assert!(parsed.is_valid());
    assert_eq!(polls.get(), 3);
}

#[test]
fn errors_display() {
    assert_eq!(Error::ExecFuelExhausted.to_string(), "execution limit exceeded");
    assert_eq!(Error::RecursionLimitExceeded.to_string(), "recursion limit exceeded");
    assert_eq!(Error::Cancelled.to_string(), "parse cancelled");
}
