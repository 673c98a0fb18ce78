//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap matches
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::cst::CstArgs;
use crate::commands::run_common::{Limits, SourceInput};
use crate::commands::tokens::TokensArgs;

/// Source and limit flags every subcommand accepts.
pub struct CommonParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: ColorChoice,
    pub fuel: Option<u32>,
    pub max_depth: Option<u32>,
}

impl CommonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            color: parse_color(m),
            fuel: m.get_one::<u32>("fuel").copied(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
        }
    }

    fn input(&self) -> SourceInput {
        SourceInput {
            path: self.source_path.clone(),
            text: self.source_text.clone(),
        }
    }

    fn limits(&self) -> Limits {
        Limits {
            exec_fuel: self.fuel,
            recursion_fuel: self.max_depth,
        }
    }
}

pub struct TokensParams {
    pub common: CommonParams,
    pub trivia: bool,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
            trivia: m.get_flag("trivia"),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.common.input(),
            limits: p.common.limits(),
            trivia: p.trivia,
            json: p.json,
            color: p.common.color.should_colorize(),
        }
    }
}

pub struct CstParams {
    pub common: CommonParams,
    pub spans: bool,
    pub trivia: bool,
    pub no_fields: bool,
}

impl CstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
            spans: m.get_flag("spans"),
            trivia: m.get_flag("trivia"),
            no_fields: m.get_flag("no_fields"),
        }
    }
}

impl From<CstParams> for CstArgs {
    fn from(p: CstParams) -> Self {
        Self {
            input: p.common.input(),
            limits: p.common.limits(),
            spans: p.spans,
            trivia: p.trivia,
            fields: !p.no_fields,
            color: p.common.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub common: CommonParams,
    pub spans: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.common.input(),
            limits: p.common.limits(),
            spans: p.spans,
            color: p.common.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub common: CommonParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            common: CommonParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.common.input(),
            limits: p.common.limits(),
            color: p.common.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
