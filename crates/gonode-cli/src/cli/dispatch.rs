//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::emit::{EmitArgs, Target};
use crate::commands::generate::GenerateArgs;
use crate::commands::ir::IrArgs;

pub struct GenerateParams {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dir: m.get_one::<PathBuf>("dir").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            dir: p.dir.unwrap_or_else(current_dir),
            config: p.config,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dir: m.get_one::<PathBuf>("dir").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            dir: p.dir.unwrap_or_else(current_dir),
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct IrParams {
    pub dir: Option<PathBuf>,
    pub source_files: Vec<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl IrParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dir: m.get_one::<PathBuf>("dir").cloned(),
            source_files: m
                .get_many::<PathBuf>("source_files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<IrParams> for IrArgs {
    fn from(p: IrParams) -> Self {
        Self {
            dir: p.dir,
            source_files: p.source_files,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EmitParams {
    pub files: Vec<PathBuf>,
    pub name: String,
    pub target: Target,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            target: parse_target(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            files: p.files,
            name: p.name,
            target: p.target,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

/// Verbosity from repeated `-v` flags.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_target(m: &ArgMatches) -> Target {
    match m.get_one::<String>("target").map(|s| s.as_str()) {
        Some("types") => Target::Types,
        _ => Target::Native,
    }
}

fn current_dir() -> PathBuf {
    PathBuf::from(".")
}
