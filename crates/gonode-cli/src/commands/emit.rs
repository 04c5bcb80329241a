use std::fs;
use std::path::PathBuf;

use gonode_compiler::emit::native;
use gonode_compiler::pipeline::extract_all;
use gonode_compiler::typegen::typescript;

use super::project::load_sources;
use super::reporter::TracingReporter;
use super::run_common::{fail, report_error};

/// Artifact printed by `gonode emit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Native,
    Types,
}

pub struct EmitArgs {
    pub files: Vec<PathBuf>,
    pub name: String,
    pub target: Target,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: EmitArgs) {
    let mut reporter = TracingReporter;
    let sources = load_sources(&args.files).unwrap_or_else(|msg| fail(msg));
    let ir = extract_all(&sources, &mut reporter)
        .unwrap_or_else(|e| report_error(&e, &sources, args.color));

    let rendered = match args.target {
        Target::Native => native::emit(&ir, &native::Config::new(&args.name)),
        Target::Types => typescript::emit(&ir, &typescript::Config::new(&args.name)),
    }
    .unwrap_or_else(|e| fail(e));

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, rendered) {
                fail(format!("failed to write '{}': {}", path.display(), e));
            }
        }
        None => print!("{}", rendered),
    }
}
