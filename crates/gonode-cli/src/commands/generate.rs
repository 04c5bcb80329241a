use std::path::PathBuf;

use gonode_compiler::pipeline;
use tracing::info;

use super::project::load_project;
use super::reporter::TracingReporter;
use super::run_common::{fail, report_error};

pub struct GenerateArgs {
    pub dir: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let mut reporter = TracingReporter;
    let project = load_project(&args.dir, args.config.as_deref(), &mut reporter)
        .unwrap_or_else(|msg| fail(msg));
    let output_dir = args.output.unwrap_or_else(|| project.output_dir());

    match pipeline::run(
        &project.sources,
        &project.config.name,
        &output_dir,
        &mut reporter,
    ) {
        Ok(Some(dir)) => info!(dir = %dir.display(), "generated `{}`", project.config.name),
        Ok(None) => {}
        Err(e) => report_error(&e, &project.sources, args.color),
    }
}
