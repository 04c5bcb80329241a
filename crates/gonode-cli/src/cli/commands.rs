//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gonode")
        .about("Generate Node.js addon bindings for exported Go functions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(ir_command())
        .subcommand(emit_command())
}

/// Run the full pipeline and write the artifacts.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate the native wrapper and TypeScript declaration")
        .after_help(
            r#"EXAMPLES:
  gonode generate                     # project in current directory
  gonode generate ./calculator        # project directory
  gonode generate -c addon.yaml       # explicit configuration file
  gonode generate -o build            # write build/gonode/"#,
        )
        .arg(project_dir_arg())
        .arg(config_arg())
        .arg(output_dir_arg())
        .arg(color_arg())
}

/// Extract and validate without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check that every exported function can be bound")
        .after_help(
            r#"EXAMPLES:
  gonode check                        # project in current directory
  gonode check ./calculator -c ci.yaml"#,
        )
        .arg(project_dir_arg())
        .arg(config_arg())
        .arg(color_arg())
}

/// Print the extracted IR.
pub fn ir_command() -> Command {
    Command::new("ir")
        .about("Print extracted signatures as JSON")
        .override_usage(
            "\
  gonode ir [DIR]
  gonode ir -s <FILE> [-s <FILE>...]",
        )
        .after_help(
            r#"EXAMPLES:
  gonode ir                           # configured project
  gonode ir -s go/calculator.go       # single file
  gonode ir --compact | jq '.[].name'"#,
        )
        .arg(project_dir_arg())
        .arg(source_files_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Print one artifact for ad-hoc files.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Print one artifact for the given Go files")
        .after_help(
            r#"EXAMPLES:
  gonode emit calc.go -n calculator                 # C++ wrapper
  gonode emit calc.go -n calculator --target types  # TypeScript declaration
  gonode emit a.go b.go -n lib -o lib.cc"#,
        )
        .arg(go_files_arg())
        .arg(name_arg())
        .arg(target_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}
