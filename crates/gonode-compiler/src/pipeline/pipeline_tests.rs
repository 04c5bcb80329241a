use std::fs;

use indoc::indoc;

use super::{
    Artifact, Event, NullReporter, OUTPUT_SUBDIR, SourceFile, extract_all, generate, run,
    write_outputs,
};
use crate::Error;
use crate::analyze::ExtractError;
use crate::emit::EmitError;

fn calculator() -> SourceFile {
    SourceFile::new(
        "go/calculator.go",
        indoc! {r#"
            package main

            import "C"

            // Sums up two numbers
            //export Sum
            func Sum(x, y float64) float64 {
                return x + y
            }

            func main() {}
        "#},
    )
}

fn greeter() -> SourceFile {
    SourceFile::new(
        "go/greeter.go",
        indoc! {r#"
            package main

            import "C"

            //export Greet
            func Greet(name *C.char) *C.char {
                return name
            }
        "#},
    )
}

fn broken() -> SourceFile {
    SourceFile::new(
        "go/broken.go",
        indoc! {r#"
            package main

            //export Values
            func Values(xs []int) int { return 0 }
        "#},
    )
}

#[test]
fn ir_concatenated_in_file_order() {
    let mut events: Vec<Event> = Vec::new();
    let ir = extract_all(&[greeter(), calculator()], &mut events).unwrap();

    let names: Vec<&str> = ir.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Greet", "Sum"]);
    assert_eq!(
        events,
        vec![
            Event::FileExtracted {
                path: "go/greeter.go".into(),
                exported: 1
            },
            Event::FileExtracted {
                path: "go/calculator.go".into(),
                exported: 1
            },
        ]
    );
}

#[test]
fn extraction_error_carries_path() {
    let err = extract_all(&[calculator(), broken()], &mut NullReporter).unwrap_err();

    let Error::Extract { path, source } = &err else {
        panic!("expected extraction error, got {err:?}");
    };
    assert_eq!(path.to_str(), Some("go/broken.go"));
    assert!(matches!(source, ExtractError::UnsupportedType { .. }));
    assert_eq!(
        err.to_string(),
        "go/broken.go: unsupported type `[]int` in `Values`"
    );
}

#[test]
fn generate_reports_both_artifacts() {
    let mut events: Vec<Event> = Vec::new();
    let ir = extract_all(&[calculator()], &mut NullReporter).unwrap();
    let generation = generate(&ir, "calculator", &mut events).unwrap();

    assert!(generation.native.contains("Sum_Func"));
    assert!(generation.declaration.contains("sum: (x: number, y: number) => number;"));
    assert_eq!(
        events,
        vec![
            Event::Emitted {
                artifact: Artifact::Native,
                bytes: generation.native.len()
            },
            Event::Emitted {
                artifact: Artifact::Declaration,
                bytes: generation.declaration.len()
            },
        ]
    );
}

#[test]
fn duplicate_export_across_files() {
    let ir = extract_all(&[calculator(), calculator()], &mut NullReporter).unwrap();
    let err = generate(&ir, "calculator", &mut NullReporter).unwrap_err();
    assert!(matches!(
        err,
        Error::Emit(EmitError::DuplicateExport { ref name }) if name == "sum"
    ));
}

#[test]
fn run_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut events: Vec<Event> = Vec::new();

    let written = run(&[calculator(), greeter()], "calculator", dir.path(), &mut events)
        .unwrap()
        .unwrap();

    assert_eq!(written, dir.path().join(OUTPUT_SUBDIR));
    let native = fs::read_to_string(written.join("calculator.cc")).unwrap();
    let declaration = fs::read_to_string(written.join("calculator.ts")).unwrap();
    assert!(native.starts_with("#include \"../calculator.h\"\n"));
    assert!(declaration.contains("greet: (name: string) => string;"));

    assert_eq!(
        events.last(),
        Some(&Event::Written {
            path: written.join("calculator.ts")
        })
    );
}

#[test]
fn run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let files = [calculator(), greeter()];

    let first = run(&files, "calculator", dir.path(), &mut NullReporter)
        .unwrap()
        .unwrap();
    let native = fs::read(first.join("calculator.cc")).unwrap();
    let declaration = fs::read(first.join("calculator.ts")).unwrap();

    let second = run(&files, "calculator", dir.path(), &mut NullReporter)
        .unwrap()
        .unwrap();
    assert_eq!(fs::read(second.join("calculator.cc")).unwrap(), native);
    assert_eq!(fs::read(second.join("calculator.ts")).unwrap(), declaration);
}

#[test]
fn stale_outputs_removed() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(OUTPUT_SUBDIR);
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("old.cc"), "stale").unwrap();

    run(&[calculator()], "calculator", dir.path(), &mut NullReporter).unwrap();

    assert!(!target.join("old.cc").exists());
    assert!(target.join("calculator.cc").exists());
}

#[test]
fn nothing_written_on_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = run(&[calculator(), broken()], "calculator", dir.path(), &mut NullReporter);

    assert!(matches!(result, Err(Error::Extract { .. })));
    assert!(!dir.path().join(OUTPUT_SUBDIR).exists());
}

#[test]
fn previous_outputs_kept_on_error() {
    let dir = tempfile::tempdir().unwrap();
    run(&[calculator()], "calculator", dir.path(), &mut NullReporter).unwrap();
    let cc = dir.path().join(OUTPUT_SUBDIR).join("calculator.cc");
    let before = fs::read(&cc).unwrap();

    let result = run(&[broken()], "calculator", dir.path(), &mut NullReporter);

    assert!(result.is_err());
    assert_eq!(fs::read(&cc).unwrap(), before);
}

#[test]
fn no_exports_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut events: Vec<Event> = Vec::new();
    let empty = SourceFile::new("go/main.go", "package main\n\nfunc main() {}\n");

    let written = run(&[empty], "calculator", dir.path(), &mut events).unwrap();

    assert_eq!(written, None);
    assert_eq!(events.last(), Some(&Event::NoExports));
    assert!(!dir.path().join(OUTPUT_SUBDIR).exists());
}

#[test]
fn write_outputs_reports_each_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut events: Vec<Event> = Vec::new();
    let generation = gonode_core::Generation {
        native: "// cc\n".to_string(),
        declaration: "// ts\n".to_string(),
    };

    let target = write_outputs(dir.path(), "m", &generation, &mut events).unwrap();

    assert_eq!(
        events,
        vec![
            Event::Written {
                path: target.join("m.cc")
            },
            Event::Written {
                path: target.join("m.ts")
            },
        ]
    );
    assert_eq!(fs::read_to_string(target.join("m.ts")).unwrap(), "// ts\n");
}

#[test]
fn read_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.go");

    let err = SourceFile::read(&path).unwrap_err();
    assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
}
