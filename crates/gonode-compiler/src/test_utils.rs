//! Test helpers shared across modules.

use gonode_core::{BoundaryType, ExportedFunction};

use crate::analyze::{ExtractError, extract};

/// Extract IR from a source that must be valid, rendering one record per line.
///
/// Documentation, when present, follows its record indented by two spaces.
pub fn render_ir(source: &str) -> String {
    let ir = match extract(source) {
        Ok(ir) => ir,
        Err(e) => panic!("expected valid source, got: {}", e.printer().render()),
    };

    let mut lines = Vec::new();
    for func in &ir {
        lines.push(func.to_string());
        lines.extend(func.doc.lines().map(|line| format!("  {line}")));
    }
    lines.join("\n")
}

/// Extract from a source that must be rejected, returning the error.
pub fn extract_err(source: &str) -> ExtractError {
    match extract(source) {
        Ok(ir) => panic!("expected extraction to fail, got {} records", ir.len()),
        Err(e) => e,
    }
}

/// The two-function IR used across emitter tests.
pub fn sample_ir() -> Vec<ExportedFunction> {
    vec![
        ExportedFunction::new("Sum")
            .param("x", BoundaryType::Numeric)
            .param("y", BoundaryType::Numeric)
            .returns(BoundaryType::Numeric)
            .doc("Sums up two numbers"),
        ExportedFunction::new("Greet")
            .param("name", BoundaryType::Text)
            .returns(BoundaryType::Text),
    ]
}
