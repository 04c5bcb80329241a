//! Output rendering methods.

use gonode_core::{BoundaryType, ExportedFunction};

use super::Emitter;

pub(super) fn ts_type(ty: BoundaryType) -> &'static str {
    match ty {
        BoundaryType::Text => "string",
        BoundaryType::Numeric => "number",
    }
}

impl Emitter<'_> {
    pub(super) fn emit_interface_open(&mut self, name: &str) {
        if self.config.export {
            self.output.push_str("export ");
        }
        self.output.push_str(&format!("interface {} {{\n", name));
    }

    pub(super) fn emit_member(&mut self, func: &ExportedFunction) {
        self.emit_doc(&func.doc);

        let params = func
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, ts_type(p.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        let ret = match func.return_type {
            Some(ty) => ts_type(ty),
            None => self.config.void_type.as_str(),
        };

        self.output.push_str(&format!(
            "  {}: ({}) => {};\n",
            func.external_name(),
            params,
            ret
        ));
    }

    /// Render `doc` as a JSDoc block, one line per doc line.
    ///
    /// The text is copied verbatim except that `*/` becomes `*\/`, which would
    /// otherwise close the block early. Docs containing `*/` are therefore
    /// not reproduced byte for byte.
    fn emit_doc(&mut self, doc: &str) {
        if doc.is_empty() {
            return;
        }

        self.output.push_str("  /**\n");
        for line in doc.lines() {
            let line = line.replace("*/", "*\\/");
            if line.is_empty() {
                self.output.push_str("   *\n");
            } else {
                self.output.push_str(&format!("   * {}\n", line));
            }
        }
        self.output.push_str("   */\n");
    }

    pub(super) fn emit_binding(&mut self, name: &str) {
        let path = self
            .config
            .require_path
            .as_deref()
            .unwrap_or(&self.config.module);

        self.output.push_str(&format!(
            "const addon: {} = require(\"{}\");\n\nexport default addon;\n",
            name, path
        ));
    }
}
