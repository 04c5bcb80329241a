//! Core emitter struct and main emit logic.

use gonode_core::ExportedFunction;
use gonode_core::utils::upper_first;

use super::Config;
use crate::emit::{EmitError, validate, validate_module};

/// Emit the TypeScript declaration module for an IR sequence.
pub fn emit(ir: &[ExportedFunction], config: &Config) -> Result<String, EmitError> {
    validate(ir)?;
    validate_module(&config.module)?;
    Ok(Emitter::new(config).emit(ir))
}

/// TypeScript emitter from IR.
pub struct Emitter<'c> {
    pub(super) config: &'c Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'c> Emitter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Interface name derived from the module name.
    pub fn interface_name(&self) -> String {
        upper_first(&self.config.module)
    }

    /// Emit the declaration module. The IR is expected to be validated.
    pub fn emit(mut self, ir: &[ExportedFunction]) -> String {
        let name = self.interface_name();

        self.emit_interface_open(&name);
        for func in ir {
            self.emit_member(func);
        }
        self.output.push_str("}\n\n");
        self.emit_binding(&name);

        self.output
    }
}
