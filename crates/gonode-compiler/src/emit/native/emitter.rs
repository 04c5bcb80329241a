//! Wrapper assembly from templates.

use gonode_core::ExportedFunction;

use super::Config;
use super::templates::{
    arg_count_check, arg_type_check, arg_unmarshal, call_statement, register_method,
    result_marshal, wrapper_name,
};
use crate::emit::{EmitError, validate, validate_module};

/// Emit the C++ addon source for an IR sequence.
pub fn emit(ir: &[ExportedFunction], config: &Config) -> Result<String, EmitError> {
    Emitter::new(config).emit(ir)
}

/// C++ emitter for the legacy Node.js addon API.
pub struct Emitter<'c> {
    config: &'c Config,
    output: String,
}

impl<'c> Emitter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn emit(mut self, ir: &[ExportedFunction]) -> Result<String, EmitError> {
        validate(ir)?;
        validate_module(self.config.module())?;

        self.emit_prologue();
        for func in ir {
            self.emit_wrapper(func);
        }
        self.emit_init(ir);

        Ok(self.output)
    }

    fn emit_prologue(&mut self) {
        self.output.push_str(&format!(
            "#include \"{}\"\n#include <node.h>\n\n",
            self.config.header_path()
        ));
        self.output
            .push_str(&format!("namespace {} {{\n\n", self.config.module()));
        self.output
            .push_str("using namespace v8;\nusing namespace node;\n\n");
    }

    fn emit_wrapper(&mut self, func: &ExportedFunction) {
        let mut sections = vec![String::from(
            "  Isolate *isolate = args.GetIsolate();\n  HandleScope scope(isolate);\n",
        )];

        if !func.params.is_empty() {
            sections.push(arg_count_check(func.params.len()));
            sections.push(
                func.params
                    .iter()
                    .enumerate()
                    .map(|(i, p)| arg_type_check(i, p))
                    .collect(),
            );
            sections.push(
                func.params
                    .iter()
                    .enumerate()
                    .map(|(i, p)| arg_unmarshal(i, p))
                    .collect(),
            );
        }

        let mut call = call_statement(func);
        if let Some(ty) = func.return_type {
            call.push_str(&result_marshal(ty));
        }
        sections.push(call);

        self.output.push_str(&format!(
            "void {}(const FunctionCallbackInfo<Value> &args) {{\n",
            wrapper_name(func)
        ));
        self.output.push_str(&sections.join("\n"));
        self.output.push_str("}\n\n");
    }

    fn emit_init(&mut self, ir: &[ExportedFunction]) {
        self.output.push_str("void Init(Local<Object> exports) {\n");
        for func in ir {
            self.output.push_str(&register_method(func));
        }
        self.output.push_str("}\n\n");
        self.output
            .push_str("NODE_MODULE(NODE_GYP_MODULE_NAME, Init)\n\n");
        self.output
            .push_str(&format!("}}  // namespace {}\n", self.config.module()));
    }
}
