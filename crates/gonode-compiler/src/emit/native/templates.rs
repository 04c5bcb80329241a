//! Code templates for the native wrapper.
//!
//! Each template renders one construct of a wrapper function body, already
//! indented for its position and terminated by a newline.

use gonode_core::{BoundaryType, ExportedFunction, Parameter};

/// Prefix of the C++ local holding a converted argument.
pub const ARG_PREFIX: &str = "go_";
/// Suffix of the generated callback wrapping a Go function.
pub const WRAPPER_SUFFIX: &str = "_Func";

const INDENT: &str = "  ";

pub fn local_name(param: &Parameter) -> String {
    format!("{}{}", ARG_PREFIX, param.name)
}

/// UTF-8 buffer backing a text argument. Named by position, outside the
/// `go_` namespace, so no parameter name can collide with it.
pub fn utf8_buffer_name(index: usize) -> String {
    format!("utf8_arg{index}")
}

pub fn wrapper_name(func: &ExportedFunction) -> String {
    format!("{}{}", func.name, WRAPPER_SUFFIX)
}

/// Host-side type name, as shown in argument type errors.
fn js_type(ty: BoundaryType) -> &'static str {
    match ty {
        BoundaryType::Text => "string",
        BoundaryType::Numeric => "number",
    }
}

fn throw_type_error(message: &str) -> String {
    format!(
        "{i}{i}isolate->ThrowException(Exception::TypeError(\n\
         {i}{i}{i}{i}String::NewFromUtf8(isolate, \"{message}\").ToLocalChecked()));\n\
         {i}{i}return;\n",
        i = INDENT
    )
}

/// Throw and return when fewer than `expected` arguments were passed.
pub fn arg_count_check(expected: usize) -> String {
    format!(
        "{i}if (args.Length() < {expected}) {{\n{body}{i}}}\n",
        i = INDENT,
        body = throw_type_error(&format!(
            "Wrong number of arguments (expected {expected})"
        )),
    )
}

/// Throw and return when argument `index` has the wrong JavaScript type.
pub fn arg_type_check(index: usize, param: &Parameter) -> String {
    let predicate = match param.ty {
        BoundaryType::Text => "IsString",
        BoundaryType::Numeric => "IsNumber",
    };
    format!(
        "{i}if (!args[{index}]->{predicate}()) {{\n{body}{i}}}\n",
        i = INDENT,
        body = throw_type_error(&format!(
            "Wrong type for argument {} (expected {})",
            param.name,
            js_type(param.ty)
        )),
    )
}

/// Convert argument `index` into a local of the Go-side C type.
pub fn arg_unmarshal(index: usize, param: &Parameter) -> String {
    let local = local_name(param);
    match param.ty {
        BoundaryType::Text => format!(
            "{i}String::Utf8Value {buffer}(isolate, args[{index}]);\n\
             {i}char *{local} = *{buffer};\n",
            i = INDENT,
            buffer = utf8_buffer_name(index),
        ),
        BoundaryType::Numeric => format!(
            "{i}auto {local} = args[{index}].As<Number>()->Value();\n",
            i = INDENT
        ),
    }
}

/// Call the Go function, binding `result` unless it returns nothing.
pub fn call_statement(func: &ExportedFunction) -> String {
    let args = func
        .params
        .iter()
        .map(local_name)
        .collect::<Vec<_>>()
        .join(", ");

    match func.return_type {
        Some(_) => format!("{}auto result = {}({});\n", INDENT, func.name, args),
        None => format!("{}{}({});\n", INDENT, func.name, args),
    }
}

/// Convert `result` to a JavaScript value and hand it back to the caller.
pub fn result_marshal(ty: BoundaryType) -> String {
    let value = match ty {
        BoundaryType::Text => {
            "String::NewFromUtf8(isolate, result, NewStringType::kNormal).ToLocalChecked()"
        }
        BoundaryType::Numeric => "Number::New(isolate, result)",
    };
    format!("{}args.GetReturnValue().Set({});\n", INDENT, value)
}

/// Register the wrapper on `exports` under the camelCase name.
pub fn register_method(func: &ExportedFunction) -> String {
    format!(
        "{}NODE_SET_METHOD(exports, \"{}\", {});\n",
        INDENT,
        func.external_name(),
        wrapper_name(func)
    )
}
