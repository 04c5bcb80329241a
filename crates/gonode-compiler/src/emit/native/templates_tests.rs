use gonode_core::{BoundaryType, ExportedFunction, Parameter};

use super::templates::{
    arg_count_check, arg_type_check, arg_unmarshal, call_statement, local_name, register_method,
    result_marshal, utf8_buffer_name, wrapper_name,
};

#[test]
fn names() {
    let func = ExportedFunction::new("ParseURL");
    assert_eq!(wrapper_name(&func), "ParseURL_Func");
    assert_eq!(local_name(&Parameter::new("raw", BoundaryType::Text)), "go_raw");
}

#[test]
fn count_check() {
    assert_eq!(
        arg_count_check(2),
        concat!(
            "  if (args.Length() < 2) {\n",
            "    isolate->ThrowException(Exception::TypeError(\n",
            "        String::NewFromUtf8(isolate, \"Wrong number of arguments (expected 2)\").ToLocalChecked()));\n",
            "    return;\n",
            "  }\n",
        )
    );
}

#[test]
fn type_checks() {
    let text = arg_type_check(0, &Parameter::new("name", BoundaryType::Text));
    assert!(text.starts_with("  if (!args[0]->IsString()) {\n"));
    assert!(text.contains("\"Wrong type for argument name (expected string)\""));

    let numeric = arg_type_check(3, &Parameter::new("y", BoundaryType::Numeric));
    assert!(numeric.starts_with("  if (!args[3]->IsNumber()) {\n"));
    assert!(numeric.contains("(expected number)"));
    assert!(numeric.ends_with("    return;\n  }\n"));
}

#[test]
fn unmarshal_text() {
    assert_eq!(
        arg_unmarshal(1, &Parameter::new("name", BoundaryType::Text)),
        "  String::Utf8Value utf8_arg1(isolate, args[1]);\n  char *go_name = *utf8_arg1;\n"
    );
}

#[test]
fn text_buffer_distinct_from_parameter_locals() {
    let text = arg_unmarshal(0, &Parameter::new("x", BoundaryType::Text));
    let numeric = arg_unmarshal(1, &Parameter::new("x_s", BoundaryType::Numeric));

    assert_eq!(utf8_buffer_name(0), "utf8_arg0");
    assert!(text.contains("String::Utf8Value utf8_arg0("));
    assert!(text.contains("char *go_x = *utf8_arg0;"));
    assert!(numeric.contains("auto go_x_s = "));
    assert!(!text.contains("go_x_s"));
}

#[test]
fn unmarshal_numeric() {
    assert_eq!(
        arg_unmarshal(0, &Parameter::new("x", BoundaryType::Numeric)),
        "  auto go_x = args[0].As<Number>()->Value();\n"
    );
}

#[test]
fn call_binds_result_only_when_returning() {
    let sum = ExportedFunction::new("Sum")
        .param("x", BoundaryType::Numeric)
        .param("y", BoundaryType::Numeric)
        .returns(BoundaryType::Numeric);
    assert_eq!(call_statement(&sum), "  auto result = Sum(go_x, go_y);\n");

    let log = ExportedFunction::new("Log").param("msg", BoundaryType::Text);
    assert_eq!(call_statement(&log), "  Log(go_msg);\n");

    let tick = ExportedFunction::new("Tick");
    assert_eq!(call_statement(&tick), "  Tick();\n");
}

#[test]
fn result_conversion() {
    assert_eq!(
        result_marshal(BoundaryType::Numeric),
        "  args.GetReturnValue().Set(Number::New(isolate, result));\n"
    );
    assert_eq!(
        result_marshal(BoundaryType::Text),
        "  args.GetReturnValue().Set(String::NewFromUtf8(isolate, result, NewStringType::kNormal).ToLocalChecked());\n"
    );
}

#[test]
fn registration_uses_camel_case() {
    assert_eq!(
        register_method(&ExportedFunction::new("Sum")),
        "  NODE_SET_METHOD(exports, \"sum\", Sum_Func);\n"
    );
}
