use super::*;
use pretty_assertions::assert_eq;
use refract_ir::Described;
use refract_macros::Reflect;

#[derive(Reflect)]
struct UnknownType {
    #[reflect(name = "Prop1")]
    prop1: String,
    #[reflect(name = "Prop2")]
    prop2: String,
}

#[derive(Reflect)]
struct Blank;

#[test]
fn test_emits_one_append_per_property() {
    let source = emit_source(&UnknownType::descriptor());
    assert_eq!(source.type_name(), "UnknownType");
    assert_eq!(source.analyzer_name(), "UnknownTypeAnalyzer");
    assert_eq!(
        source.text(),
        "// generated analyzer for `UnknownType`\n\
         analyzer UnknownTypeAnalyzer(input: UnknownType) {\n\
         \x20   let result = \"\";\n\
         \x20   result += input.Prop1.to_string();\n\
         \x20   result += input.Prop2.to_string();\n\
         \x20   return result;\n\
         }\n"
    );
}

#[test]
fn test_zero_properties_returns_empty_local() {
    let source = emit_source(&Blank::descriptor());
    assert!(!source.text().contains("+="));
    assert!(source.text().contains("let result = \"\";\n    return result;"));
    assert_eq!(source.to_string(), source.text());
}
