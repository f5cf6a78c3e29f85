use super::*;
use crate::AnalyzeError;
use pretty_assertions::assert_eq;
use refract_macros::Reflect;

#[derive(Reflect)]
struct UnknownType {
    #[reflect(name = "Prop1")]
    prop1: String,
    #[reflect(name = "Prop2")]
    prop2: String,
}

#[derive(Reflect)]
struct Empty;

#[derive(Reflect)]
struct Sparse {
    first: Option<u32>,
}

fn sample() -> UnknownType {
    UnknownType {
        prop1: "Soy una prop".to_string(),
        prop2: "Soy otra prop".to_string(),
    }
}

#[test]
fn test_concatenates_properties() {
    let analyzer = NaiveReflectionAnalyzer::new();
    assert_eq!(
        analyzer.analyze(&sample()),
        Ok("Soy una propSoy otra prop".to_string())
    );
}

#[test]
fn test_sees_mutations_between_calls() {
    let analyzer = NaiveReflectionAnalyzer::new();
    let mut object = sample();
    let first = analyzer.analyze(&object);
    assert_eq!(analyzer.analyze(&object), first);

    object.prop1 = "42".to_string();
    assert_eq!(analyzer.analyze(&object), Ok("42Soy otra prop".to_string()));
}

#[test]
fn test_works_across_types() {
    let analyzer = NaiveReflectionAnalyzer::new();
    assert_eq!(analyzer.analyze(&Sparse { first: Some(9) }), Ok("9".to_string()));
    assert_eq!(analyzer.analyze(&sample()).map(|s| s.len()), Ok(25));
}

#[test]
fn test_zero_properties_is_empty_string() {
    assert_eq!(NaiveReflectionAnalyzer::new().analyze(&Empty), Ok(String::new()));
}

#[test]
fn test_null_property_fails() {
    let result = NaiveReflectionAnalyzer::new().analyze(&Sparse { first: None });
    assert_eq!(result, Err(AnalyzeError::null_value("Sparse", "first")));
}

#[test]
fn test_strategy() {
    assert_eq!(NaiveReflectionAnalyzer.strategy(), Strategy::NaiveReflection);
}
