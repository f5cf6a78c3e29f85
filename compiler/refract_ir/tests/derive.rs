//! Derived introspection against the registry.

use refract_ir::{Described, Reflect, TypeRegistry, Value};
use refract_macros::Reflect;

#[derive(Reflect)]
struct UnknownType {
    #[reflect(name = "Prop1")]
    prop1: String,
    #[reflect(name = "Prop2")]
    prop2: String,
}

#[derive(Reflect)]
struct Mixed {
    count: u64,
    ratio: f64,
    flag: bool,
    initial: char,
    label: &'static str,
}

#[test]
fn derived_descriptor_reads_every_field() {
    let sample = UnknownType {
        prop1: "Soy una prop".to_string(),
        prop2: "Soy otra prop".to_string(),
    };
    let descriptor = sample.discover();

    let values: Vec<_> = descriptor
        .properties()
        .iter()
        .filter_map(|p| p.read(sample.as_any()))
        .collect();
    assert_eq!(
        values,
        vec![Value::Str("Soy una prop"), Value::Str("Soy otra prop")]
    );
}

#[test]
fn derived_types_register_by_name() {
    let registry = TypeRegistry::new();
    assert!(registry.register::<UnknownType>().is_ok());
    assert!(registry.register::<Mixed>().is_ok());

    let found = registry.lookup("UnknownType").map(|d| d.tag());
    assert_eq!(found, Some(UnknownType::tag()));
    assert_eq!(registry.type_names(), vec!["Mixed", "UnknownType"]);
}

#[test]
fn primitive_fields_stringify() {
    let mixed = Mixed {
        count: 3,
        ratio: 0.5,
        flag: false,
        initial: 'z',
        label: "tag",
    };

    let mut out = String::new();
    for property in Mixed::descriptor().properties() {
        let value = property.read(mixed.as_any());
        assert!(value.is_some(), "accessor rejected its own type");
        if let Some(value) = value {
            assert!(value.write_to(&mut out).is_ok());
        }
    }
    assert_eq!(out, "30.5falseztag");
}

#[test]
fn field_type_names_are_recorded() {
    let descriptor = Mixed::descriptor();
    let types: Vec<_> = descriptor.properties().iter().map(|p| p.type_name()).collect();
    assert_eq!(types, vec!["u64", "f64", "bool", "char", "&'static str"]);
}

#[test]
fn accessors_reject_other_types() {
    let mixed = Mixed {
        count: 1,
        ratio: 1.0,
        flag: true,
        initial: 'a',
        label: "",
    };
    for property in UnknownType::descriptor().properties() {
        assert_eq!(property.read(mixed.as_any()), None);
    }
}

#[derive(Reflect)]
struct Wide {
    index: usize,
    offset: isize,
    big: i128,
    huge: u128,
    small: f32,
    r#type: String,
    größe: u16,
}

#[test]
fn wide_numbers_and_unusual_field_names() {
    let wide = Wide {
        index: usize::MAX,
        offset: -1,
        big: i128::MIN,
        huge: u128::MAX,
        small: 0.1,
        r#type: "kind".to_string(),
        größe: 7,
    };
    let descriptor = Wide::descriptor();

    let names: Vec<_> = descriptor.properties().iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec!["index", "offset", "big", "huge", "small", "type", "größe"]
    );

    let mut out = String::new();
    for property in descriptor.properties() {
        if let Some(value) = property.read(wide.as_any()) {
            assert!(value.write_to(&mut out).is_ok());
        }
    }
    assert_eq!(
        out,
        format!("{}-1{}{}0.1kind7", usize::MAX, i128::MIN, u128::MAX)
    );
}
