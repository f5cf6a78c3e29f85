//! Cross-strategy behavior: every analyzer agrees with the others and with
//! direct access, and fails the same way on the same bad input.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use refract_analyzer::{
    AnalyzeError, Analyzer, CachedReflectionAnalyzer, NaiveReflectionAnalyzer, Strategy,
};
use refract_codegen::CodeGenerator;
use refract_diagnostic::ErrorCode;
use refract_expr::build_expression_analyzer;
use refract_ir::Described;
use refract_macros::Reflect;
use refractc::sample::UnknownType;

#[derive(Debug, Reflect)]
struct Record {
    title: String,
    count: i64,
    ratio: f64,
    flag: bool,
    letter: char,
    size: u32,
    small: f32,
    größe: u16,
}

#[derive(Reflect)]
struct Hollow;

#[derive(Reflect)]
struct Stranger {
    #[reflect(name = "Prop1")]
    prop1: String,
    #[reflect(name = "Prop2")]
    prop2: String,
}

#[derive(Reflect)]
struct Maybe {
    head: String,
    tail: Option<String>,
}

#[derive(Reflect)]
struct RawField {
    r#type: String,
}

#[derive(Reflect)]
struct Keywords {
    r#let: String,
    r#return: u8,
}

#[derive(Reflect)]
struct Odd {
    #[reflect(name = "3d")]
    depth: u8,
}

fn cached<T: Described>() -> CachedReflectionAnalyzer {
    let analyzer = CachedReflectionAnalyzer::new();
    analyzer.initialize(T::descriptor());
    analyzer
}

/// All four strategies built for `T`, in [`Strategy::ALL`] order.
fn analyzers_for<T: Described>() -> Vec<Box<dyn Analyzer>> {
    let generated = match CodeGenerator::new().build_for::<T>() {
        Ok(analyzer) => analyzer,
        Err(err) => panic!("generated analyzer for `{}`: {err}", T::tag()),
    };
    let expression = match build_expression_analyzer(&T::descriptor()) {
        Ok(analyzer) => analyzer,
        Err(err) => panic!("expression analyzer for `{}`: {err}", T::tag()),
    };
    vec![
        Box::new(NaiveReflectionAnalyzer::new()),
        Box::new(cached::<T>()),
        Box::new(generated),
        Box::new(expression),
    ]
}

#[test]
fn test_strategies_in_order() {
    let strategies: Vec<_> = analyzers_for::<UnknownType>()
        .iter()
        .map(|analyzer| analyzer.strategy())
        .collect();
    assert_eq!(strategies, Strategy::ALL.to_vec());
}

#[test]
fn test_sample_object_every_strategy() {
    let analyzers = analyzers_for::<UnknownType>();
    let mut object = UnknownType::sample();
    for analyzer in &analyzers {
        assert_eq!(
            analyzer.analyze(&object),
            Ok("Soy una propSoy otra prop".to_string()),
            "{}",
            analyzer.strategy()
        );
    }

    object.prop1 = "42".to_string();
    for analyzer in &analyzers {
        assert_eq!(
            analyzer.analyze(&object),
            Ok("42Soy otra prop".to_string()),
            "{}",
            analyzer.strategy()
        );
    }
}

#[test]
fn test_analyze_is_idempotent() {
    let object = UnknownType::sample();
    for analyzer in analyzers_for::<UnknownType>() {
        let first = analyzer.analyze(&object);
        assert!(first.is_ok());
        assert_eq!(analyzer.analyze(&object), first, "{}", analyzer.strategy());
    }
}

#[test]
fn test_changing_one_property_changes_only_its_substring() {
    let mut object = UnknownType::sample();
    for analyzer in analyzers_for::<UnknownType>() {
        object.prop2 = "Soy otra prop".to_string();
        let Ok(before) = analyzer.analyze(&object) else {
            panic!("{} failed", analyzer.strategy());
        };
        object.prop2 = "cambiada".to_string();
        let Ok(after) = analyzer.analyze(&object) else {
            panic!("{} failed", analyzer.strategy());
        };
        assert_eq!(before.strip_suffix("Soy otra prop"), Some("Soy una prop"));
        assert_eq!(after.strip_suffix("cambiada"), Some("Soy una prop"));
    }
}

#[test]
fn test_zero_properties_diverge() {
    let naive = NaiveReflectionAnalyzer::new();
    let cached = cached::<Hollow>();
    let Ok(generated) = CodeGenerator::new().build_for::<Hollow>() else {
        panic!("generated analyzer for `Hollow` failed to build");
    };
    let analyzers: [&dyn Analyzer; 3] = [&naive, &cached, &generated];
    for analyzer in analyzers {
        assert_eq!(
            analyzer.analyze(&Hollow),
            Ok(String::new()),
            "{}",
            analyzer.strategy()
        );
    }

    let Err(err) = build_expression_analyzer(&Hollow::descriptor()) else {
        panic!("expression analyzer built for a type without properties");
    };
    assert_eq!(
        err,
        AnalyzeError::EmptyType {
            type_name: "Hollow".to_string()
        }
    );
}

#[test]
fn test_type_mismatch_for_specialized_strategies() {
    let stranger = Stranger {
        prop1: "a".to_string(),
        prop2: "b".to_string(),
    };
    for analyzer in analyzers_for::<UnknownType>() {
        let result = analyzer.analyze(&stranger);
        if analyzer.strategy() == Strategy::NaiveReflection {
            assert_eq!(result, Ok("ab".to_string()));
        } else {
            assert_eq!(
                result,
                Err(AnalyzeError::type_mismatch("UnknownType", "Stranger")),
                "{}",
                analyzer.strategy()
            );
        }
    }
}

#[test]
fn test_null_property_in_every_strategy() {
    let mut object = Maybe {
        head: "h".to_string(),
        tail: None,
    };
    let analyzers = analyzers_for::<Maybe>();
    for analyzer in &analyzers {
        assert_eq!(
            analyzer.analyze(&object),
            Err(AnalyzeError::null_value("Maybe", "tail")),
            "{}",
            analyzer.strategy()
        );
    }

    object.tail = Some("t".to_string());
    for analyzer in &analyzers {
        assert_eq!(analyzer.analyze(&object), Ok("ht".to_string()));
    }
}

#[test]
fn test_malformed_generated_source() {
    let Err(err) = CodeGenerator::new().build_for::<Odd>() else {
        panic!("analyzer reading `input.3d` compiled");
    };
    assert_eq!(err.code(), ErrorCode::E3005);
    let AnalyzeError::CodeGeneration { diagnostics, .. } = &err else {
        panic!("expected a code generation error, got {err:?}");
    };
    assert_eq!(
        diagnostics.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1002]
    );

    // The reflection strategies and the expression graph do not go through
    // source, so the same type still works there.
    let odd = Odd { depth: 7 };
    assert_eq!(
        NaiveReflectionAnalyzer::new().analyze(&odd),
        Ok("7".to_string())
    );
    assert_eq!(cached::<Odd>().analyze(&odd), Ok("7".to_string()));
    let Ok(expression) = build_expression_analyzer(&Odd::descriptor()) else {
        panic!("expression analyzer for `Odd` failed to build");
    };
    assert_eq!(expression.analyze(&odd), Ok("7".to_string()));
}

#[test]
fn test_raw_identifier_fields_every_strategy() {
    let raw = RawField {
        r#type: "x".to_string(),
    };
    assert_eq!(RawField::descriptor().properties()[0].name(), "type");
    for analyzer in analyzers_for::<RawField>() {
        assert_eq!(
            analyzer.analyze(&raw),
            Ok("x".to_string()),
            "{}",
            analyzer.strategy()
        );
    }

    let keywords = Keywords {
        r#let: "l".to_string(),
        r#return: 9,
    };
    for analyzer in analyzers_for::<Keywords>() {
        assert_eq!(
            analyzer.analyze(&keywords),
            Ok("l9".to_string()),
            "{}",
            analyzer.strategy()
        );
    }
}

#[test]
fn test_single_precision_float_every_strategy() {
    let record = Record {
        title: String::new(),
        count: 0,
        ratio: 0.1,
        flag: true,
        letter: 'é',
        size: 1,
        small: 0.1,
        größe: 2,
    };
    for analyzer in analyzers_for::<Record>() {
        assert_eq!(
            analyzer.analyze(&record),
            Ok("00.1trueé10.12".to_string()),
            "{}",
            analyzer.strategy()
        );
    }
}

fn expected(record: &Record) -> String {
    format!(
        "{}{}{}{}{}{}{}{}",
        record.title,
        record.count,
        record.ratio,
        record.flag,
        record.letter,
        record.size,
        record.small,
        record.größe
    )
}

proptest! {
    #[test]
    fn prop_strategies_agree_with_direct_access(
        title in ".*",
        count in any::<i64>(),
        ratio in -1.0e9f64..1.0e9,
        flag in any::<bool>(),
        letter in any::<char>(),
        size in any::<u32>(),
        small in -1.0e6f32..1.0e6,
        größe in any::<u16>(),
    ) {
        let record = Record { title, count, ratio, flag, letter, size, small, größe };
        let direct = expected(&record);
        for analyzer in analyzers_for::<Record>() {
            prop_assert_eq!(
                analyzer.analyze(&record),
                Ok(direct.clone()),
                "{} on {:?}",
                analyzer.strategy(),
                &record
            );
        }
    }

    #[test]
    fn prop_sample_mutation_agrees(iteration in any::<u64>()) {
        let mut object = UnknownType::sample();
        object.churn(iteration);
        let direct = object.direct();
        for analyzer in analyzers_for::<UnknownType>() {
            prop_assert_eq!(analyzer.analyze(&object), Ok(direct.clone()));
        }
    }
}
