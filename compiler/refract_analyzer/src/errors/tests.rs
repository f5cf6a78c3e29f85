use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_messages() {
    assert_eq!(
        AnalyzeError::type_mismatch("UnknownType", "Other").to_string(),
        "expected an instance of `UnknownType`, found `Other`"
    );
    assert_eq!(
        AnalyzeError::null_value("UnknownType", "Prop2").to_string(),
        "property `Prop2` of `UnknownType` is null"
    );
    assert_eq!(
        AnalyzeError::Uninitialized.to_string(),
        "analyzer used before initialization"
    );
}

#[test]
fn test_code_generation_counts_errors() {
    let one = AnalyzeError::CodeGeneration {
        type_name: "UnknownType".to_string(),
        diagnostics: vec![Diagnostic::error(ErrorCode::E2002).with_message("unknown property")],
    };
    assert_eq!(
        one.to_string(),
        "failed to compile generated analyzer for `UnknownType` (errors: 1)"
    );

    let none = AnalyzeError::CodeGeneration {
        type_name: "UnknownType".to_string(),
        diagnostics: Vec::new(),
    };
    assert!(none.to_string().ends_with("(errors: 0)"));
}

#[test]
fn test_codes() {
    let cases = [
        (AnalyzeError::type_mismatch("A", "B"), ErrorCode::E3001),
        (AnalyzeError::null_value("A", "p"), ErrorCode::E3002),
        (
            AnalyzeError::EmptyType {
                type_name: "A".to_string(),
            },
            ErrorCode::E3003,
        ),
        (AnalyzeError::Uninitialized, ErrorCode::E3004),
        (
            AnalyzeError::InvalidExpression {
                message: "bad".to_string(),
            },
            ErrorCode::E3006,
        ),
    ];
    for (error, code) in cases {
        assert_eq!(error.code(), code, "{error}");
        assert!(error.code().is_analyzer_error());
    }
}

#[test]
fn test_to_diagnostic_carries_compile_errors_as_notes() {
    let error = AnalyzeError::CodeGeneration {
        type_name: "UnknownType".to_string(),
        diagnostics: vec![
            Diagnostic::error(ErrorCode::E1002).with_message("expected identifier, found `3`"),
            Diagnostic::error(ErrorCode::E2005).with_message("missing return"),
        ],
    };
    let diag = error.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3005);
    assert_eq!(
        diag.notes,
        vec![
            "E1002: expected identifier, found `3`".to_string(),
            "E2005: missing return".to_string(),
        ]
    );
}

#[test]
fn test_uninitialized_diagnostic_suggests_fix() {
    let diag = AnalyzeError::Uninitialized.to_diagnostic();
    assert_eq!(diag.suggestions.len(), 1);
    assert!(diag.is_error());
}
