use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn test_phase_predicates() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E1003.is_parser_error());
    assert!(ErrorCode::E2006.is_resolve_error());
    assert!(ErrorCode::E3005.is_analyzer_error());

    assert!(!ErrorCode::E3005.is_parser_error());
    assert!(!ErrorCode::E0001.is_analyzer_error());
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let hits = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_resolve_error(),
            code.is_analyzer_error(),
        ]
        .iter()
        .filter(|&&hit| hit)
        .count();
        assert_eq!(hits, 1, "{code} belongs to {hits} phases");
    }
}

#[test]
fn test_all_is_sorted_and_described() {
    let names: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
