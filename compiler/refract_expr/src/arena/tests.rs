use super::*;
use pretty_assertions::assert_eq;
use refract_diagnostic::ErrorCode;
use refract_ir::Described;
use refract_macros::Reflect;

#[derive(Reflect)]
struct Parcel {
    weight: u32,
    label: String,
}

/// `parameter` and `convert` nodes over `Parcel`.
fn typed_graph() -> (ExprArena, ExprId, ExprId) {
    let mut arena = ExprArena::new();
    let Ok(param) = arena.parameter() else {
        panic!("parameter failed");
    };
    let Ok(typed) = arena.convert(param, Parcel::tag()) else {
        panic!("convert failed");
    };
    (arena, param, typed)
}

#[test]
fn test_typed_construction() {
    let descriptor = Parcel::descriptor();
    let (mut arena, param, typed) = typed_graph();

    let Ok(read) = arena.property(typed, &descriptor, "label") else {
        panic!("property failed");
    };
    let Ok(text) = arena.to_string(read) else {
        panic!("to_string failed");
    };
    let Ok(both) = arena.concat(text, text) else {
        panic!("concat failed");
    };

    assert_eq!(arena.len(), 5);
    assert_eq!(both.raw(), 4);
    assert_eq!(arena.ty(param), Ok(ExprType::Object));
    assert_eq!(arena.ty(typed), Ok(ExprType::Typed(Parcel::tag())));
    assert_eq!(arena.ty(read), Ok(ExprType::Value));
    assert_eq!(arena.ty(both), Ok(ExprType::Str));
    assert_eq!(arena.kind(both).map(|kind| kind.name()), Ok("concat"));

    let Ok(ExprKind::Property { property, .. }) = arena.kind(read) else {
        panic!("expected a property node");
    };
    let parcel = Parcel {
        weight: 3,
        label: "fragile".to_string(),
    };
    assert_eq!(
        property.read(refract_ir::Reflect::as_any(&parcel)),
        Some(refract_ir::Value::Str("fragile"))
    );
    assert_eq!(parcel.weight, 3);
}

#[test]
fn test_operand_type_checks() {
    let descriptor = Parcel::descriptor();
    let mut arena = ExprArena::new();
    let Ok(param) = arena.parameter() else {
        panic!("parameter failed");
    };

    assert_eq!(
        arena.property(param, &descriptor, "label"),
        Err(GraphError::OperandType {
            node: "property",
            expected: ExprType::Typed(Parcel::tag()),
            found: ExprType::Object,
        })
    );
    assert_eq!(
        arena.to_string(param),
        Err(GraphError::OperandType {
            node: "to_string",
            expected: ExprType::Value,
            found: ExprType::Object,
        })
    );

    let Ok(typed) = arena.convert(param, descriptor.tag()) else {
        panic!("convert failed");
    };
    assert!(matches!(
        arena.convert(typed, descriptor.tag()),
        Err(GraphError::OperandType { node: "convert", .. })
    ));
    let Ok(read) = arena.property(typed, &descriptor, "weight") else {
        panic!("property failed");
    };
    assert!(matches!(
        arena.concat(read, read),
        Err(GraphError::OperandType { node: "concat", .. })
    ));
}

#[test]
fn test_unknown_property() {
    let descriptor = Parcel::descriptor();
    let (mut arena, _, typed) = typed_graph();
    assert_eq!(
        arena.property(typed, &descriptor, "volume"),
        Err(GraphError::UnknownProperty {
            type_name: "Parcel",
            property: "volume".to_string(),
        })
    );
}

#[test]
fn test_foreign_ids() {
    let mut other = ExprArena::new();
    let mut foreign = None;
    for _ in 0..3 {
        foreign = other.parameter().ok();
    }
    let Some(foreign) = foreign else {
        panic!("parameter failed");
    };

    let mut arena = ExprArena::new();
    assert_eq!(
        arena.to_string(foreign),
        Err(GraphError::UnknownNode {
            id: foreign,
            len: 0
        })
    );
}

#[test]
fn test_graph_error_display_and_conversion() {
    let err = GraphError::OperandType {
        node: "concat",
        expected: ExprType::Str,
        found: ExprType::Value,
    };
    assert_eq!(
        err.to_string(),
        "`concat` operand must be string, found value"
    );

    let analyze: AnalyzeError = err.into();
    assert_eq!(analyze.code(), ErrorCode::E3006);
    assert_eq!(
        analyze.to_string(),
        "invalid expression: `concat` operand must be string, found value"
    );
}
