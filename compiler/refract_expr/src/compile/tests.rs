use super::*;
use crate::arena::ExprArena;
use crate::build_lambda;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use refract_ir::{Described, TypeDescriptor};
use refract_macros::Reflect;

#[derive(Reflect)]
struct Invoice {
    number: u64,
    customer: String,
    discount: Option<f32>,
    paid: bool,
}

#[derive(Reflect)]
struct Row {
    cell: String,
}

fn compile_for(descriptor: &TypeDescriptor) -> (Lambda, CompiledLambda) {
    let lambda = match build_lambda(descriptor) {
        Ok(lambda) => lambda,
        Err(err) => panic!("build failed: {err}"),
    };
    let compiled = match lambda.compile() {
        Ok(compiled) => compiled,
        Err(err) => panic!("compile failed: {err}"),
    };
    (lambda, compiled)
}

#[test]
fn test_compiled_matches_interpreter() {
    let (lambda, compiled) = compile_for(&Invoice::descriptor());
    assert_eq!(compiled.node_count(), lambda.node_count());

    let invoice = Invoice {
        number: 1017,
        customer: "Ada".to_string(),
        discount: Some(0.5),
        paid: false,
    };
    assert_eq!(compiled.call(&invoice), Ok("1017Ada0.5false".to_string()));
    assert_eq!(compiled.call(&invoice), lambda.evaluate(&invoice));
}

#[test]
fn test_errors_match_interpreter() {
    let (lambda, compiled) = compile_for(&Invoice::descriptor());
    let unpaid = Invoice {
        number: 1,
        customer: String::new(),
        discount: None,
        paid: false,
    };
    assert_eq!(
        compiled.call(&unpaid),
        Err(AnalyzeError::null_value("Invoice", "discount"))
    );
    assert_eq!(compiled.call(&unpaid), lambda.evaluate(&unpaid));

    let row = Row {
        cell: "x".to_string(),
    };
    assert_eq!(
        compiled.call(&row),
        Err(AnalyzeError::type_mismatch("Invoice", "Row"))
    );
    assert_eq!(compiled.call(&row), lambda.evaluate(&row));
}

#[test]
fn test_into_fn() {
    let (_, compiled) = compile_for(&Row::descriptor());
    let f = compiled.into_fn();
    let row = Row {
        cell: "abc".to_string(),
    };
    assert_eq!(f(&row), Ok("abc".to_string()));
}

#[test]
fn test_wide_type() {
    const WIDTH: usize = 2_000;

    let row = Row::descriptor();
    let wide = TypeDescriptor::new(row.tag(), vec![row.properties()[0]; WIDTH]);
    let (lambda, compiled) = compile_for(&wide);
    assert_eq!(lambda.node_count(), 3 * WIDTH + 1);

    let object = Row {
        cell: "ab".to_string(),
    };
    let expected = "ab".repeat(WIDTH);
    assert_eq!(compiled.call(&object), Ok(expected.clone()));
    assert_eq!(lambda.evaluate(&object), Ok(expected));
}

#[test]
fn test_unbound_parameter_fails_to_compile() {
    let descriptor = Row::descriptor();
    let mut arena = ExprArena::new();
    let (Ok(bound), Ok(stray)) = (arena.parameter(), arena.parameter()) else {
        panic!("parameter failed");
    };
    let Ok(body) = arena
        .convert(stray, descriptor.tag())
        .and_then(|typed| arena.property(typed, &descriptor, "cell"))
        .and_then(|read| arena.to_string(read))
    else {
        panic!("graph construction failed");
    };
    let Ok(lambda) = Lambda::new(arena, bound, body) else {
        panic!("lambda rejected");
    };
    assert_eq!(
        lambda.compile().map(|c| c.node_count()),
        Err(GraphError::UnboundParameter(stray))
    );
}

proptest! {
    #[test]
    fn compiled_agrees_with_interpreter(
        number in any::<u64>(),
        customer in "\\PC{0,24}",
        discount in proptest::option::of(-1.0e6f32..1.0e6),
        paid in any::<bool>(),
    ) {
        let (lambda, compiled) = compile_for(&Invoice::descriptor());
        let invoice = Invoice { number, customer, discount, paid };
        prop_assert_eq!(compiled.call(&invoice), lambda.evaluate(&invoice));
    }
}
