//! Basic derive usage: default names, declaration order.

use refract_ir::{Described, Reflect, Value};
use refract_macros::Reflect;

#[derive(Reflect)]
pub struct Invoice {
    pub number: u32,
    pub customer: String,
}

fn main() {
    let invoice = Invoice {
        number: 7,
        customer: "acme".to_string(),
    };

    let descriptor = Invoice::descriptor();
    assert_eq!(descriptor.name(), "Invoice");
    assert_eq!(descriptor.properties()[0].name(), "number");
    assert_eq!(descriptor.properties()[1].name(), "customer");
    assert_eq!(
        descriptor.properties()[1].read(invoice.as_any()),
        Some(Value::Str("acme"))
    );
    assert_eq!(invoice.type_tag(), Invoice::tag());
}
