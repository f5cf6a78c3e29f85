//! Renamed type and properties, skipped fields, optional values.

use refract_ir::{Described, Reflect, Value};
use refract_macros::Reflect;

#[derive(Reflect)]
#[reflect(name = "Row")]
pub struct TableRow {
    #[reflect(name = "Id")]
    pub id: i64,
    #[reflect(skip)]
    pub cache: Vec<u8>,
    #[reflect(name = "Note")]
    pub note: Option<String>,
}

fn main() {
    let row = TableRow {
        id: -1,
        cache: vec![1, 2, 3],
        note: None,
    };

    let descriptor = row.discover();
    assert_eq!(descriptor.name(), "Row");
    assert_eq!(descriptor.len(), 2);
    assert_eq!(descriptor.properties()[1].name(), "Note");
    assert_eq!(descriptor.properties()[1].index(), 1);
    assert_eq!(
        descriptor.property("Note").and_then(|p| p.read(row.as_any())),
        Some(Value::Null)
    );
    assert_eq!(row.cache.len(), 3);
    assert_eq!(TableRow::tag().name(), "Row");
}
