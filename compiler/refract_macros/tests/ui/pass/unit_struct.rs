//! Types without properties still derive.

use refract_ir::Described;
use refract_macros::Reflect;

#[derive(Reflect)]
pub struct Marker;

fn main() {
    let _ = Marker;
    assert!(Marker::descriptor().is_empty());
}
