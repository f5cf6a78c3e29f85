//! Property stringification shared by every strategy.

use refract_ir::{PropertyDescriptor, Reflect, TypeDescriptor};

use crate::{AnalyzeError, AnalyzeResult};

/// Read one property of `object` and append its string form to `out`.
///
/// `type_name` names the type the property belongs to. An accessor that
/// rejects the object is a [`AnalyzeError::TypeMismatch`]; a null value is
/// a [`AnalyzeError::NullValue`].
#[inline]
pub fn append_property(
    out: &mut String,
    object: &dyn Reflect,
    type_name: &str,
    property: &PropertyDescriptor,
) -> AnalyzeResult<()> {
    let Some(value) = property.read(object.as_any()) else {
        return Err(AnalyzeError::type_mismatch(
            type_name,
            object.type_tag().name(),
        ));
    };
    value
        .write_to(out)
        .map_err(|_| AnalyzeError::null_value(type_name, property.name()))
}

/// Concatenate every property of `descriptor` read from `object`.
pub fn concat_properties(object: &dyn Reflect, descriptor: &TypeDescriptor) -> AnalyzeResult<String> {
    let mut out = String::new();
    for property in descriptor.properties() {
        append_property(&mut out, object, descriptor.name(), property)?;
    }
    Ok(out)
}
