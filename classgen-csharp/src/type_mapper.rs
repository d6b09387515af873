//! C# type mapper implementation.

use classgen_reflect::{Kind, TypeDescriptor, TypeMapper, UnsupportedType};

/// C# type mapper implementation.
///
/// The mapping is deliberately lossy: integer and float widths collapse to
/// `int` / `uint` / `float` regardless of the source width. Consumers rely
/// on this for drop-in compatibility, so the table must not grow width
/// fidelity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_type(&self, ty: &TypeDescriptor) -> Result<String, UnsupportedType> {
        match ty.kind() {
            Kind::String => Ok("string".to_string()),
            Kind::Int => Ok("int".to_string()),
            Kind::Uint => Ok("uint".to_string()),
            Kind::Float => Ok("float".to_string()),
            Kind::Bool => Ok("bool".to_string()),
            Kind::Dynamic => Ok("object".to_string()),
            Kind::Record => Ok(ty.name().to_string()),
            // A pointer or sequence reaching the mapper was never resolved;
            // maps have no deterministic iteration order to emit.
            Kind::Pointer | Kind::Sequence | Kind::Map => Err(UnsupportedType::new(ty)),
        }
    }
}
