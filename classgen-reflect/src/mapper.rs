//! Type mapping between descriptors and language-specific type names.

use thiserror::Error;

use crate::descriptor::{Kind, TypeDescriptor};

/// A resolved type has no equivalent in the target language.
///
/// This is the single error the generation pipeline can produce. It is
/// deterministic (the same model always fails the same way), so it is never
/// retried and never substituted with a fallback type.
#[derive(Debug, Clone, Error)]
#[error("unsupported type `{name}` (kind {kind:?})")]
pub struct UnsupportedType {
    kind: Kind,
    name: String,
}

impl UnsupportedType {
    /// Record the offending descriptor.
    pub fn new(ty: &TypeDescriptor) -> Self {
        Self {
            kind: ty.kind(),
            name: ty.name().to_string(),
        }
    }

    /// The kind that had no mapping.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The diagnostic name of the offending type.
    pub fn type_name(&self) -> &str {
        &self.name
    }
}

/// Trait for mapping resolved type descriptors to language-specific type
/// names.
///
/// Implement this trait for each target language. Implementations receive
/// descriptors that have already been through [`TypeDescriptor::resolve`],
/// so a `Pointer` or `Sequence` kind reaching a mapper means the descriptor
/// was malformed and should be rejected, not unwrapped again.
pub trait TypeMapper {
    /// The target language name.
    fn language(&self) -> &'static str;

    /// Map a resolved element type to a target type name.
    ///
    /// For records the mapped name is the record's own declared name; for
    /// primitives it is the target language keyword. Width information is
    /// deliberately discarded.
    fn map_type(&self, ty: &TypeDescriptor) -> Result<String, UnsupportedType>;
}
