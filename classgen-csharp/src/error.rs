//! Generation errors.

use classgen_reflect::{Kind, UnsupportedType};
use miette::Diagnostic;
use thiserror::Error;

/// C# generation failed on a type with no C# mapping.
///
/// This is the only error the generator produces. It is total: one
/// unsupported field aborts the whole call. The text emitted before the
/// failing field is preserved in [`partial_output`] rather than discarded,
/// so callers must not assume an error means no text was produced.
///
/// [`partial_output`]: GenerateError::partial_output
#[derive(Debug, Error, Diagnostic)]
#[error("unsupported type `{type_name}` (kind {kind:?})")]
#[diagnostic(
    code(classgen::unsupported_type),
    help(
        "supported field types are strings, integers, floats, bools, records, \
         sequences, pointers, and dynamic slots; maps have no deterministic \
         iteration order and cannot be mapped"
    )
)]
pub struct GenerateError {
    kind: Kind,
    type_name: String,
    partial: String,
}

impl GenerateError {
    pub(crate) fn new(source: UnsupportedType, partial: String) -> Self {
        Self {
            kind: source.kind(),
            type_name: source.type_name().to_string(),
            partial,
        }
    }

    /// The kind that had no C# mapping.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The diagnostic name of the offending type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The class declarations emitted before the failure.
    pub fn partial_output(&self) -> &str {
        &self.partial
    }
}
