//! Runtime structure views.
//!
//! A [`Value`] is the traversal-time counterpart of a [`TypeDescriptor`]:
//! it records the runtime properties the static description cannot know
//! (is a pointer nil, what a dynamic currently holds) and nothing else.
//! Primitive contents are never captured; backends only ever read static
//! types for leaves.

use crate::descriptor::TypeDescriptor;

/// Runtime view of a value, carrying the value's static type in every
/// variant.
#[derive(Debug, Clone)]
pub enum Value {
    /// A primitive, map, or any other value a traversal silently ignores.
    Scalar(TypeDescriptor),
    /// An indirection. `None` is a nil pointer; traversal halts there
    /// without error.
    Pointer(TypeDescriptor, Option<Box<Value>>),
    /// A sequence. Deliberately element-free: sequence traversal is
    /// type-driven, so views never expose real elements.
    Sequence(TypeDescriptor),
    /// A dynamically typed slot, unwrapping to whatever concrete value it
    /// currently holds. `None` means unset.
    Dynamic(TypeDescriptor, Option<Box<Value>>),
    /// A record with its field values in declaration order.
    Record(TypeDescriptor, Vec<Value>),
}

impl Value {
    /// The static type of this value.
    pub fn ty(&self) -> &TypeDescriptor {
        match self {
            Value::Scalar(ty)
            | Value::Pointer(ty, _)
            | Value::Sequence(ty)
            | Value::Dynamic(ty, _)
            | Value::Record(ty, _) => ty,
        }
    }
}
