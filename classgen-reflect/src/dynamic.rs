//! Dynamically typed model fields.

use std::any::TypeId;
use std::fmt;

use crate::descriptor::TypeDescriptor;
use crate::reflect::Reflect;
use crate::value::Value;

/// A capability-less wrapper for a value whose concrete type is only known
/// at runtime.
///
/// Fields of this type map to the target language's top type (`object` in
/// C#). At traversal time the wrapper is unwrapped to whatever concrete
/// value it currently holds; an empty wrapper halts the branch silently,
/// the same way a nil pointer does.
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn Reflect>>);

impl Dynamic {
    /// Wrap a concrete value.
    pub fn new<T: Reflect + 'static>(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// An unset dynamic slot.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether the slot currently holds a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Reflect for Dynamic {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::dynamic(std::any::type_name::<Self>(), TypeId::of::<Self>())
    }

    fn to_value(&self) -> Value {
        let held = self.0.as_ref().map(|value| Box::new(value.to_value()));
        Value::Dynamic(Self::descriptor(), held)
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic")
            .field("holds_value", &self.0.is_some())
            .finish()
    }
}
