//! The [`Reflect`] trait and implementations for standard types.
//!
//! Rust has no runtime field reflection, so the introspection a traversal
//! engine needs is supplied at compile time: every participating type
//! describes its own structure through this trait. Model structs get their
//! implementation from `#[derive(Reflect)]` (the `classgen-derive` crate);
//! primitives and standard containers are covered here.
//!
//! Fixed-size arrays and enums intentionally have no implementation, so a
//! model using them fails to compile rather than at generation time.

use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};

use crate::descriptor::{Kind, TypeDescriptor};
use crate::value::Value;

/// A type that can describe its own static structure and present a runtime
/// view of a value.
///
/// The two halves answer different questions: [`descriptor`] is purely
/// static (used for naming, mapping, and sequence-element discovery), while
/// [`to_value`] captures the runtime properties types cannot carry —
/// pointer nilness and dynamic contents.
///
/// [`descriptor`]: Reflect::descriptor
/// [`to_value`]: Reflect::to_value
pub trait Reflect {
    /// Describe this type's static structure.
    fn descriptor() -> TypeDescriptor
    where
        Self: Sized;

    /// Present the runtime view of this value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_reflect_leaf {
    ($($ty:ty => $kind:expr),* $(,)?) => {$(
        impl Reflect for $ty {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::leaf($kind, ::std::any::type_name::<$ty>(), TypeId::of::<$ty>())
            }

            fn to_value(&self) -> Value {
                Value::Scalar(<$ty as Reflect>::descriptor())
            }
        }
    )*};
}

impl_reflect_leaf! {
    String => Kind::String,
    &'static str => Kind::String,
    i8 => Kind::Int,
    i16 => Kind::Int,
    i32 => Kind::Int,
    i64 => Kind::Int,
    isize => Kind::Int,
    u8 => Kind::Uint,
    u16 => Kind::Uint,
    u32 => Kind::Uint,
    u64 => Kind::Uint,
    usize => Kind::Uint,
    f32 => Kind::Float,
    f64 => Kind::Float,
    bool => Kind::Bool,
}

/// `Option<T>` is the nilable pointer: `None` views as nil and halts a
/// traversal branch without error.
impl<T: Reflect + 'static> Reflect for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(
            std::any::type_name::<Self>(),
            TypeId::of::<Self>(),
            T::descriptor,
        )
    }

    fn to_value(&self) -> Value {
        let inner = self.as_ref().map(|value| Box::new(value.to_value()));
        Value::Pointer(Self::descriptor(), inner)
    }
}

/// `Box<T>` is a pointer that is never nil.
impl<T: Reflect + 'static> Reflect for Box<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(
            std::any::type_name::<Self>(),
            TypeId::of::<Self>(),
            T::descriptor,
        )
    }

    fn to_value(&self) -> Value {
        Value::Pointer(Self::descriptor(), Some(Box::new((**self).to_value())))
    }
}

/// `Vec<T>` views as an element-free sequence; element classes are
/// discovered from the static element type, never from real elements.
impl<T: Reflect + 'static> Reflect for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(
            std::any::type_name::<Self>(),
            TypeId::of::<Self>(),
            T::descriptor,
        )
    }

    fn to_value(&self) -> Value {
        Value::Sequence(Self::descriptor())
    }
}

// Associative containers are representable so models holding them can still
// be described, but no backend maps them: their iteration order would break
// the deterministic-output guarantee. Key and value types are irrelevant to
// that verdict, so they carry no `Reflect` bound.

impl<K: 'static, V: 'static, S: 'static> Reflect for HashMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::leaf(Kind::Map, std::any::type_name::<Self>(), TypeId::of::<Self>())
    }

    fn to_value(&self) -> Value {
        Value::Scalar(Self::descriptor())
    }
}

impl<K: 'static, V: 'static> Reflect for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::leaf(Kind::Map, std::any::type_name::<Self>(), TypeId::of::<Self>())
    }

    fn to_value(&self) -> Value {
        Value::Scalar(Self::descriptor())
    }
}
