//! Static type descriptions.
//!
//! A [`TypeDescriptor`] is the language-agnostic handle to a type's
//! structure: its [`Kind`], its identity, and (for pointers, sequences and
//! records) the types it is built from. Nested types are referenced through
//! [`DescriptorFn`] function pointers rather than eagerly, so descriptor
//! graphs for self-referential record types stay finite.

use std::any::TypeId;

use crate::value::Value;

/// Fundamental kind of a described type.
///
/// `Map` is representable so that models containing associative containers
/// can still be described; backends reject it when mapping to a target type
/// (map iteration order would break the deterministic-output guarantee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Nilable indirection (`Option<T>`) or owned indirection (`Box<T>`).
    Pointer,
    /// Growable sequence (`Vec<T>`).
    Sequence,
    /// A value whose concrete type is only known at runtime ([`crate::Dynamic`]).
    Dynamic,
    /// A named struct with ordered fields.
    Record,
    String,
    Int,
    Uint,
    Float,
    Bool,
    /// Associative container. Representable but never mappable.
    Map,
}

/// Lazy reference to a nested type's descriptor.
///
/// Using a function pointer instead of an owned descriptor keeps cyclic
/// record types (a record holding a pointer to itself) describable: the
/// nested descriptor is only built when a consumer asks for it.
pub type DescriptorFn = fn() -> TypeDescriptor;

/// One named field of a record type, in declaration order.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    ty: DescriptorFn,
}

impl FieldDescriptor {
    /// Create a field descriptor from a field name and the field type's
    /// descriptor function (typically `<T as Reflect>::descriptor`).
    pub fn new(name: &'static str, ty: DescriptorFn) -> Self {
        Self { name, ty }
    }

    /// The field name as it should appear in generated output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build the field type's descriptor.
    pub fn ty(&self) -> TypeDescriptor {
        (self.ty)()
    }
}

/// Static description of a type: kind, identity, and structure.
///
/// Equality of descriptors is intentionally not derived; identity
/// comparisons go through [`TypeDescriptor::id`], which is how the
/// deduplication registry distinguishes two record types with identical
/// field shapes.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    kind: Kind,
    name: &'static str,
    id: TypeId,
    elem: Option<DescriptorFn>,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Describe a terminal type with no nested structure (primitives, maps).
    pub fn leaf(kind: Kind, name: &'static str, id: TypeId) -> Self {
        Self {
            kind,
            name,
            id,
            elem: None,
            fields: Vec::new(),
        }
    }

    /// Describe a pointer type wrapping `elem`.
    pub fn pointer(name: &'static str, id: TypeId, elem: DescriptorFn) -> Self {
        Self {
            kind: Kind::Pointer,
            name,
            id,
            elem: Some(elem),
            fields: Vec::new(),
        }
    }

    /// Describe a sequence type with `elem` elements.
    pub fn sequence(name: &'static str, id: TypeId, elem: DescriptorFn) -> Self {
        Self {
            kind: Kind::Sequence,
            name,
            id,
            elem: Some(elem),
            fields: Vec::new(),
        }
    }

    /// Describe a dynamically typed value.
    pub fn dynamic(name: &'static str, id: TypeId) -> Self {
        Self {
            kind: Kind::Dynamic,
            name,
            id,
            elem: None,
            fields: Vec::new(),
        }
    }

    /// Describe a record type with named, ordered fields.
    ///
    /// `name` is the bare type identifier; it becomes the class name in
    /// generated output. Field order is preserved verbatim and is the only
    /// ordering guarantee the pipeline provides.
    pub fn record(name: &'static str, id: TypeId, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            kind: Kind::Record,
            name,
            id,
            elem: None,
            fields,
        }
    }

    /// The fundamental kind of this type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The type's name. For records this is the bare identifier used as the
    /// generated class name; for other kinds it is only diagnostic.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type's identity. Registry membership is keyed on this, never on
    /// structural equality.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Build the element type's descriptor, for pointers and sequences.
    pub fn elem(&self) -> Option<TypeDescriptor> {
        self.elem.map(|elem| elem())
    }

    /// The record's fields, in declaration order. Empty for non-records.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Strip indirection down to the canonical element type.
    ///
    /// Pointers and sequences resolve to their element's resolution;
    /// everything else resolves to itself. Kinds with no target-language
    /// mapping are not rejected here; that happens later, in
    /// [`crate::TypeMapper::map_type`].
    pub fn resolve(&self) -> TypeDescriptor {
        match self.kind {
            Kind::Pointer | Kind::Sequence => match self.elem {
                Some(elem) => elem().resolve(),
                // A pointer or sequence built without an element type has
                // nothing to strip; treat it as terminal.
                None => self.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Build the structural zero value of this type.
    ///
    /// Pointers are nil, dynamics are unset, sequences are empty, records
    /// have every field zeroed. Traversal engines use this to discover a
    /// sequence's element classes without consulting real elements. Always
    /// terminates, even for cyclic record types: a cycle necessarily passes
    /// through a pointer, whose zero is nil.
    pub fn zero(&self) -> Value {
        match self.kind {
            Kind::Pointer => Value::Pointer(self.clone(), None),
            Kind::Dynamic => Value::Dynamic(self.clone(), None),
            Kind::Sequence => Value::Sequence(self.clone()),
            Kind::Record => {
                let fields = self.fields.iter().map(|f| f.ty().zero()).collect();
                Value::Record(self.clone(), fields)
            }
            _ => Value::Scalar(self.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;

    #[test]
    fn test_resolve_strips_pointer_chains() {
        let desc = <Option<Box<String>> as Reflect>::descriptor();
        assert_eq!(desc.kind(), Kind::Pointer);

        let resolved = desc.resolve();
        assert_eq!(resolved.kind(), Kind::String);
        assert_eq!(resolved.id(), TypeId::of::<String>());
    }

    #[test]
    fn test_resolve_strips_sequences_to_element() {
        let desc = <Vec<Option<i64>> as Reflect>::descriptor();
        assert_eq!(desc.kind(), Kind::Sequence);
        assert_eq!(desc.resolve().kind(), Kind::Int);
    }

    #[test]
    fn test_resolve_is_terminal_for_primitives_and_dynamic() {
        assert_eq!(<bool as Reflect>::descriptor().resolve().kind(), Kind::Bool);
        assert_eq!(
            <crate::Dynamic as Reflect>::descriptor().resolve().kind(),
            Kind::Dynamic
        );
    }

    #[test]
    fn test_zero_of_pointer_is_nil() {
        let zero = <Option<String> as Reflect>::descriptor().zero();
        assert!(matches!(zero, Value::Pointer(_, None)));
    }

    #[test]
    fn test_zero_of_record_zeroes_fields() {
        let desc = TypeDescriptor::record(
            "Sample",
            TypeId::of::<()>(),
            vec![
                FieldDescriptor::new("Name", <String as Reflect>::descriptor),
                FieldDescriptor::new("Maybe", <Option<bool> as Reflect>::descriptor),
            ],
        );
        match desc.zero() {
            Value::Record(ty, fields) => {
                assert_eq!(ty.name(), "Sample");
                assert_eq!(fields.len(), 2);
                assert!(matches!(fields[0], Value::Scalar(_)));
                assert!(matches!(fields[1], Value::Pointer(_, None)));
            }
            other => panic!("expected record zero, got {other:?}"),
        }
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let desc = TypeDescriptor::record(
            "Ordered",
            TypeId::of::<()>(),
            vec![
                FieldDescriptor::new("A", <String as Reflect>::descriptor),
                FieldDescriptor::new("B", <String as Reflect>::descriptor),
                FieldDescriptor::new("C", <String as Reflect>::descriptor),
            ],
        );
        let names: Vec<_> = desc.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
