//! Traversal and emission engine.
//!
//! The engine recurses over the *value*, not purely the type, because
//! pointer nilness is a runtime property: a nil pointer halts its branch,
//! so a class only reachable through nil pointers is never declared even
//! though fields referencing it still are. That asymmetry is part of the
//! observed output contract and is kept as-is.

use std::any::TypeId;

use classgen_reflect::{Kind, Reflect, TypeDescriptor, TypeMapper, UnsupportedType, Value};
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::error::GenerateError;
use crate::type_mapper::CSharpTypeMapper;

/// Generate C# class declarations for every record type reachable from
/// `instance`.
///
/// Classes appear in first-discovery order (depth-first), one per distinct
/// record type, each preceded by a newline. On failure the text emitted so
/// far is available through [`GenerateError::partial_output`].
pub fn generate<T: Reflect + ?Sized>(instance: &T) -> Result<String, GenerateError> {
    Generator::new(CSharpTypeMapper).generate(instance)
}

/// One-shot class generator.
///
/// Holds the discovered-types registry and the output buffer for a single
/// generation call. `generate` consumes the generator, so every call gets
/// fresh state and separate calls share nothing.
pub struct Generator<M> {
    mapper: M,
    defined: IndexSet<TypeId>,
    out: String,
}

impl<M: TypeMapper> Generator<M> {
    /// Create a generator for the given target-language mapper.
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            defined: IndexSet::new(),
            out: String::new(),
        }
    }

    /// Walk the value graph rooted at `instance` and return the generated
    /// class declarations.
    pub fn generate<T: Reflect + ?Sized>(mut self, instance: &T) -> Result<String, GenerateError> {
        let root = instance.to_value();
        match self.traverse("", &root) {
            Ok(()) => Ok(self.out),
            Err(unsupported) => Err(GenerateError::new(unsupported, self.out)),
        }
    }

    fn traverse(&mut self, field: &str, value: &Value) -> Result<(), UnsupportedType> {
        match value {
            Value::Pointer(_, None) => {
                trace!(field, "nil pointer, skipping branch");
                Ok(())
            }
            Value::Pointer(_, Some(inner)) => self.traverse(field, inner),
            Value::Dynamic(_, None) => {
                trace!(field, "unset dynamic, skipping branch");
                Ok(())
            }
            Value::Dynamic(_, Some(held)) => self.traverse(field, held),
            Value::Sequence(ty) => {
                // Discovery for sequence elements is type-driven: recurse
                // once into a zero value of the resolved element type. A
                // pointer field nested in the element always looks nil on
                // this path, whatever the real elements contain.
                let elem = ty.resolve();
                self.traverse(field, &elem.zero())
            }
            Value::Record(ty, fields) => self.define_class(ty, fields),
            // Primitives and anything else contribute no classes.
            Value::Scalar(_) => Ok(()),
        }
    }

    fn define_class(
        &mut self,
        ty: &TypeDescriptor,
        values: &[Value],
    ) -> Result<(), UnsupportedType> {
        if self.defined.contains(&ty.id()) {
            trace!(class = ty.name(), "type already defined");
            return Ok(());
        }
        // Insert before descending into fields; this is what terminates
        // traversal of self-referential and mutually-referential records.
        self.defined.insert(ty.id());
        debug!(class = ty.name(), "defining class");

        let mut class = format!("\npublic class {}\n{{\n", ty.name());
        for (field, value) in ty.fields().iter().zip(values) {
            // Nested classes emit into the shared buffer before this class
            // closes, so a class always follows the classes it references.
            self.traverse(field.name(), value)?;

            let declared = field.ty();
            let suffix = if declared.kind() == Kind::Sequence {
                "[]"
            } else {
                ""
            };
            let target = self.mapper.map_type(&declared.resolve())?;
            class.push_str(&format!(
                "\tpublic {}{} {} {{ get; set; }}\n",
                target,
                suffix,
                field.name()
            ));
        }
        class.push_str("}\n");
        self.out.push_str(&class);
        Ok(())
    }
}
