//! C# class generation from a sample value.
//!
//! Given any value whose type implements [`classgen_reflect::Reflect`],
//! [`generate`] walks the type graph reachable from it and emits one
//! `public class` declaration per distinct record type, with auto-property
//! fields in declaration order. The generated text keeps a C# consumer
//! structurally synchronized with the canonical Rust data model without a
//! hand-maintained duplicate.
//!
//! ```ignore
//! #[derive(Reflect)]
//! struct WeightedVariation {
//!     #[reflect(rename = "ID")]
//!     id: String,
//!     #[reflect(rename = "Weight")]
//!     weight: i64,
//! }
//!
//! let csharp = classgen_csharp::generate(&WeightedVariation {
//!     id: "asdf".into(),
//!     weight: 1,
//! })?;
//! ```

mod error;
mod generator;
mod type_mapper;

pub use error::GenerateError;
pub use generator::{Generator, generate};
pub use type_mapper::CSharpTypeMapper;

// Re-exported so backend consumers can name the seam types without a direct
// classgen-reflect dependency.
pub use classgen_reflect::{Reflect, TypeMapper};
