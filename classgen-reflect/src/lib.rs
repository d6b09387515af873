//! Language-agnostic type descriptions for classgen code generators.
//!
//! This crate provides the unified type representation used across the
//! classgen pipeline. A sample value is described by a [`TypeDescriptor`]
//! graph (static structure) paired with a [`Value`] view (runtime
//! structure: pointer nilness, dynamic contents), and language backends
//! consume both through the [`Reflect`] trait.
//!
//! # Architecture
//!
//! ```text
//! #[derive(Reflect)] model → classgen-reflect (descriptors + values) → backend
//! ```
//!
//! The types here are designed to be:
//! - Language-agnostic (no C#-specific concerns; backends implement
//!   [`TypeMapper`])
//! - Cycle-safe (nested types are referenced lazily, so self-referential
//!   records can be described)
//! - Identity-based (two record types with identical shapes are still
//!   distinct, keyed by [`std::any::TypeId`])

mod descriptor;
mod dynamic;
mod mapper;
mod reflect;
mod value;

pub use descriptor::{DescriptorFn, FieldDescriptor, Kind, TypeDescriptor};
pub use dynamic::Dynamic;
pub use mapper::{TypeMapper, UnsupportedType};
pub use reflect::Reflect;
pub use value::Value;

#[cfg(feature = "derive")]
pub use classgen_derive::Reflect;
