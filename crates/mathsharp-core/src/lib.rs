//! mathsharp-core: Worksheet tree representation.
//!
//! This crate provides the immutable element tree that worksheet readers
//! produce and code writers consume, together with the shared error,
//! option and fidelity-warning types.

mod attributes;
mod document;
mod error;
mod fidelity;
mod node;
mod options;
mod resource;

pub use attributes::*;
pub use document::*;
pub use error::*;
pub use fidelity::*;
pub use node::*;
pub use options::*;
pub use resource::*;
