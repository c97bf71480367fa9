//! Mathsharp - Mathcad worksheet to C# translation
//!
//! Mathsharp reads Mathcad `.xmcd` worksheets and emits one C# class per
//! worksheet, with:
//! - Namespace-resolved, immutable document trees
//! - A closed classification of worksheet elements
//! - Fidelity tracking (know which constructs were left untranslated)
//! - Extraction of embedded images
//!
//! # Quick Start
//!
//! ```rust
//! use mathsharp::prelude::*;
//!
//! let xmcd = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
//!                          xmlns:ml="http://schemas.mathsoft.com/math30">
//!   <math><ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real></ml:define></math>
//! </worksheet>"#;
//!
//! let options = EmitOptions::default().with_class_name("Beam");
//! let cs = mathsharp::translate(xmcd, &options).unwrap();
//! assert!(cs.value.contains("public class Beam"));
//! assert!(cs.value.contains("public double x = 3.5;"));
//! ```
//!
//! # Features
//!
//! - `xmcd` - Worksheet reader and attachment extractor (default)
//! - `csharp` - C# writer (default)

// Re-export core types
pub use mathsharp_core::*;

use std::path::Path;

/// Worksheet vocabulary and element classification.
pub mod vocab {
    pub use mathsharp_xmcd::{BinaryOp, Classify, Kind, attr, math, ns, units, worksheet};
}

/// Worksheet (`.xmcd`) reading.
#[cfg(feature = "xmcd")]
pub mod xmcd {
    pub use mathsharp_read_xmcd::binary;
    pub use mathsharp_read_xmcd::parse;
    pub use mathsharp_read_xmcd::parse_file;
}

/// C# emission.
#[cfg(feature = "csharp")]
pub mod csharp {
    pub use mathsharp_write_csharp::emit;
    pub use mathsharp_write_csharp::emit_members;
    pub use mathsharp_write_csharp::emit_with_options;
    pub use mathsharp_write_csharp::{CodeWriter, Fragment, USINGS};
}

/// Error from a complete translation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Translate worksheet XML to C# source.
///
/// Reader and writer warnings are merged, reader warnings first.
#[cfg(all(feature = "xmcd", feature = "csharp"))]
pub fn translate(input: &str, options: &EmitOptions) -> Result<ConversionResult<String>, Error> {
    let parsed = xmcd::parse(input)?;
    Ok(translate_document(parsed, options)?)
}

/// Translate a worksheet that has already been parsed, keeping the
/// reader's warnings ahead of the writer's.
#[cfg(feature = "csharp")]
pub fn translate_document(
    parsed: ConversionResult<Document>,
    options: &EmitOptions,
) -> Result<ConversionResult<String>, EmitError> {
    let emitted = csharp::emit_with_options(&parsed.value, options)?;

    let mut warnings = parsed.warnings;
    warnings.extend(emitted.warnings);
    let source = String::from_utf8_lossy(&emitted.value).into_owned();
    Ok(ConversionResult::with_warnings(source, warnings))
}

/// Read and translate the worksheet at `path`.
#[cfg(all(feature = "xmcd", feature = "csharp"))]
pub fn translate_file(path: &Path, options: &EmitOptions) -> Result<ConversionResult<String>, Error> {
    let input = std::fs::read_to_string(path).map_err(ParseError::from)?;
    translate(&input, options)
}

/// Commonly used types.
pub mod prelude {
    pub use crate::vocab::{Classify, Kind};
    pub use crate::{ConversionResult, Document, EmitOptions, FidelityWarning, NodeRef};
}
