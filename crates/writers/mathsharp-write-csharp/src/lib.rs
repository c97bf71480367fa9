//! C# writer for mathsharp.
//!
//! Walks a worksheet's math content in document order and emits one C#
//! class: definitions become fields, properties and methods, evaluations
//! become fields initialized with the worksheet's displayed result.
//!
//! A construct the translator cannot express aborts the whole document
//! with [`EmitError::Unsupported`]. Math elements the walker meets outside
//! any translated construct are reported as
//! [`WarningKind::UnimplementedNode`] warnings instead.
//!
//! # Example
//!
//! ```
//! use mathsharp_write_csharp::emit_members;
//!
//! let xmcd = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
//!                          xmlns:ml="http://schemas.mathsoft.com/math30">
//!   <math><ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real></ml:define></math>
//! </worksheet>"#;
//!
//! let doc = mathsharp_read_xmcd::parse(xmcd).unwrap().value;
//! let result = emit_members(&doc).unwrap();
//! assert_eq!(result.value, "public double x = 3.5;\n");
//! ```

mod apply;
mod conditional;
mod define;
mod eval;
pub mod fragment;
mod matrix;
mod program;
mod range;
pub mod unit;
mod value;

pub use fragment::Fragment;
pub use unit::CodeWriter;

use mathsharp_core::{
    ConversionResult, Document, EmitError, EmitOptions, FidelityWarning, NodeRef, Severity,
    WarningKind,
};
use mathsharp_xmcd::{Classify, Kind, ns};
use std::collections::BTreeSet;

/// Namespaces imported by every generated file.
pub const USINGS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Linq",
    "System.Numerics",
    "System.Text",
    "System.Threading.Tasks",
    "MathNet.Numerics.LinearAlgebra",
];

/// Emit a worksheet as a C# compilation unit.
pub fn emit(doc: &Document) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    emit_with_options(doc, &EmitOptions::default())
}

/// Emit a worksheet as a C# compilation unit with options.
pub fn emit_with_options(
    doc: &Document,
    options: &EmitOptions,
) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    let mut ctx = EmitContext::new(options.indent);

    for using in USINGS {
        ctx.code.line(format!("using {using};"));
    }
    ctx.code.line("");
    ctx.code.line(format!("namespace {}", options.namespace));
    ctx.code.open();
    ctx.code.line(format!("public class {}", options.class_name));
    ctx.code.open();

    walk(doc.root(), &mut ctx)?;

    ctx.code.close();
    ctx.code.close();

    let result = ctx.finish();
    Ok(ConversionResult::with_warnings(
        result.value.into_bytes(),
        result.warnings,
    ))
}

/// Emit only the class members, unindented, without the surrounding
/// namespace and class.
pub fn emit_members(doc: &Document) -> Result<ConversionResult<String>, EmitError> {
    let mut ctx = EmitContext::new(EmitOptions::default().indent);
    walk(doc.root(), &mut ctx)?;
    Ok(ctx.finish())
}

struct EmitContext {
    code: CodeWriter,
    warnings: Vec<FidelityWarning>,
    unimplemented: BTreeSet<String>,
}

impl EmitContext {
    fn new(indent: usize) -> Self {
        Self {
            code: CodeWriter::new(indent),
            warnings: Vec::new(),
            unimplemented: BTreeSet::new(),
        }
    }

    fn finish(mut self) -> ConversionResult<String> {
        for kind in std::mem::take(&mut self.unimplemented) {
            self.warnings.push(FidelityWarning::new(
                Severity::Minor,
                WarningKind::UnimplementedNode(kind.clone()),
                format!("not yet implemented: {kind}"),
            ));
        }
        ConversionResult::with_warnings(self.code.finish(), self.warnings)
    }
}

/// Dispatch every math element below `root` in document order.
///
/// Traversal continues into the children of handled elements, so their
/// operands are visited again and land in the unimplemented set.
fn walk(root: NodeRef<'_>, ctx: &mut EmitContext) -> Result<(), EmitError> {
    for node in root.descendants() {
        if node.namespace() != Some(ns::MATH) {
            continue;
        }
        match node.kind() {
            Kind::Define | Kind::GlobalDefine => define::emit(node, &mut ctx.code)?,
            Kind::Eval => eval::emit(node, ctx)?,
            Kind::Apply if is_region_level(node) => {
                let expr = apply::translate(node)?;
                ctx.code
                    .line(format!("public double Function {{ get {{ return {expr}; }} }}"));
            }
            _ => {
                ctx.unimplemented.insert(node.local_name().to_string());
            }
        }
    }
    Ok(())
}

/// An expression standing directly in a math region rather than inside a
/// definition or evaluation.
fn is_region_level(node: NodeRef<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == Kind::MathRegion)
}
