//! Leaf values: literals, identifiers, groups and sequences.

use crate::apply;
use crate::fragment::Fragment;
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{Classify, Kind, attr};

pub const PI: &str = "Math.PI";
pub const LN: &str = "Math.Log";
pub const LOG10: &str = "Math.Log10";
pub const E: &str = "Math.E";

/// Translate any node that can stand in value position.
pub fn resolve(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    match node.kind() {
        Kind::Real => Ok(Fragment::atom(node.text())),
        Kind::Id => Ok(Fragment::atom(identifier(node))),
        Kind::Imag => Ok(Fragment::atom(format!("{}i", node.text()))),
        Kind::Apply => apply::translate(node),
        Kind::Parens => parens(node),
        Kind::Sequence => sequence(node),
        _ => Err(EmitError::unsupported(Position::Value, node)),
    }
}

/// Identifier text with its subscript, mapped onto `Math` members where
/// the worksheet uses a built-in name.
pub fn identifier(node: NodeRef<'_>) -> String {
    let name = match node.attr(attr::SUBSCRIPT) {
        Some(sub) => format!("{}_{}", node.text(), sub),
        None => node.text().to_string(),
    };
    match name.as_str() {
        "π" => PI.to_string(),
        "ln" => LN.to_string(),
        "log" => LOG10.to_string(),
        _ => name,
    }
}

/// A parenthesized group renders as its single operand; operations carry
/// their own parentheses.
pub fn parens(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    let mut children = node.children();
    match (children.next(), children.next()) {
        (Some(inner), None) if matches!(inner.kind(), Kind::Apply | Kind::Real | Kind::Id) => {
            resolve(inner)
        }
        _ => Err(EmitError::unsupported(Position::Parens, node)),
    }
}

/// A comma-separated argument list.
pub fn sequence(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    sequence_items(node).map(Fragment::List)
}

/// The items of a sequence, each translated on its own.
pub fn sequence_items(node: NodeRef<'_>) -> Result<Vec<Fragment>, EmitError> {
    node.children()
        .map(|item| match item.kind() {
            Kind::Real | Kind::Id | Kind::Apply => resolve(item),
            _ => Err(EmitError::unsupported(Position::Sequence, item)),
        })
        .collect()
}

/// A literal `complex` element: its `real` and `imag` parts as
/// `new Complex(re, im)`.
pub fn complex_literal(node: NodeRef<'_>, position: Position) -> Result<Fragment, EmitError> {
    let part = |kind: Kind| node.children().find(|c| c.kind() == kind);
    match (part(Kind::Real), part(Kind::Imag)) {
        (Some(re), Some(im)) => Ok(Fragment::complex(
            Fragment::atom(re.text()),
            Fragment::atom(im.text()),
        )),
        _ => Err(EmitError::unsupported(position, node)),
    }
}
