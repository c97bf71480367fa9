//! Integer ranges `s..b`.

use crate::fragment::Fragment;
use crate::value;
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{Classify, Kind};

/// `Enumerable.Range(start, (bound - start))`.
pub fn translate(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    let children: Vec<NodeRef<'_>> = node.children().collect();
    match children.as_slice() {
        [start, bound]
            if start.kind() == Kind::Real && matches!(bound.kind(), Kind::Parens | Kind::Id) =>
        {
            let start = value::resolve(*start)?;
            let bound = value::resolve(*bound)?;
            let count = Fragment::infix("-", bound, start.clone());
            Ok(Fragment::call("Enumerable.Range", vec![start, count]))
        }
        _ => Err(EmitError::unsupported(Position::Range, node)),
    }
}
