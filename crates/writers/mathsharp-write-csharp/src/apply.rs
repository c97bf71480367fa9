//! Operator applications.
//!
//! An `apply` node's first child names the operation and the rest are its
//! operands. Dispatch is on operand count first, then on the head.

use crate::conditional;
use crate::fragment::Fragment;
use crate::value::{self, E, LOG10};
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{BinaryOp, Classify, Kind};

/// Translate an `apply` node.
pub fn translate(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    let children: Vec<NodeRef<'_>> = node.children().collect();
    match children.as_slice() {
        [] => Ok(Fragment::Empty),
        [head, arg] => unary(node, *head, *arg),
        [head, lhs, rhs] => binary(node, *head, *lhs, *rhs),
        _ => Err(EmitError::unsupported(Position::Apply, node)),
    }
}

fn binary(
    node: NodeRef<'_>,
    head: NodeRef<'_>,
    lhs: NodeRef<'_>,
    rhs: NodeRef<'_>,
) -> Result<Fragment, EmitError> {
    match head.kind() {
        Kind::Binary(op) => {
            let a = value::resolve(lhs)?;
            let b = value::resolve(rhs)?;
            if op == BinaryOp::Plus && lhs.kind() == Kind::Apply && rhs.kind() == Kind::Apply {
                match (has_imag(lhs), has_imag(rhs)) {
                    (false, true) => return Ok(Fragment::complex(a, b)),
                    (true, false) => return Ok(Fragment::complex(b, a)),
                    _ => {}
                }
            }
            Ok(Fragment::infix(op.symbol(), a, b))
        }
        Kind::NthRoot => {
            // nthRoot(degree, radicand)
            let degree = value::resolve(lhs)?;
            let radicand = value::resolve(rhs)?;
            let exponent = Fragment::infix("/", Fragment::atom("1.0"), degree);
            Ok(Fragment::group(Fragment::call(
                "Math.Pow",
                vec![radicand, exponent],
            )))
        }
        Kind::Pow => {
            let base = value::resolve(lhs)?;
            let exponent = value::resolve(rhs)?;
            Ok(Fragment::group(Fragment::call(
                "Math.Pow",
                vec![base, exponent],
            )))
        }
        Kind::Indexer => {
            let target = value::resolve(lhs)?;
            let index = value::resolve(rhs)?;
            Ok(Fragment::group(Fragment::index(target, index)))
        }
        _ => Err(EmitError::unsupported(Position::Apply, node)),
    }
}

fn unary(node: NodeRef<'_>, head: NodeRef<'_>, arg: NodeRef<'_>) -> Result<Fragment, EmitError> {
    let call = |func: String, args: Vec<Fragment>| Fragment::group(Fragment::call(func, args));

    match (head.kind(), arg.kind()) {
        (Kind::Id, Kind::Id) => {
            let func = value::identifier(head);
            let mut operand = value::identifier(arg);
            if func == LOG10 && operand == "e" {
                operand = E.to_string();
            }
            Ok(call(func, vec![Fragment::atom(operand)]))
        }
        (Kind::Id, Kind::Real | Kind::Apply) => {
            Ok(call(value::identifier(head), vec![value::resolve(arg)?]))
        }
        (Kind::Id, Kind::Sequence) => {
            let func = value::identifier(head);
            let items = value::sequence_items(arg)?;
            if func == "if" {
                conditional::ternary(arg, items)
            } else {
                Ok(call(func, items))
            }
        }
        (Kind::Sqrt, Kind::Apply | Kind::Id) => {
            Ok(call("Math.Sqrt".into(), vec![value::resolve(arg)?]))
        }
        (Kind::AbsVal, Kind::Apply | Kind::Id) => {
            Ok(call("Math.Abs".into(), vec![value::resolve(arg)?]))
        }
        (Kind::Neg, Kind::Apply | Kind::Id) => Ok(Fragment::negate(value::resolve(arg)?)),
        (Kind::Find, Kind::Id) => Ok(call(
            "Solve".into(),
            vec![Fragment::atom(value::identifier(arg))],
        )),
        (Kind::VectorSum, Kind::Id) => Ok(call(
            "Vector.Sum".into(),
            vec![Fragment::atom(value::identifier(arg))],
        )),
        _ => Err(EmitError::unsupported(Position::Apply, node)),
    }
}

fn has_imag(node: NodeRef<'_>) -> bool {
    node.descendants().any(|n| n.kind() == Kind::Imag)
}
