//! Multi-line programs: guarded returns and bare statements.

use crate::apply;
use crate::unit::CodeWriter;
use crate::value;
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{Classify, Kind};

/// Write the statements of a `program` at the current indentation.
pub fn emit(node: NodeRef<'_>, code: &mut CodeWriter) -> Result<(), EmitError> {
    for statement in node.children() {
        match statement.kind() {
            Kind::IfThen => if_then(statement, code)?,
            Kind::Apply => {
                let expr = apply::translate(statement)?;
                code.line(format!("{expr};"));
            }
            _ => return Err(EmitError::unsupported(Position::Program, statement)),
        }
    }
    Ok(())
}

fn if_then(node: NodeRef<'_>, code: &mut CodeWriter) -> Result<(), EmitError> {
    let children: Vec<NodeRef<'_>> = node.children().collect();
    let [cond, body] = children.as_slice() else {
        return Err(EmitError::unsupported(Position::IfThen, node));
    };
    if cond.kind() != Kind::Apply || !matches!(body.kind(), Kind::Real | Kind::Program) {
        return Err(EmitError::unsupported(Position::IfThen, node));
    }

    let cond = apply::translate(*cond)?;
    if cond.is_parenthesized() {
        code.line(format!("if {cond}"));
    } else {
        code.line(format!("if ({cond})"));
    }
    code.open();
    if body.kind() == Kind::Program {
        emit(*body, code)?;
    } else {
        code.line(format!("return {};", value::resolve(*body)?));
    }
    code.close();
    Ok(())
}
