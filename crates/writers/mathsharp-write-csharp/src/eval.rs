//! Evaluations (`x = 4.2`): the worksheet's displayed result becomes the
//! field's value.

use crate::fragment::Fragment;
use crate::{EmitContext, apply, matrix, value};
use mathsharp_core::{EmitError, FidelityWarning, NodeRef, Position, Severity, WarningKind};
use mathsharp_xmcd::{Classify, Kind};

enum Outcome<'a> {
    Scalar(Fragment),
    Complex(Fragment),
    Matrix(NodeRef<'a>),
}

/// Emit an `eval` node.
pub(crate) fn emit(node: NodeRef<'_>, ctx: &mut EmitContext) -> Result<(), EmitError> {
    let children: Vec<NodeRef<'_>> = node.children().collect();
    match children.as_slice() {
        [target] if target.kind() == Kind::Id => {
            ctx.code
                .line(format!("public double {} = 0;", value::identifier(*target)));
            Ok(())
        }
        [target, result] if is_target(*target) && result.kind() == Kind::Result => {
            let target = translate_target(*target)?;
            let outcome = outcome(*result)?;
            assign(ctx, &target, outcome, None)
        }
        [target, unit, result]
            if is_target(*target)
                && unit.kind() == Kind::UnitOverride
                && result.kind() == Kind::Result =>
        {
            let target = translate_target(*target)?;
            let unit = unit_override(*unit)?;
            let outcome = outcome(*result)?;
            ctx.warnings.push(FidelityWarning::new(
                Severity::Info,
                WarningKind::UnitDiscarded(unit.to_string()),
                format!("unit {unit} on {target} kept only as a comment"),
            ));
            assign(ctx, &target, outcome, Some(&unit))
        }
        _ => Err(EmitError::unsupported(Position::Eval, node)),
    }
}

fn is_target(node: NodeRef<'_>) -> bool {
    matches!(node.kind(), Kind::Id | Kind::Apply)
}

fn translate_target(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    match node.kind() {
        Kind::Id => Ok(Fragment::atom(value::identifier(node))),
        _ => apply::translate(node),
    }
}

fn assign(
    ctx: &mut EmitContext,
    target: &Fragment,
    outcome: Outcome<'_>,
    unit: Option<&Fragment>,
) -> Result<(), EmitError> {
    let comment = unit.map(|u| format!(" // unit: {u}")).unwrap_or_default();
    match outcome {
        Outcome::Scalar(v) => ctx
            .code
            .line(format!("public double {target} = {v};{comment}")),
        Outcome::Complex(v) => ctx
            .code
            .line(format!("public Complex {target} = {v};{comment}")),
        Outcome::Matrix(node) => {
            if let Some(u) = unit {
                ctx.code.line(format!("// unit: {u}"));
            }
            matrix::emit(&target.to_string(), node, &mut ctx.code)?;
        }
    }
    Ok(())
}

fn unit_override(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    let mut children = node.children();
    match (children.next(), children.next()) {
        (Some(unit), None) if matches!(unit.kind(), Kind::Apply | Kind::Id) => value::resolve(unit),
        _ => Err(EmitError::unsupported(Position::UnitOverride, node)),
    }
}

fn outcome(result: NodeRef<'_>) -> Result<Outcome<'_>, EmitError> {
    let mut children = result.children();
    let (Some(shown), None) = (children.next(), children.next()) else {
        return Err(EmitError::unsupported(Position::Result, result));
    };

    match shown.kind() {
        Kind::Real => Ok(Outcome::Scalar(value::resolve(shown)?)),
        Kind::UnitedValue => {
            let parts: Vec<NodeRef<'_>> = shown.children().collect();
            match parts.as_slice() {
                [magnitude, unit]
                    if magnitude.kind() == Kind::Real && unit.kind() == Kind::UnitMonomial =>
                {
                    Ok(Outcome::Scalar(value::resolve(*magnitude)?))
                }
                _ => Err(EmitError::unsupported(Position::Result, shown)),
            }
        }
        Kind::Complex => Ok(Outcome::Complex(value::complex_literal(
            shown,
            Position::Result,
        )?)),
        Kind::Matrix => Ok(Outcome::Matrix(shown)),
        _ => Err(EmitError::unsupported(Position::Result, result)),
    }
}
