//! Definitions (`x := ...`, `f(a, b) := ...`).

use crate::unit::CodeWriter;
use crate::{apply, matrix, program, range, value};
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{Classify, Kind};

/// Emit a `define` or `globalDefine` node.
pub fn emit(node: NodeRef<'_>, code: &mut CodeWriter) -> Result<(), EmitError> {
    let children: Vec<NodeRef<'_>> = node.children().collect();
    let [left, right] = children.as_slice() else {
        return Err(EmitError::unsupported(Position::Definition, node));
    };
    let (left, right) = (*left, *right);

    match (left.kind(), right.kind()) {
        (Kind::Id, Kind::Real | Kind::Id) => {
            let name = value::identifier(left);
            code.line(format!("public double {name} = {};", value::resolve(right)?));
        }
        (Kind::Id, Kind::Apply | Kind::Parens) => {
            let name = value::identifier(left);
            let body = value::resolve(right)?;
            code.line(format!("public double {name} {{ get {{ return {body}; }} }}"));
        }
        (Kind::Function, Kind::Apply | Kind::Parens) => {
            let signature = signature(left)?;
            let body = value::resolve(right)?;
            code.line(signature);
            code.open();
            code.line(format!("return {body};"));
            code.close();
        }
        (Kind::Id, Kind::Range) => {
            let name = value::identifier(left);
            let range = range::translate(right)?;
            code.line(format!("public IEnumerable<int> {name} = {range};"));
        }
        (Kind::Id, Kind::Matrix) => matrix::emit(&value::identifier(left), right, code)?,
        (Kind::Id, Kind::Program) => {
            code.line(format!("public double {}", value::identifier(left)));
            code.open();
            code.line("get");
            code.open();
            program::emit(right, code)?;
            code.close();
            code.close();
        }
        (Kind::Apply, Kind::Apply | Kind::Parens) => {
            let target = apply::translate(left)?;
            code.line(format!("{target} = {};", value::resolve(right)?));
        }
        (Kind::Apply, Kind::Program) => {
            let target = apply::translate(left)?;
            code.line(format!("{target} = new Func<double>(() =>"));
            code.open();
            program::emit(right, code)?;
            code.close_with(")();");
        }
        _ => return Err(EmitError::unsupported(Position::Definition, node)),
    }
    Ok(())
}

/// `public double f(double a, double b)` from `function(id, boundVars)`.
fn signature(function: NodeRef<'_>) -> Result<String, EmitError> {
    let children: Vec<NodeRef<'_>> = function.children().collect();
    match children.as_slice() {
        [name, vars] if name.kind() == Kind::Id && vars.kind() == Kind::BoundVars => {
            let params = vars
                .children()
                .map(|v| value::resolve(v).map(|p| format!("double {p}")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!(
                "public double {}({})",
                value::identifier(*name),
                params.join(", ")
            ))
        }
        _ => Err(EmitError::unsupported(Position::Function, function)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::math;

    fn render(xml: &str) -> Result<String, EmitError> {
        let doc = math(xml);
        let node = doc
            .root()
            .descendants()
            .find(|n| matches!(n.kind(), Kind::Define | Kind::GlobalDefine))
            .unwrap();
        let mut code = CodeWriter::new(4);
        emit(node, &mut code)?;
        Ok(code.finish())
    }

    #[test]
    fn test_scalar_definitions() {
        assert_eq!(
            render("<ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real></ml:define>").unwrap(),
            "public double x = 3.5;\n"
        );
        assert_eq!(
            render("<ml:globalDefine><ml:id>r</ml:id><ml:id>π</ml:id></ml:globalDefine>").unwrap(),
            "public double r = Math.PI;\n"
        );
    }

    #[test]
    fn test_computed_property() {
        assert_eq!(
            render(
                "<ml:define><ml:id subscript=\"2\">A</ml:id><ml:apply><ml:mult/><ml:id>b</ml:id><ml:id>h</ml:id></ml:apply></ml:define>"
            )
            .unwrap(),
            "public double A_2 { get { return (b * h); } }\n"
        );
        assert_eq!(
            render("<ml:define><ml:id>y</ml:id><ml:parens><ml:id>z</ml:id></ml:parens></ml:define>")
                .unwrap(),
            "public double y { get { return z; } }\n"
        );
    }

    #[test]
    fn test_function_definition() {
        let out = render(
            "<ml:define>\
             <ml:function><ml:id>f</ml:id><ml:boundVars><ml:id>a</ml:id><ml:id>b</ml:id></ml:boundVars></ml:function>\
             <ml:apply><ml:plus/><ml:id>a</ml:id><ml:id>b</ml:id></ml:apply>\
             </ml:define>",
        )
        .unwrap();
        assert_eq!(
            out,
            "public double f(double a, double b)\n{\n    return (a + b);\n}\n"
        );
    }

    #[test]
    fn test_function_signature_shape() {
        let err = render(
            "<ml:define><ml:function><ml:id>f</ml:id></ml:function><ml:apply/></ml:define>",
        )
        .unwrap_err();
        assert_eq!(err.position(), Position::Function);
    }

    #[test]
    fn test_range_definition() {
        assert_eq!(
            render("<ml:define><ml:id>i</ml:id><ml:range><ml:real>0</ml:real><ml:id>n</ml:id></ml:range></ml:define>")
                .unwrap(),
            "public IEnumerable<int> i = Enumerable.Range(0, (n - 0));\n"
        );
    }

    #[test]
    fn test_program_property() {
        let out = render(
            "<ml:define><ml:id>s</ml:id><ml:program>\
             <ml:ifThen><ml:apply><ml:greaterThan/><ml:id>x</ml:id><ml:real>0</ml:real></ml:apply><ml:real>1</ml:real></ml:ifThen>\
             </ml:program></ml:define>",
        )
        .unwrap();
        assert_eq!(
            out,
            "public double s\n{\n    get\n    {\n        if (x > 0)\n        {\n            return 1;\n        }\n    }\n}\n"
        );
    }

    #[test]
    fn test_assignments() {
        assert_eq!(
            render(
                "<ml:define><ml:apply><ml:indexer/><ml:id>v</ml:id><ml:real>0</ml:real></ml:apply><ml:apply><ml:div/><ml:id>a</ml:id><ml:real>2</ml:real></ml:apply></ml:define>"
            )
            .unwrap(),
            "(v[0]) = (a / 2);\n"
        );

        let out = render(
            "<ml:define><ml:apply><ml:indexer/><ml:id>v</ml:id><ml:real>1</ml:real></ml:apply><ml:program>\
             <ml:ifThen><ml:apply><ml:lessThan/><ml:id>a</ml:id><ml:real>0</ml:real></ml:apply><ml:real>0</ml:real></ml:ifThen>\
             </ml:program></ml:define>",
        )
        .unwrap();
        assert_eq!(
            out,
            "(v[1]) = new Func<double>(() =>\n{\n    if (a < 0)\n    {\n        return 0;\n    }\n})();\n"
        );
    }

    #[test]
    fn test_three_children_is_unsupported() {
        let err = render("<ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real><ml:real>1</ml:real></ml:define>")
            .unwrap_err();
        assert_eq!(err.to_string(), "unsupported definition: define(id, real, real)");
    }

    #[test]
    fn test_unknown_pair() {
        let err = render("<ml:define><ml:real>1</ml:real><ml:id>x</ml:id></ml:define>").unwrap_err();
        assert_eq!(err.position(), Position::Definition);
    }
}
