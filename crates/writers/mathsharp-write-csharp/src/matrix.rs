//! Matrix literals as Math.NET dense-matrix properties.

use crate::apply;
use crate::fragment::Fragment;
use crate::unit::CodeWriter;
use crate::value;
use mathsharp_core::{EmitError, NodeRef, Position};
use mathsharp_xmcd::{Classify, Kind, attr};

/// Row and column of the cell at flat `index`. Cells are stored
/// column-major.
pub fn cell_position(index: usize, rows: usize) -> (usize, usize) {
    (index % rows, index / rows)
}

/// Emit a getter property `name` that builds the matrix.
pub fn emit(name: &str, node: NodeRef<'_>, code: &mut CodeWriter) -> Result<(), EmitError> {
    let rows = dimension(node, attr::ROWS);
    let cols = dimension(node, attr::COLS);
    let cells = node
        .children()
        .map(cell)
        .collect::<Result<Vec<_>, _>>()?;
    if rows == 0 && !cells.is_empty() {
        return Err(EmitError::unsupported(Position::Matrix, node));
    }

    let element = if cells.iter().any(Fragment::is_complex) {
        "Complex"
    } else {
        "double"
    };

    code.line(format!("public Matrix<{element}> {name}"));
    code.open();
    code.line("get");
    code.open();
    code.line(format!(
        "var matrix = Matrix<{element}>.Build.Dense({rows}, {cols});"
    ));
    for (i, value) in cells.iter().enumerate() {
        let (row, col) = cell_position(i, rows);
        code.line(format!("matrix[{row}, {col}] = {value};"));
    }
    code.line("return matrix;");
    code.close();
    code.close();
    Ok(())
}

fn dimension(node: NodeRef<'_>, key: &str) -> usize {
    node.node().attrs.get_parsed(key).unwrap_or(0)
}

fn cell(node: NodeRef<'_>) -> Result<Fragment, EmitError> {
    match node.kind() {
        Kind::Real => value::resolve(node),
        Kind::Complex => value::complex_literal(node, Position::MatrixCell),
        Kind::Apply => apply::translate(node),
        Kind::Parens => value::parens(node),
        _ => Err(EmitError::unsupported(Position::MatrixCell, node)),
    }
}
