//! Reader and writer errors.

use crate::NodeRef;

/// Error during parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during emitting.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A node's shape matches no recognized pattern at its position.
    #[error("unsupported {position}: {shape}")]
    Unsupported { position: Position, shape: String },
}

impl EmitError {
    /// Build an unsupported-construct error describing `node`.
    pub fn unsupported(position: Position, node: NodeRef<'_>) -> Self {
        EmitError::Unsupported {
            position,
            shape: node.shape(),
        }
    }

    /// The position at which emitting stopped.
    pub fn position(&self) -> Position {
        match self {
            EmitError::Unsupported { position, .. } => *position,
        }
    }
}

/// Syntactic slot in which an unsupported construct was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Value,
    Parens,
    Sequence,
    Apply,
    Conditional,
    Definition,
    Function,
    Range,
    Matrix,
    MatrixCell,
    Eval,
    UnitOverride,
    Result,
    Program,
    IfThen,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Position::Value => "value",
            Position::Parens => "parenthesized group",
            Position::Sequence => "sequence element",
            Position::Apply => "apply",
            Position::Conditional => "if/then/else sequence",
            Position::Definition => "definition",
            Position::Function => "function signature",
            Position::Range => "range",
            Position::Matrix => "matrix",
            Position::MatrixCell => "matrix cell",
            Position::Eval => "eval",
            Position::UnitOverride => "unit override",
            Position::Result => "result",
            Position::Program => "program statement",
            Position::IfThen => "if/then branch",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, DocumentBuilder, QName};

    #[test]
    fn test_unsupported_message_names_shape() {
        let mut b = DocumentBuilder::new();
        b.open(QName::unbound("define"), Attributes::new()).unwrap();
        b.leaf(QName::unbound("id"), Attributes::new()).unwrap();
        b.leaf(QName::unbound("real"), Attributes::new()).unwrap();
        b.leaf(QName::unbound("real"), Attributes::new()).unwrap();
        b.close();
        let doc = b.finish().unwrap();

        let err = EmitError::unsupported(Position::Definition, doc.root());
        assert_eq!(err.to_string(), "unsupported definition: define(id, real, real)");
        assert_eq!(err.position(), Position::Definition);
    }
}
