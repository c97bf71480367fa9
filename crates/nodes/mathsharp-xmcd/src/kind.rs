//! Closed classification of worksheet elements.

use crate::{math, ns, units, worksheet};
use mathsharp_core::{NodeRef, QName};

/// Every element shape the translator distinguishes.
///
/// Anything outside the known vocabulary is [`Kind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // Worksheet structure
    MathRegion,
    BinaryContent,

    // Math structure
    Define,
    GlobalDefine,
    Eval,
    Apply,
    Id,
    Real,
    Imag,
    Complex,
    Parens,
    Sequence,
    Range,
    Matrix,
    Program,
    IfThen,
    Function,
    BoundVars,
    UnitOverride,
    Result,
    UnitedValue,

    // Operator heads of an apply
    Binary(BinaryOp),
    NthRoot,
    Pow,
    Indexer,
    Sqrt,
    AbsVal,
    Neg,
    Find,
    VectorSum,

    // Units
    UnitMonomial,

    Other,
}

impl Kind {
    /// Classify a qualified name.
    pub fn of(name: &QName) -> Kind {
        match name.namespace.as_deref() {
            Some(ns::MATH) => Self::math(&name.local),
            Some(ns::WORKSHEET) => match name.local.as_str() {
                worksheet::MATH => Kind::MathRegion,
                worksheet::BINARY_CONTENT => Kind::BinaryContent,
                _ => Kind::Other,
            },
            Some(ns::UNITS) if name.local == units::UNIT_MONOMIAL => Kind::UnitMonomial,
            _ => Kind::Other,
        }
    }

    fn math(local: &str) -> Kind {
        if let Some(op) = BinaryOp::from_tag(local) {
            return Kind::Binary(op);
        }
        match local {
            math::DEFINE => Kind::Define,
            math::GLOBAL_DEFINE => Kind::GlobalDefine,
            math::EVAL => Kind::Eval,
            math::APPLY => Kind::Apply,
            math::ID => Kind::Id,
            math::REAL => Kind::Real,
            math::IMAG => Kind::Imag,
            math::COMPLEX => Kind::Complex,
            math::PARENS => Kind::Parens,
            math::SEQUENCE => Kind::Sequence,
            math::RANGE => Kind::Range,
            math::MATRIX => Kind::Matrix,
            math::PROGRAM => Kind::Program,
            math::IF_THEN => Kind::IfThen,
            math::FUNCTION => Kind::Function,
            math::BOUND_VARS => Kind::BoundVars,
            math::UNIT_OVERRIDE => Kind::UnitOverride,
            math::RESULT => Kind::Result,
            math::UNITED_VALUE => Kind::UnitedValue,
            math::FIND => Kind::Find,
            math::VECTOR_SUM => Kind::VectorSum,
            math::NTH_ROOT => Kind::NthRoot,
            math::POW => Kind::Pow,
            math::INDEXER => Kind::Indexer,
            math::SQRT => Kind::Sqrt,
            math::ABSVAL => Kind::AbsVal,
            math::NEG => Kind::Neg,
            _ => Kind::Other,
        }
    }
}

/// Infix operators of a three-child apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mult,
    Minus,
    Div,
    Plus,
    LessThan,
    GreaterThan,
    GreaterOrEqual,
    LessOrEqual,
    Equal,
}

impl BinaryOp {
    /// All operators.
    pub const ALL: [BinaryOp; 9] = [
        BinaryOp::Mult,
        BinaryOp::Minus,
        BinaryOp::Div,
        BinaryOp::Plus,
        BinaryOp::LessThan,
        BinaryOp::GreaterThan,
        BinaryOp::GreaterOrEqual,
        BinaryOp::LessOrEqual,
        BinaryOp::Equal,
    ];

    /// Look up an operator by its math tag.
    pub fn from_tag(tag: &str) -> Option<BinaryOp> {
        BinaryOp::ALL.into_iter().find(|op| op.tag() == tag)
    }

    /// The math tag naming this operator.
    pub fn tag(self) -> &'static str {
        match self {
            BinaryOp::Mult => math::MULT,
            BinaryOp::Minus => math::MINUS,
            BinaryOp::Div => math::DIV,
            BinaryOp::Plus => math::PLUS,
            BinaryOp::LessThan => math::LESS_THAN,
            BinaryOp::GreaterThan => math::GREATER_THAN,
            BinaryOp::GreaterOrEqual => math::GREATER_OR_EQUAL,
            BinaryOp::LessOrEqual => math::LESS_OR_EQUAL,
            BinaryOp::Equal => math::EQUAL,
        }
    }

    /// The C-family operator token.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mult => "*",
            BinaryOp::Minus => "-",
            BinaryOp::Div => "/",
            BinaryOp::Plus => "+",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterOrEqual => ">=",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::Equal => "==",
        }
    }
}

/// Classification of tree nodes.
pub trait Classify {
    /// The node's kind.
    fn kind(&self) -> Kind;
}

impl Classify for NodeRef<'_> {
    fn kind(&self) -> Kind {
        Kind::of(self.name())
    }
}
