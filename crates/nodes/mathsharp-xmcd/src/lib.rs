//! Mathcad worksheet (`.xmcd`) vocabulary for mathsharp.
//!
//! This crate names the namespaces, element tags and attributes of the
//! worksheet format and classifies elements into the closed [`Kind`] set
//! that translators match on. It re-exports `mathsharp-core` so users only
//! need one import.

mod kind;

pub use kind::{BinaryOp, Classify, Kind};
pub use mathsharp_core::*;

/// Namespace URIs.
pub mod ns {
    /// Worksheet structure (regions, math containers, binary content).
    pub const WORKSHEET: &str = "http://schemas.mathsoft.com/worksheet30";
    /// Math content.
    pub const MATH: &str = "http://schemas.mathsoft.com/math30";
    /// Units.
    pub const UNITS: &str = "http://schemas.mathsoft.com/units10";
}

/// Worksheet-namespace element names.
pub mod worksheet {
    /// Container holding one math region's content.
    pub const MATH: &str = "math";
    /// Container of base64 attachments.
    pub const BINARY_CONTENT: &str = "binaryContent";
}

/// Math-namespace element names.
pub mod math {
    pub const DEFINE: &str = "define";
    pub const GLOBAL_DEFINE: &str = "globalDefine";
    pub const EVAL: &str = "eval";
    pub const APPLY: &str = "apply";
    pub const ID: &str = "id";
    pub const REAL: &str = "real";
    pub const IMAG: &str = "imag";
    pub const COMPLEX: &str = "complex";
    pub const PARENS: &str = "parens";
    pub const SEQUENCE: &str = "sequence";
    pub const RANGE: &str = "range";
    pub const MATRIX: &str = "matrix";
    pub const PROGRAM: &str = "program";
    pub const IF_THEN: &str = "ifThen";
    pub const FUNCTION: &str = "function";
    pub const BOUND_VARS: &str = "boundVars";
    pub const UNIT_OVERRIDE: &str = "unitOverride";
    pub const RESULT: &str = "result";
    pub const UNITED_VALUE: &str = "unitedValue";
    pub const FIND: &str = "Find";
    pub const VECTOR_SUM: &str = "vectorSum";

    // Operators
    pub const MULT: &str = "mult";
    pub const MINUS: &str = "minus";
    pub const DIV: &str = "div";
    pub const PLUS: &str = "plus";
    pub const LESS_THAN: &str = "lessThan";
    pub const GREATER_THAN: &str = "greaterThan";
    pub const GREATER_OR_EQUAL: &str = "greaterOrEqual";
    pub const LESS_OR_EQUAL: &str = "lessOrEqual";
    pub const EQUAL: &str = "equal";
    pub const NTH_ROOT: &str = "nthRoot";
    pub const POW: &str = "pow";
    pub const INDEXER: &str = "indexer";
    pub const SQRT: &str = "sqrt";
    pub const ABSVAL: &str = "absval";
    pub const NEG: &str = "neg";

    /// Every math tag the translator recognizes.
    pub const TAGS: &[&str] = &[
        DEFINE,
        GLOBAL_DEFINE,
        EVAL,
        APPLY,
        ID,
        REAL,
        IMAG,
        COMPLEX,
        PARENS,
        SEQUENCE,
        RANGE,
        MATRIX,
        PROGRAM,
        IF_THEN,
        FUNCTION,
        BOUND_VARS,
        UNIT_OVERRIDE,
        RESULT,
        UNITED_VALUE,
        FIND,
        VECTOR_SUM,
        MULT,
        MINUS,
        DIV,
        PLUS,
        LESS_THAN,
        GREATER_THAN,
        GREATER_OR_EQUAL,
        LESS_OR_EQUAL,
        EQUAL,
        NTH_ROOT,
        POW,
        INDEXER,
        SQRT,
        ABSVAL,
        NEG,
    ];
}

/// Units-namespace element names.
pub mod units {
    /// Product of unit powers attached to a numeric result.
    pub const UNIT_MONOMIAL: &str = "unitMonomial";
}

/// Attribute names.
pub mod attr {
    /// Subscript of an identifier (`x_1`).
    pub const SUBSCRIPT: &str = "subscript";
    /// Matrix row count.
    pub const ROWS: &str = "rows";
    /// Matrix column count.
    pub const COLS: &str = "cols";
    /// Id of an attachment in the binary section.
    pub const ITEM_ID: &str = "item-id";
    /// Present when an attachment payload is gzip-compressed.
    pub const CONTENT_ENCODING: &str = "content-encoding";
}
