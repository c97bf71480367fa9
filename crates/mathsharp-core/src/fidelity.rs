//! Fidelity tracking - know what was skipped or simplified in translation.

/// Result of a conversion operation, including fidelity warnings.
#[derive(Debug)]
pub struct ConversionResult<T> {
    /// The conversion output.
    pub value: T,
    /// Warnings about information that was lost or not handled.
    pub warnings: Vec<FidelityWarning>,
}

impl<T> ConversionResult<T> {
    /// Create a successful result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<FidelityWarning>) -> Self {
        Self { value, warnings }
    }

    /// Add a warning.
    pub fn warn(mut self, warning: FidelityWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if there are any major or error-level warnings.
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w.severity, Severity::Major | Severity::Error))
    }

    /// Local names of node kinds the translator recorded as not implemented.
    pub fn unimplemented_kinds(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|w| match &w.kind {
            WarningKind::UnimplementedNode(kind) => Some(kind.as_str()),
            _ => None,
        })
    }
}

/// A warning about fidelity loss during conversion.
#[derive(Debug, Clone)]
pub struct FidelityWarning {
    /// How severe is this warning?
    pub severity: Severity,
    /// What kind of issue?
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
}

impl FidelityWarning {
    /// Create a new warning.
    pub fn new(severity: Severity, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
        }
    }
}

/// Severity of a fidelity warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Information only, no data lost.
    Info,
    /// Part of the source was not translated.
    Minor,
    /// Significant information lost.
    Major,
    /// Conversion may be incorrect.
    Error,
}

/// Kind of fidelity issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Math node kind the tree walker does not translate.
    UnimplementedNode(String),
    /// Unit override reduced to a comment; dimensions are not carried.
    UnitDiscarded(String),
    /// Element prefix that no namespace declaration binds.
    UnboundPrefix(String),
    /// Entity reference the reader could not resolve.
    UnknownEntity(String),
}
