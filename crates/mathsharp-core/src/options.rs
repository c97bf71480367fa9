//! Options for emitting.

use std::path::Path;

/// Namespace the generated classes are placed in unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "Mathcad2Cs";

/// Options for emitting.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Namespace wrapping the generated class.
    pub namespace: String,
    /// Name of the generated class.
    pub class_name: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            class_name: "Worksheet".to_string(),
            indent: 4,
        }
    }
}

impl EmitOptions {
    /// Options for a document at `path`; the class is named after the file stem.
    pub fn for_document(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        Self {
            class_name: class_name(&stem),
            ..Self::default()
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Turn a document base name into a valid class identifier.
pub fn class_name(stem: &str) -> String {
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name.push_str("Worksheet");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
