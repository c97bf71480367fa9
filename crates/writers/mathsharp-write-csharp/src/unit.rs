//! Line-oriented C# output with brace-tracked indentation.

/// Accumulates statements of a translation unit.
#[derive(Debug)]
pub struct CodeWriter {
    output: String,
    level: usize,
    width: usize,
}

impl CodeWriter {
    /// A writer indenting `width` spaces per level.
    pub fn new(width: usize) -> Self {
        Self {
            output: String::new(),
            level: 0,
            width,
        }
    }

    /// Write one line at the current indentation. Empty lines carry no
    /// trailing whitespace.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.output
                .extend(std::iter::repeat_n(' ', self.level * self.width));
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Write `{` and indent.
    pub fn open(&mut self) {
        self.line("{");
        self.level += 1;
    }

    /// Dedent and write `}`.
    pub fn close(&mut self) {
        self.close_with("");
    }

    /// Dedent and write `}` followed by `suffix`, e.g. `})();`.
    pub fn close_with(&mut self, suffix: &str) {
        self.level = self.level.saturating_sub(1);
        self.line(format!("}}{suffix}"));
    }

    /// Current nesting depth.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn finish(self) -> String {
        self.output
    }
}
