//! Source text, its display name, and byte offset → line/column mapping.

use rowan::{TextRange, TextSize};

/// Source text plus an optional identifying name used only in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text: String,
    name: Option<String>,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for diagnostics; `<input>` when none was given.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<input>")
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::new(text)
    }
}

/// 1-based line and column. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A byte range together with its line/column endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub start_pos: LineCol,
    pub end_pos: LineCol,
}

impl Span {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start.into(), self.end.into())
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_pos, self.end_pos)
    }
}

/// Start offsets of every line, for O(log n) lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(TextSize::from(0))
            .chain(
                text.match_indices('\n')
                    .map(|(offset, _)| TextSize::from(offset as u32 + 1)),
            )
            .collect();
        Self {
            line_starts,
            len: TextSize::from(text.len() as u32),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32 + 1,
            col: u32::from(col) + 1,
        }
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span {
            start: range.start().into(),
            end: range.end().into(),
            start_pos: self.line_col(range.start()),
            end_pos: self.line_col(range.end()),
        }
    }
}
