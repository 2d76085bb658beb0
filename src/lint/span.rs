//! Source location spans.
//!
//! Diagnostics carry a [`Span`] in one-based line/column coordinates, resolved
//! from parser spans through the file's [`SourceMap`].

use std::path::PathBuf;

use swc_common::SourceMap;

/// A source location span representing a range in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Starting column (1-indexed).
    pub start_col: usize,
    /// Ending line (1-indexed).
    pub end_line: usize,
    /// Ending column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span covering a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            start_line: line,
            start_col: 1,
            end_line: line,
            end_col: usize::MAX,
        }
    }

    /// Create a span with precise positions.
    pub fn new(
        file: impl Into<PathBuf>,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Resolve a parser span. Columns count characters, so a diagnostic on
    /// a line holding multi-byte text still points at the right glyph.
    pub fn from_source(file: impl Into<PathBuf>, source_map: &SourceMap, span: swc_common::Span) -> Self {
        let start = source_map.lookup_char_pos(span.lo);
        let end = source_map.lookup_char_pos(span.hi);
        Self::new(file, start.line, start.col.0 + 1, end.line, end.col.0 + 1)
    }
}
