use std::ops::Range;

use serde::Serialize;

/// A byte-offset span into source text: inclusive start, exclusive end.
///
/// The Reed compiler tracks every source position as byte offsets into the
/// original source string. Line and column numbers are only materialized
/// when a diagnostic is rendered, via [`LineIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a `Range<usize>` for libraries that index source text
    /// directly (ariadne labels, string slicing).
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Pre-computed line-start table for converting byte offsets to 1-based
/// (line, column) pairs.
///
/// Built once per source file by scanning for newlines; lookups are a
/// binary search over the recorded line starts.
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offset where each line begins. The first entry is always 0.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Scan `source` and record the start offset of every line.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based (line, column) pair. Column is
    /// measured in bytes from the start of the line.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        // partition_point yields the first line start past the offset; the
        // containing line is the one before it.
        let idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line = (idx as u32) + 1;
        let col = offset - self.line_starts[idx] + 1;
        (line, col)
    }

    /// Number of lines in the indexed source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
