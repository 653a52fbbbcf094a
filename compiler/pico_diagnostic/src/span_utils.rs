//! Line and column lookup for byte offsets.

/// Byte offsets of every line start, for O(log L) line lookup.
///
/// ```
/// use pico_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "def main() {\n  output 1;\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 15), (2, 3));
/// assert_eq!(table.line_text(source, 2), "  output 1;");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte where line `i + 1` starts.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> usize {
        let offset = offset as usize;
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert.max(1),
        }
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    ///
    /// Offsets past the end of `source` clamp to the end.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let start = self.line_start(line);
        let end = (offset as usize).min(source.len()).max(start);
        let col = source
            .get(start..end)
            .map_or(end - start, |prefix| prefix.chars().count());
        (line, col + 1)
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: usize) -> usize {
        self.offsets
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(0)
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        if line == 0 || line > self.line_count() {
            return "";
        }
        let start = self.line_start(line).min(source.len());
        let end = self
            .offsets
            .get(line)
            .map_or(source.len(), |next| next.saturating_sub(1));
        source
            .get(start..end.max(start))
            .unwrap_or("")
            .trim_end_matches('\r')
    }
}
