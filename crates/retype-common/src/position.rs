//! Offset to line/character conversion.
//!
//! Syntax nodes carry byte offsets into the UTF-8 source text, while insertion
//! instructions are reported as zero-based `(line, character)` pairs. The
//! character column is counted in UTF-16 code units so the coordinates line up
//! with what TypeScript tooling (and LSP clients) expect.

/// A position in a source file (0-indexed line and character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column in UTF-16 code units
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based for humans, like compiler diagnostics.
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Index of line starts for one source text.
///
/// Recognises the same line terminators as the TypeScript scanner:
/// `\n`, `\r\n`, a lone `\r`, U+2028 and U+2029.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset where each line begins; `line_starts[0]` is always 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        let bytes = source.as_bytes();

        for (i, ch) in source.char_indices() {
            match ch {
                '\n' => line_starts.push((i + 1) as u32),
                '\r' => {
                    // `\r\n` is one break; the `\n` arm records it.
                    if bytes.get(i + 1) != Some(&b'\n') {
                        line_starts.push((i + 1) as u32);
                    }
                }
                '\u{2028}' | '\u{2029}' => line_starts.push((i + ch.len_utf8()) as u32),
                _ => {}
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a `Position`.
    ///
    /// Offsets past the end of the text clamp to the end. An offset that falls
    /// inside a multi-byte character counts up to the preceding boundary.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0) as usize;
        let mut end = (offset as usize).min(source.len());
        while end > line_start && !source.is_char_boundary(end) {
            end -= 1;
        }
        let start = line_start.min(end);
        let character = source
            .get(start..end)
            .unwrap_or("")
            .chars()
            .map(|ch| ch.len_utf16() as u32)
            .sum();

        Position {
            line: line as u32,
            character,
        }
    }

    /// Number of lines (a trailing break opens an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` begins.
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }
}
