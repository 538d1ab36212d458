// crates/dedent-core/src/block.rs
//
// Byte-level view of a text block.
//
// Rules:
// - Indentation is SPACE (0x20) and TAB (0x09), nothing else.
// - Line breaks are CR (0x0D) and LF (0x0A). A run of them is one delimiter
//   and is passed through untouched.
// - A block ends at its length bound, at the end of the slice, or at the
//   first NUL (0x00), whichever comes first.

pub const NUL: u8 = 0x00;

#[inline]
pub fn is_indent_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[inline]
pub fn is_newline_byte(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

/// Effective length of a text block: `limit` (if any), clamped to the slice,
/// then cut at the first NUL.
pub fn block_len(text: &[u8], limit: Option<usize>) -> usize {
    let bounded = match limit {
        Some(n) => &text[..n.min(text.len())],
        None => text,
    };
    bounded
        .iter()
        .position(|&b| b == NUL)
        .unwrap_or(bounded.len())
}

/// Number of leading space/tab bytes in `line`.
pub fn indent_size(line: &[u8]) -> usize {
    line.iter().take_while(|&&b| is_indent_byte(b)).count()
}

/// Shape of the line starting at the front of a byte slice.
///
/// `content` starts after the indent run and stops at the first line break,
/// so it keeps interior and trailing whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineInfo {
    pub indent: usize,
    pub content: usize,
    pub newlines: usize,
}

impl LineInfo {
    pub fn measure(line: &[u8]) -> Self {
        let indent = indent_size(line);
        let content = line[indent..]
            .iter()
            .take_while(|&&b| !is_newline_byte(b))
            .count();
        let newlines = line[indent + content..]
            .iter()
            .take_while(|&&b| is_newline_byte(b))
            .count();
        Self {
            indent,
            content,
            newlines,
        }
    }

    /// Bytes up to the start of the next line.
    #[inline]
    pub fn len(&self) -> usize {
        self.indent + self.content + self.newlines
    }

    /// Whitespace (or nothing) before the line break or the end of the block.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.content == 0
    }
}
