// crates/dedent-core/src/scan.rs
//
// Indent Scanner: finds the longest run of space/tab bytes that is a
// byte-for-byte prefix of every non-blank line.
//
// - Blank lines are skipped, however they are indented.
// - A non-blank line with no indent ends the scan with no common indent.
// - Tabs and spaces never match each other.

use std::ops::Range;

use crate::block::{block_len, LineInfo};

/// Common indent of a text block, borrowed from the scanned text.
///
/// The view sits on the last non-blank line the scanner visited. Every
/// non-blank line carries the same bytes there, and anchoring on the last
/// one keeps the bytes intact while an in-place rewrite moves earlier lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommonIndent<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> CommonIndent<'a> {
    /// Byte offset of the indent inside the scanned text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: an empty common indent is reported as `None`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }
}

/// Common indent of `text`, up to the first NUL or the end of the slice.
pub fn common_indent(text: &[u8]) -> Option<CommonIndent<'_>> {
    scan(text, None)
}

/// Common indent of the first `len` bytes of `text` (stopping early at a NUL).
pub fn common_indent_bounded(text: &[u8], len: usize) -> Option<CommonIndent<'_>> {
    scan(text, Some(len))
}

fn scan(text: &[u8], limit: Option<usize>) -> Option<CommonIndent<'_>> {
    let block = &text[..block_len(text, limit)];
    indent_span(block).map(|span| CommonIndent {
        offset: span.start,
        bytes: &block[span],
    })
}

/// Location of the common indent inside an already bounded block.
pub(crate) fn indent_span(block: &[u8]) -> Option<Range<usize>> {
    // (start, len) of the running common indent
    let mut common: Option<(usize, usize)> = None;
    let mut pos = 0usize;

    while pos < block.len() {
        let line = LineInfo::measure(&block[pos..]);

        if line.is_blank() {
            if line.newlines == 0 {
                // whitespace tail with no line break: end of block
                break;
            }
            pos += line.len();
            continue;
        }

        if line.indent == 0 {
            return None;
        }

        let len = match common {
            None => line.indent,
            Some((start, len)) => {
                let max = len.min(line.indent);
                block[start..start + max]
                    .iter()
                    .zip(&block[pos..pos + max])
                    .take_while(|(a, b)| a == b)
                    .count()
            }
        };
        if len == 0 {
            return None;
        }

        common = Some((pos, len));
        pos += line.len();
    }

    common.map(|(start, len)| start..start + len)
}
