// crates/dedent-core/src/rewrite.rs
//
// Dedent Rewriter.
//
// One loop serves every call shape. What changes between them is where the
// bytes go (`Target`) and whether the block carries an explicit bound.
//
// Per line:
// - non-blank line: skip the common indent when the line starts with it,
//   then copy the rest of the line and its line breaks
// - blank line: copy only its line breaks, whatever its indent
// Output never grows past the input, so the in-place copy always moves bytes
// towards the front of the buffer.
//
// Return value: bytes actually written, NUL excluded. A NUL follows the
// output only when capacity is left over. A result equal to the capacity may
// mean truncation; `dedented_len` gives the exact size needed.

use std::ops::Range;

use crate::block::{block_len, LineInfo, NUL};
use crate::error::{DedentError, Result};
use crate::scan::indent_span;

trait Target {
    fn source(&self) -> &[u8];

    fn capacity(&self) -> usize;

    /// Copy source bytes `from` to output offset `to`.
    fn copy(&mut self, from: Range<usize>, to: usize);

    fn terminate(&mut self, at: usize);
}

struct Disjoint<'s, 'd> {
    src: &'s [u8],
    dst: &'d mut [u8],
}

impl Target for Disjoint<'_, '_> {
    fn source(&self) -> &[u8] {
        self.src
    }

    fn capacity(&self) -> usize {
        self.dst.len()
    }

    fn copy(&mut self, from: Range<usize>, to: usize) {
        let len = from.len();
        self.dst[to..to + len].copy_from_slice(&self.src[from]);
    }

    fn terminate(&mut self, at: usize) {
        self.dst[at] = NUL;
    }
}

struct InPlace<'b> {
    buf: &'b mut [u8],
    capacity: usize,
}

impl Target for InPlace<'_> {
    fn source(&self) -> &[u8] {
        self.buf
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn copy(&mut self, from: Range<usize>, to: usize) {
        // to <= from.start always holds here
        if from.start != to {
            self.buf.copy_within(from, to);
        }
    }

    fn terminate(&mut self, at: usize) {
        self.buf[at] = NUL;
    }
}

/// Counts output bytes without writing any.
struct Measure<'s> {
    src: &'s [u8],
}

impl Target for Measure<'_> {
    fn source(&self) -> &[u8] {
        self.src
    }

    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn copy(&mut self, _from: Range<usize>, _to: usize) {}

    fn terminate(&mut self, _at: usize) {}
}

fn rewrite<T: Target>(target: &mut T, limit: Option<usize>) -> usize {
    let capacity = target.capacity();
    if capacity == 0 {
        return 0;
    }

    let (end, span) = {
        let src = target.source();
        let end = block_len(src, limit);
        (end, indent_span(&src[..end]))
    };

    let mut pos = 0usize;
    let mut out = 0usize;

    while pos < end && out < capacity {
        let (from, next) = {
            let block = &target.source()[..end];

            let line = LineInfo::measure(&block[pos..]);
            let from = if !line.is_blank() {
                // Only non-blank lines are compared. They all sit at or before
                // the span's line, so in-place writes have not reached it yet.
                let mut start = pos;
                if let Some(span) = &span {
                    if block[pos..].starts_with(&block[span.clone()]) {
                        start += span.len();
                    }
                }
                start..pos + line.len()
            } else if line.newlines > 0 {
                let breaks = pos + line.indent;
                breaks..breaks + line.newlines
            } else {
                break;
            };
            (from, pos + line.len())
        };

        let len = from.len().min(capacity - out);
        target.copy(from.start..from.start + len, out);
        out += len;
        pos = next;
    }

    if out < capacity {
        target.terminate(out);
    }
    out
}

/// Dedents `text` into `dst`.
///
/// `text` ends at its first NUL or at the end of the slice. Returns the number
/// of bytes written to `dst`, not counting the NUL that follows them when
/// `dst` has room left. When the result does not fit, `dst` is filled up to
/// its length, no NUL is written and `dst.len()` is returned.
pub fn dedent_into(text: &[u8], dst: &mut [u8]) -> usize {
    rewrite(&mut Disjoint { src: text, dst }, None)
}

/// Same as [`dedent_into`], reading at most `len` bytes of `text`.
pub fn dedent_into_bounded(text: &[u8], len: usize, dst: &mut [u8]) -> usize {
    rewrite(&mut Disjoint { src: text, dst }, Some(len))
}

/// Dedents `buf` over itself and returns the new length of the text.
///
/// The text ends at the first NUL or the end of `buf`; a NUL is written after
/// the result when it ends before that. Bytes past the result are left over
/// from the original text.
pub fn dedent_in_place(buf: &mut [u8]) -> usize {
    let capacity = buf.len();
    rewrite(&mut InPlace { buf, capacity }, None)
}

/// Same as [`dedent_in_place`], touching only the first `len` bytes of `buf`.
pub fn dedent_in_place_bounded(buf: &mut [u8], len: usize) -> usize {
    let capacity = len.min(buf.len());
    rewrite(&mut InPlace { buf, capacity }, Some(len))
}

/// Exact number of bytes the dedented `text` takes, NUL excluded.
pub fn dedented_len(text: &[u8]) -> usize {
    rewrite(&mut Measure { src: text }, None)
}

/// Same as [`dedented_len`], reading at most `len` bytes of `text`.
pub fn dedented_len_bounded(text: &[u8], len: usize) -> usize {
    rewrite(&mut Measure { src: text }, Some(len))
}

/// Like [`dedent_into`], but refuses to write a truncated result.
///
/// Fails with [`DedentError::Truncated`] and leaves `dst` untouched when the
/// dedented text is longer than `dst`.
pub fn try_dedent_into(text: &[u8], dst: &mut [u8]) -> Result<usize> {
    let required = dedented_len(text);
    if required > dst.len() {
        return Err(DedentError::Truncated {
            required,
            capacity: dst.len(),
        });
    }
    Ok(dedent_into(text, dst))
}
