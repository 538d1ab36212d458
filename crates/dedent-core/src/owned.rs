// crates/dedent-core/src/owned.rs
//
// Owned-value wrappers over the rewriter. They follow the same block rule as
// the core: a NUL ends the text, anything after it is dropped.

use std::io::Write;

use crate::error::Result;
use crate::rewrite::{dedent_in_place, dedent_into, dedented_len};

/// Dedents a copy of `text`.
///
/// ```
/// assert_eq!(dedent_core::dedent("  a\n    b\n"), "a\n  b\n");
/// ```
pub fn dedent(text: &str) -> String {
    let mut out = text.to_owned();
    dedent_string_in_place(&mut out);
    out
}

pub fn dedent_bytes(text: &[u8]) -> Vec<u8> {
    let mut out = text.to_vec();
    dedent_vec_in_place(&mut out);
    out
}

/// Dedents `text` over itself and truncates it to the result.
pub fn dedent_vec_in_place(text: &mut Vec<u8>) {
    let len = dedent_in_place(text);
    text.truncate(len);
}

pub fn dedent_string_in_place(text: &mut String) {
    let mut bytes = std::mem::take(text).into_bytes();
    dedent_vec_in_place(&mut bytes);
    // Only ASCII bytes are removed and the cut lands on a NUL or the end,
    // so the bytes are still UTF-8.
    *text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
}

/// Appends the dedented `text` to `out`, growing it as needed. Returns the
/// number of bytes appended.
pub fn dedent_to_vec(text: &[u8], out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.resize(start + dedented_len(text), 0);
    dedent_into(text, &mut out[start..])
}

pub fn dedent_to_writer<W: Write>(text: &[u8], mut writer: W) -> Result<usize> {
    let mut buf = Vec::with_capacity(text.len());
    let n = dedent_to_vec(text, &mut buf);
    writer.write_all(&buf)?;
    Ok(n)
}

/// Method form of [`dedent`] / [`dedent_bytes`], for literals:
///
/// ```
/// use dedent_core::Dedent;
///
/// let sql = "
///     SELECT *
///       FROM t
/// ".dedent();
/// assert_eq!(sql, "\nSELECT *\n  FROM t\n");
/// ```
pub trait Dedent {
    type Output;

    fn dedent(&self) -> Self::Output;
}

impl Dedent for str {
    type Output = String;

    fn dedent(&self) -> Self::Output {
        dedent(self)
    }
}

impl Dedent for String {
    type Output = String;

    fn dedent(&self) -> Self::Output {
        dedent(self)
    }
}

impl Dedent for [u8] {
    type Output = Vec<u8>;

    fn dedent(&self) -> Self::Output {
        dedent_bytes(self)
    }
}

impl Dedent for Vec<u8> {
    type Output = Vec<u8>;

    fn dedent(&self) -> Self::Output {
        dedent_bytes(self)
    }
}

impl<T: ?Sized + Dedent> Dedent for &T {
    type Output = T::Output;

    fn dedent(&self) -> Self::Output {
        (**self).dedent()
    }
}
