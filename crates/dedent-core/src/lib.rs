//! Removes the leading whitespace shared by every non-blank line of a text
//! block, the way `textwrap.dedent` does.
//!
//! Only ASCII space and tab count as indentation, and they are compared
//! byte-for-byte: `"  a"` and `"\ta"` share no indent. Blank lines never
//! constrain the common indent and come out carrying only their newline
//! bytes.
//!
//! A text block ends at its explicit length bound, at the end of the slice,
//! or at the first zero byte, whichever comes first.

pub mod error;

pub mod block;
pub mod owned;
pub mod rewrite;
pub mod scan;

pub use crate::block::indent_size;
pub use crate::error::{DedentError, Result};
pub use crate::owned::{
    dedent, dedent_bytes, dedent_string_in_place, dedent_to_vec, dedent_to_writer,
    dedent_vec_in_place, Dedent,
};
pub use crate::rewrite::{
    dedent_in_place, dedent_in_place_bounded, dedent_into, dedent_into_bounded, dedented_len,
    dedented_len_bounded, try_dedent_into,
};
pub use crate::scan::{common_indent, common_indent_bounded, CommonIndent};
