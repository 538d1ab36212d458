// crates/dedent-cli/src/cmd/strip.rs

use clap::Args;
use dedent_core::{
    common_indent_bounded, dedent_into_bounded, dedent_to_vec, dedent_vec_in_place,
    dedented_len_bounded, DedentError,
};

use crate::io::text_file;

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Input path ("-" for stdin)
    #[arg(long, default_value = text_file::STDIO)]
    pub r#in: String,

    /// Output path ("-" for stdout)
    #[arg(long, default_value = text_file::STDIO, conflicts_with = "in_place")]
    pub out: String,

    /// Rewrite the input file itself
    #[arg(long, conflicts_with_all = ["limit", "capacity"])]
    pub in_place: bool,

    /// Only dedent the first N bytes of the input; the rest is dropped
    #[arg(long)]
    pub limit: Option<usize>,

    /// Dedent into a fixed buffer of N bytes, cutting the output when it
    /// does not fit
    #[arg(long)]
    pub capacity: Option<usize>,

    /// With --capacity: fail instead of writing a cut output
    #[arg(long, requires = "capacity")]
    pub strict: bool,
}

pub fn run(args: StripArgs) -> anyhow::Result<()> {
    let mut text = text_file::read_input(&args.r#in)?;
    let in_bytes = text.len();
    let limit = args.limit.unwrap_or(in_bytes);

    let indent = common_indent_bounded(&text, limit).map_or(0, |ci| ci.len());
    let required = dedented_len_bounded(&text, limit);
    log::debug!(
        "strip: in={} in_bytes={} limit={} indent={} required={}",
        args.r#in,
        in_bytes,
        limit,
        indent,
        required
    );

    let mut truncated = false;
    let (path, out) = if args.in_place {
        if args.r#in == text_file::STDIO {
            anyhow::bail!("--in-place needs a file path, not stdin");
        }
        dedent_vec_in_place(&mut text);
        (args.r#in.as_str(), text)
    } else if let Some(capacity) = args.capacity {
        let mut buf = vec![0u8; capacity];
        let n = dedent_into_bounded(&text, limit, &mut buf);
        if n < required {
            if args.strict {
                return Err(DedentError::Truncated { required, capacity }.into());
            }
            log::warn!("output truncated: {required} bytes needed, capacity is {capacity}");
            truncated = true;
        }
        buf.truncate(n);
        (args.out.as_str(), buf)
    } else {
        let block = &text[..limit.min(in_bytes)];
        let mut buf = Vec::with_capacity(required);
        dedent_to_vec(block, &mut buf);
        (args.out.as_str(), buf)
    };

    text_file::write_output(path, &out)?;

    eprintln!(
        "strip ok: in_bytes={} out_bytes={} indent={} truncated={}",
        in_bytes,
        out.len(),
        indent,
        truncated
    );

    Ok(())
}
