// crates/dedent-cli/src/cmd/indent.rs

use clap::Args;
use dedent_core::{common_indent, common_indent_bounded};

use crate::io::text_file;

#[derive(Args, Debug)]
pub struct IndentArgs {
    /// Input path ("-" for stdin)
    #[arg(long, default_value = text_file::STDIO)]
    pub r#in: String,

    /// Only look at the first N bytes of the input
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: IndentArgs) -> anyhow::Result<()> {
    let text = text_file::read_input(&args.r#in)?;
    log::debug!("indent: read {} bytes from {}", text.len(), args.r#in);

    let found = match args.limit {
        Some(n) => common_indent_bounded(&text, n),
        None => common_indent(&text),
    };

    match found {
        Some(ci) => println!(
            "len={} offset={} bytes=\"{}\"",
            ci.len(),
            ci.offset(),
            ci.as_bytes().escape_ascii()
        ),
        None => println!("none"),
    }

    Ok(())
}
