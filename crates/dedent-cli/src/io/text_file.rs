// crates/dedent-cli/src/io/text_file.rs
//
// "-" means stdin / stdout.

use std::io::{Read, Write};

use anyhow::{Context, Result};

pub const STDIO: &str = "-";

pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == STDIO {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("read input {path}"))
}

pub fn write_output(path: &str, bytes: &[u8]) -> Result<()> {
    if path == STDIO {
        let mut out = std::io::stdout().lock();
        out.write_all(bytes).context("write stdout")?;
        out.flush().context("flush stdout")?;
        return Ok(());
    }
    std::fs::write(path, bytes).with_context(|| format!("write output {path}"))
}
