// crates/dedent-cli/src/cmd/mod.rs

pub mod indent;
pub mod strip;
