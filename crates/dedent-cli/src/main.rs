// crates/dedent-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "dedent")]
#[command(about = "Remove common leading whitespace from every line of a text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dedent a file (or stdin) and write the result
    Strip(cmd::strip::StripArgs),

    /// Report the common indent of a file (or stdin) without changing it
    Indent(cmd::indent::IndentArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Strip(args) => cmd::strip::run(args),
        Commands::Indent(args) => cmd::indent::run(args),
    }
}
