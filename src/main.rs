use anyhow::Result;
use bell_icon::bell_gen::{self, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "bell-icon",
    version,
    about = "Generate the bell launcher icon as a 512x512 PNG"
)]
struct Args {
    /// Output file. Its parent directory must already exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    bell_gen::generate_bell_icon(bell_gen::Args {
        output: args.output,
    })
}
