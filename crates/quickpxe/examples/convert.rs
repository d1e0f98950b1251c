use std::path::PathBuf;

use clap::Parser;
use quickpxe::workflow::{translate, Override};

#[derive(Parser)]
struct Opts {
    file: PathBuf,

    #[clap(long = "set", value_parser = Override::parse)]
    overrides: Vec<Override>,
}

fn main() {
    let opts = Opts::parse();

    let content = std::fs::read_to_string(&opts.file).unwrap();
    let filename = opts.file.file_name().unwrap().to_string_lossy();
    let translation = translate(&filename, &content, None, &opts.overrides).unwrap();

    eprintln!("{} ({} skipped)", translation.dialect, translation.skipped_lines);
    print!("{}", translation.document);
}
