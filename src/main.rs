use std::{fs, io, path::PathBuf};

use calc_interp::{Options, run_program};
use clap::Parser;

/// calc_interp runs a program of READ, WRITE and assignment statements,
/// executing each statement as soon as it is read.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat reading a variable that was never assigned as an error instead
    /// of reading it as 0.
    #[arg(short, long)]
    strict: bool,

    /// The program to run. Values for READ statements come from stdin.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Error: Cannot open input file {}", args.file.display());
                     std::process::exit(1);
                 });

    let options = Options { strict_variables: args.strict };

    if let Err(e) = run_program(&source, io::stdin().lock(), io::stdout().lock(), options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
