use std::{fs, path::PathBuf};

use clap::Parser;
use lip::get_result;

/// Runs a lip script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script; it must end in `.lip`.
    file: PathBuf,

    /// Prints the tokens, the parsed statements and the final variables.
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if args.file.extension().is_none_or(|ext| ext != "lip") {
        eprintln!("Error: '{}' is not a .lip file.", args.file.display());
        std::process::exit(1);
    }

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.file.display());
                                                   std::process::exit(1);
                                               });

    if let Err(e) = get_result(&script, args.debug) {
        eprintln!("{e}");
        if args.debug {
            eprintln!("{e:?}");
        }
        std::process::exit(1);
    }
}
