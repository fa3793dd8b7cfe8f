//! `unbrace` — convert C/C++-like source between brace syntax and an
//! indentation-based syntax.
//!
//! The binary is a thin I/O shell: it parses CLI arguments with `clap`,
//! reads a file or standard input, runs the pure conversion from the
//! library, and writes a file or standard output. All errors are printed
//! to stderr and cause exit code 1.

mod cli;

use std::error::Error;
use std::fs;
use std::io::{self, Write};

use clap::Parser;
use unbrace::{Direction, transcode};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Read the input, convert, and write the output.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let direction = if cli.braced {
        Direction::ToBrace
    } else if cli.indented {
        Direction::ToIndent
    } else {
        Direction::Auto
    };

    let converted = transcode(&source, direction);

    match &cli.output {
        Some(path) => fs::write(path, converted)?,
        None => io::stdout().write_all(converted.as_bytes())?,
    }
    Ok(())
}
