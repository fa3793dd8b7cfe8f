/// CLI argument definitions for the `unbrace` command, using the `clap`
/// derive macros.
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "unbrace",
    version,
    about = "Convert C/C++ source between brace syntax and indent syntax",
    long_about = "\
Convert C/C++ source between the traditional brace syntax and an
indentation-based syntax.

Without -c or -p the input form is detected (by counting statement
terminators) and the opposite form is emitted.

Examples:
  unbrace -i input.c -o output.ic
  unbrace -i input.ic -o output.c -c
  cat input.c | unbrace"
)]
pub struct Cli {
    /// Read input from this file instead of standard input
    #[arg(short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write output to this file instead of standard output
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Force conversion to brace (C/C++) syntax
    #[arg(short = 'c', conflicts_with = "indented")]
    pub braced: bool,

    /// Force conversion to indent syntax
    #[arg(short = 'p')]
    pub indented: bool,
}
