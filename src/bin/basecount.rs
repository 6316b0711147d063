use std::process::ExitCode;

use clap::{ArgAction, Parser};
use ntcount::{
    base_counts::count_bases,
    cli::{init_logging, HELP_TEMPLATE},
    error::Result,
    sequence::resolve_dna_argument,
};

#[derive(Parser)]
#[command(
    version,
    about = "Count the A, C, G and T bases of a DNA sequence",
    help_template = HELP_TEMPLATE
)]
struct Cli {
    /// DNA sequence, or path to a file containing the sequence
    #[arg(value_name = "DNA")]
    dna: String,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let sequence = resolve_dna_argument(&cli.dna)?;
    println!("{}", count_bases(&sequence));

    Ok(())
}
