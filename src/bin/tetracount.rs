use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use ntcount::{
    cli::{init_logging, HELP_TEMPLATE},
    error::Result,
    sequence::{read_sequence_file, Sequence},
    tetramer::TetramerCounts,
};

#[derive(Parser)]
#[command(
    version,
    about = "Count the tetranucleotide frequencies of a DNA sequence file",
    help_template = HELP_TEMPLATE
)]
struct Cli {
    /// Path to a file containing the DNA sequence
    #[arg(value_name = "FILE")]
    file: PathBuf,

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

    let raw = read_sequence_file(&cli.file)?;
    let sequence = Sequence::clean(&raw);
    log::debug!("cleaned sequence holds {} bases", sequence.len());

    for (tetramer, count) in TetramerCounts::from_sequence(&sequence).iter() {
        println!("{tetramer}: {count}");
    }

    Ok(())
}
