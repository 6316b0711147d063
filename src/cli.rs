use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::error::Result;

/// Help layout shared by both binaries; the usage line comes first so that
/// `-h`/`--help` output starts with `Usage:`.
pub const HELP_TEMPLATE: &str =
    "{usage-heading} {usage}\n\n{about-with-newline}\n{all-args}{after-help}";

/// Initialises terminal logging on stderr. Verbosity is the number of `-v`
/// flags: warnings only by default, then info, debug and trace.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}
