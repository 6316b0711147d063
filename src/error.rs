use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read sequence file {path:?}: {source}")]
    ReadSequenceFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
