use std::{fs, path::Path};

use crate::{
    base::Base,
    error::{Error, Result},
};

/// Reads a whole sequence file in one blocking go, trimming trailing
/// whitespace.
pub fn read_sequence_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadSequenceFile {
        path: path.to_owned(),
        source,
    })?;
    Ok(contents.trim_end().to_owned())
}

/// Resolves the DNA argument of basecount. The filesystem takes precedence:
/// an argument naming an existing file is read from disk, anything else is
/// used as the sequence itself.
pub fn resolve_dna_argument(argument: &str) -> Result<String> {
    let path = Path::new(argument);
    if path.is_file() {
        log::debug!("argument {argument:?} names an existing file, reading the sequence from it");
        read_sequence_file(path)
    } else {
        log::debug!("argument does not name a file, using it as the sequence");
        Ok(argument.to_owned())
    }
}

/// A DNA sequence normalised for tetranucleotide counting: uppercased, with
/// whitespace skipped and everything outside ACGT dropped.
pub struct Sequence {
    bases: Vec<Base>,
}

impl Sequence {
    /// Cleans raw input. Dropped non-ACGT characters are reported through a
    /// single warning instead of failing the run.
    pub fn clean(raw: &str) -> Self {
        let mut bases = Vec::with_capacity(raw.len());
        let mut removed = 0usize;

        for character in raw.chars() {
            if character.is_whitespace() {
                continue;
            }
            match Base::from_char(character) {
                Some(base) => bases.push(base),
                None => removed += 1,
            }
        }

        if removed > 0 {
            log::warn!("removed {removed} non-ACGT characters from the input sequence");
        }

        Sequence { bases }
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}
