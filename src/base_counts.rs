use std::fmt;

use crate::base::Base;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    fn tally(&mut self, base: Base) {
        match base {
            Base::A => self.a += 1,
            Base::C => self.c += 1,
            Base::G => self.g += 1,
            Base::T => self.t += 1,
        }
    }
}

impl fmt::Display for BaseCounts {
    // The fixed "A C G T" output order of the basecount binary.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {} {} {}", self.a, self.c, self.g, self.t)
    }
}

/// Counts the A, C, G and T characters of `sequence` case-insensitively.
/// Characters outside the alphabet are counted in no bin.
pub fn count_bases(sequence: &str) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for character in sequence.chars() {
        if let Some(base) = Base::from_char(character) {
            counts.tally(base);
        }
    }
    counts
}
