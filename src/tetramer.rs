use std::{collections::BTreeMap, fmt};

use crate::{base::Base, sequence::Sequence};

pub const TETRAMER_LENGTH: usize = 4;

// Lexicographic order over `Base` equals ascending alphabetical order of the
// rendered four-character string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tetramer([Base; TETRAMER_LENGTH]);

impl fmt::Display for Tetramer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.0 {
            write!(formatter, "{}", base.to_char())?;
        }
        Ok(())
    }
}

pub struct TetramerCounts {
    counts: BTreeMap<Tetramer, usize>,
}

impl TetramerCounts {
    /// Slides a width-4 window one position at a time across the sequence
    /// and tallies every window. Sequences shorter than four bases produce
    /// an empty mapping.
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let mut counts = BTreeMap::new();

        for window in sequence.bases().windows(TETRAMER_LENGTH) {
            // windows() yields exactly TETRAMER_LENGTH bases.
            let tetramer = Tetramer(window.try_into().unwrap());
            *counts.entry(tetramer).or_insert(0) += 1;
        }

        TetramerCounts { counts }
    }

    /// Ascending alphabetical iteration; the printing order of tetracount.
    pub fn iter(&self) -> impl Iterator<Item = (Tetramer, usize)> + '_ {
        self.counts
            .iter()
            .map(|(&tetramer, &count)| (tetramer, count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of windows counted, i.e. length − 3 for sequences of at
    /// least four bases.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;

    use super::TetramerCounts;

    fn rendered(counts: &TetramerCounts) -> Vec<String> {
        counts
            .iter()
            .map(|(tetramer, count)| format!("{tetramer}: {count}"))
            .collect()
    }

    #[test]
    fn overlapping_windows_are_all_counted() {
        let counts = TetramerCounts::from_sequence(&Sequence::clean("ACGTACGT"));
        assert_eq!(
            rendered(&counts),
            ["ACGT: 2", "CGTA: 1", "GTAC: 1", "TACG: 1"]
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn six_windows_of_a_nine_base_sequence() {
        let counts = TetramerCounts::from_sequence(&Sequence::clean("AAAAAAATA"));
        assert_eq!(counts.total(), 6);
        assert_eq!(rendered(&counts), ["AAAA: 4", "AAAT: 1", "AATA: 1"]);
        assert_eq!(rendered(&counts)[0], "AAAA: 4");
    }

    #[test]
    fn sequences_shorter_than_a_window_count_nothing() {
        for raw in ["", "A", "AC", "ACG"] {
            let counts = TetramerCounts::from_sequence(&Sequence::clean(raw));
            assert!(counts.is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn a_single_window_counts_once() {
        let counts = TetramerCounts::from_sequence(&Sequence::clean("ACGT"));
        assert_eq!(counts.len(), 1);
        assert_eq!(rendered(&counts), ["ACGT: 1"]);
    }

    #[test]
    fn iteration_is_sorted_regardless_of_insertion_order() {
        let counts = TetramerCounts::from_sequence(&Sequence::clean("TTTTAAAA"));
        assert_eq!(
            rendered(&counts),
            ["AAAA: 1", "TAAA: 1", "TTAA: 1", "TTTA: 1", "TTTT: 1"]
        );
    }

    mod proptests {
        use proptest::prelude::*;

        use crate::sequence::Sequence;

        use super::TetramerCounts;

        proptest! {
            #[test]
            fn window_counts_sum_to_length_minus_three(sequence in "[ACGT]{0,300}") {
                let counts = TetramerCounts::from_sequence(&Sequence::clean(&sequence));
                prop_assert_eq!(counts.total(), sequence.len().saturating_sub(3));
            }

            #[test]
            fn every_count_is_positive(sequence in "[ACGT]{0,300}") {
                let counts = TetramerCounts::from_sequence(&Sequence::clean(&sequence));
                for (tetramer, count) in counts.iter() {
                    prop_assert!(count >= 1, "{}", tetramer);
                }
            }

            #[test]
            fn keys_are_strictly_ascending(sequence in "[ACGT]{0,300}") {
                let counts = TetramerCounts::from_sequence(&Sequence::clean(&sequence));
                let keys: Vec<String> =
                    counts.iter().map(|(tetramer, _)| tetramer.to_string()).collect();
                let mut sorted = keys.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(keys, sorted);
            }
        }
    }
}
