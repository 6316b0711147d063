// Variant order is alphabetical; `Tetramer` ordering relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Decodes a character case-insensitively; anything outside ACGT is `None`.
    pub fn from_char(character: char) -> Option<Self> {
        match character.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'T' => Some(Base::T),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}
