//! Character classes and the combined selection pool.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
/// ASCII punctuation, fixed so class membership never depends on locale.
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four categories every password must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Every class, in seed order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// The ASCII bytes belonging to this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Class of `c`, or `None` if it is outside the pool.
    pub fn of(c: u8) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.chars().contains(&c))
    }

    /// Lowercase display name, as shown in help output.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }
}

/// Build the full pool: every class concatenated.
pub fn pool() -> Vec<u8> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.chars())
        .copied()
        .collect()
}

/// Number of distinct characters in the pool.
pub fn size() -> usize {
    CharClass::ALL.iter().map(|class| class.chars().len()).sum()
}
