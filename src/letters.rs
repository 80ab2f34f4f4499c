use std::sync::Arc;

use rand::Rng;

pub type DynLetterSource = Arc<dyn LetterSource + Send + Sync>;

/// Produces the replacement letters used when a boundary character
/// has to be substituted.
pub trait LetterSource: Send + Sync {
    /// Must return a character in `a..=z`.
    fn letter(&self) -> char;
}

/// Uniform draw over `a..=z` from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomLetters;

impl RandomLetters {
    pub fn new() -> Self {
        RandomLetters
    }
}

impl LetterSource for RandomLetters {
    fn letter(&self) -> char {
        char::from(rand::rng().random_range(b'a'..=b'z'))
    }
}

/// Always returns the same letter.
#[derive(Debug, Clone, Copy)]
pub struct FixedLetter(char);

impl FixedLetter {
    /// `None` unless `c` is in `a..=z`.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then_some(FixedLetter(c))
    }
}

impl LetterSource for FixedLetter {
    fn letter(&self) -> char {
        self.0
    }
}
