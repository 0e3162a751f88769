//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::InputError;
use crate::domain::value_objects::{Alphabet, Word};

/// Source of the ordered word list
pub trait WordSource {
    /// Read every word, validated against `alphabet`.
    fn read_words(&mut self, alphabet: &Alphabet) -> Result<Vec<Word>, InputError>;
}
