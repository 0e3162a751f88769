//! Line Word Source Adapter
//!
//! Implements `WordSource` over any buffered reader using the line format:
//! a word count `N` on the first line, then `N` words one per line.

use crate::domain::errors::InputError;
use crate::domain::value_objects::{Alphabet, Word};
use crate::ports::outbound::WordSource;
use std::io::BufRead;
use tracing::debug;

/// Reads a counted word list from line-oriented text.
pub struct LineWordSource<R> {
    reader: R,
    /// Whether to lowercase symbols the alphabet only has in lowercase.
    fold_case: bool,
}

impl<R: BufRead> LineWordSource<R> {
    /// Create a source that lowercases words.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            fold_case: true,
        }
    }

    /// Create with configurable case folding.
    pub fn with_fold_case(reader: R, fold_case: bool) -> Self {
        Self { reader, fold_case }
    }

    /// Next line, trimmed. Advances the 1-based `line_no`.
    fn next_line(&mut self, line_no: &mut usize) -> Result<Option<String>, InputError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        *line_no += 1;
        Ok(Some(buf.trim().to_string()))
    }

    /// First non-blank line, parsed as the word count.
    fn read_count(&mut self, line_no: &mut usize) -> Result<usize, InputError> {
        loop {
            let Some(line) = self.next_line(line_no)? else {
                return Err(InputError::MissingCount);
            };
            if line.is_empty() {
                continue;
            }
            return line
                .parse()
                .map_err(|_| InputError::InvalidCount { line });
        }
    }
}

/// Lowercase each symbol the alphabet lacks but holds in lowercase form.
///
/// Symbols already in the alphabet are kept as written, so case-sensitive
/// alphabets read their input unchanged.
fn fold_symbols(text: &str, alphabet: &Alphabet) -> String {
    text.chars()
        .map(|symbol| {
            if alphabet.contains(symbol) {
                return symbol;
            }
            let mut lower = symbol.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(folded), None) if alphabet.contains(folded) => folded,
                _ => symbol,
            }
        })
        .collect()
}

impl<R: BufRead> WordSource for LineWordSource<R> {
    fn read_words(&mut self, alphabet: &Alphabet) -> Result<Vec<Word>, InputError> {
        let mut line_no = 0;
        let expected = self.read_count(&mut line_no)?;
        let mut words = Vec::with_capacity(expected);

        while words.len() < expected {
            let Some(line) = self.next_line(&mut line_no)? else {
                return Err(InputError::MissingWord {
                    expected,
                    found: words.len(),
                });
            };
            if line.is_empty() {
                return Err(InputError::EmptyWord { line: line_no });
            }

            let text = if self.fold_case {
                fold_symbols(&line, alphabet)
            } else {
                line
            };
            let word = Word::parse(&text, alphabet).map_err(|source| InputError::InvalidWord {
                line: line_no,
                source,
            })?;
            words.push(word);
        }

        debug!(word_count = words.len(), "Read word list");
        Ok(words)
    }
}
