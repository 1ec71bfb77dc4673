use std::io::{self, BufRead, ErrorKind};

use crate::common::config::MAX_WORD_LEN;
use crate::common::exception::WordReaderError;

/// Splits a byte stream into lowercase words.
///
/// A word is a run of ASCII letters and digits. Apostrophes inside a word are
/// dropped without ending it ("don't" reads as "dont"); every other byte is a
/// separator. Words longer than the limit are cut and the rest of the run
/// starts the next word.
///
/// The iterator yields `None` at end of stream and `Some(Err(..))` when the
/// underlying reader fails.
///
/// # Example
/// ```rust
/// use freqdict::text::word_reader::WordReader;
///
/// let words: Vec<String> = WordReader::new("It's the Cat's hat!".as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words, vec!["its", "the", "cats", "hat"]);
/// ```
pub struct WordReader<R> {
    reader: R,
    max_len: usize,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_WORD_LEN)
    }

    /// Creates a reader that emits at most `max_len` bytes per word (minimum 1).
    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len: max_len.max(1),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_word(&mut self) -> io::Result<Option<String>> {
        // skip to the start of the next word
        loop {
            match self.peek()? {
                None => return Ok(None),
                Some(b) if b.is_ascii_alphanumeric() => break,
                Some(_) => self.reader.consume(1),
            }
        }

        let mut word = String::new();
        while word.len() < self.max_len {
            match self.peek()? {
                Some(b) if b.is_ascii_alphanumeric() => {
                    word.push(char::from(b.to_ascii_lowercase()));
                    self.reader.consume(1);
                }
                Some(b'\'') => self.reader.consume(1),
                _ => break,
            }
        }
        Ok(Some(word))
    }
}

impl<R: BufRead> Iterator for WordReader<R> {
    type Item = Result<String, WordReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_word().map_err(WordReaderError::from).transpose()
    }
}
