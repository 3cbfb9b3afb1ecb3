//! Character sources feeding the tokenizer.
//!
//! The tokenizer needs exactly three capabilities from its input: read the
//! next character, report the current position, and rewind to an earlier
//! position (token lookahead is implemented as read-then-rewind). Backends
//! are selected at construction and held behind a trait object.
//!
//! Positions count characters, not bytes. Streaming is not supported; the
//! file backend reads the whole file up front.

use std::fs;
use std::io;
use std::path::Path;

/// A repositionable character source.
pub trait CharSource {
    /// Read the next character, advancing the position. `None` at end of input.
    fn next_char(&mut self) -> Option<char>;

    /// Current position, in characters from the start of the input.
    fn pos(&self) -> usize;

    /// Rewind (or advance) to an absolute position previously returned by [`pos`].
    ///
    /// [`pos`]: CharSource::pos
    fn seek(&mut self, pos: usize);
}

/// In-memory character source over a string.
pub struct StringSource {
    input: Vec<char>,
    position: usize,
}

impl StringSource {
    pub fn new(input: &str) -> Self {
        StringSource {
            input: input.chars().collect(),
            position: 0,
        }
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    fn pos(&self) -> usize {
        self.position
    }

    fn seek(&mut self, pos: usize) {
        self.position = pos;
    }
}

/// Character source backed by a file, read in full on open.
pub struct FileSource {
    inner: StringSource,
}

impl FileSource {
    /// Open `path` and read its contents. Fails if the file cannot be
    /// opened or is not valid UTF-8.
    pub fn open(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(FileSource {
            inner: StringSource::new(&contents),
        })
    }
}

impl CharSource for FileSource {
    fn next_char(&mut self) -> Option<char> {
        self.inner.next_char()
    }

    fn pos(&self) -> usize {
        self.inner.pos()
    }

    fn seek(&mut self, pos: usize) {
        self.inner.seek(pos);
    }
}
