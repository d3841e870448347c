//! Position-tracking character reader
//!
//! The reader decodes UTF-8 from a buffered byte stream one character at a
//! time. [`PositionTracker::position`] always describes the character
//! currently held by [`PositionTracker::current`]: each advance first steps
//! the position past the previously held character, then loads the next one.
//! The tokenizer relies on this to read a lexeme's start position before
//! consuming its first character.

use super::error::LexicalError;
use crate::utils::Position;
use std::char::REPLACEMENT_CHARACTER;
use std::io::{self, BufRead};

pub struct PositionTracker<R> {
    reader: R,
    position: Position,
    current: Option<char>,
    /// Encoded width of `current` in bytes
    width: usize,
    at_end: bool,
    error: Option<LexicalError>,
}

impl<R: BufRead> PositionTracker<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: Position::start(),
            current: None,
            width: 0,
            at_end: false,
            error: None,
        }
    }

    /// Load the next character
    ///
    /// Returns false at end of stream or when reading failed; a failure is
    /// kept in [`error`](Self::error) and no further characters are read.
    /// Reaching the end still steps past the last character, so the final
    /// position equals the length of the input.
    pub fn advance(&mut self) -> bool {
        if self.at_end || self.error.is_some() {
            return false;
        }

        let next = self.read_char();

        if let Some(previous) = self.current {
            self.position = self.position.step(previous, self.width);
        }

        match next {
            Ok(Some((ch, width))) => {
                self.current = Some(ch);
                self.width = width;
                true
            }
            Ok(None) => {
                self.current = None;
                self.width = 0;
                self.at_end = true;
                false
            }
            Err(e) => {
                self.current = None;
                self.width = 0;
                self.error = Some(LexicalError::stream(self.position, &e));
                false
            }
        }
    }

    /// The character at [`position`](Self::position), if any
    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    pub fn error(&self) -> Option<&LexicalError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<LexicalError> {
        self.error.take()
    }

    /// Decode one character, `None` at a clean end of stream
    ///
    /// Bytes are fed to `str::from_utf8` until they form a character. A
    /// malformed sequence decodes to U+FFFD covering the bytes examined; the
    /// byte that broke it is left for the next call.
    fn read_char(&mut self) -> io::Result<Option<(char, usize)>> {
        let mut buf = [0u8; 4];
        let mut len = 0;

        loop {
            let byte = match self.peek_byte()? {
                Some(byte) => byte,
                None if len == 0 => return Ok(None),
                None => return Ok(Some((REPLACEMENT_CHARACTER, len))),
            };
            buf[len] = byte;

            match std::str::from_utf8(&buf[..=len]) {
                Ok(text) => {
                    self.reader.consume(1);
                    let ch = text.chars().next().unwrap_or(REPLACEMENT_CHARACTER);
                    return Ok(Some((ch, len + 1)));
                }
                // Valid prefix of a longer sequence.
                Err(e) if e.error_len().is_none() => {
                    self.reader.consume(1);
                    len += 1;
                }
                Err(_) if len == 0 => {
                    self.reader.consume(1);
                    return Ok(Some((REPLACEMENT_CHARACTER, 1)));
                }
                Err(_) => return Ok(Some((REPLACEMENT_CHARACTER, len))),
            }
        }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }
}
