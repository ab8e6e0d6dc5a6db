//! Character scanner for line and semicolon counting.
//!
//! Input is decoded as UTF-8 one character at a time. Line breaks follow
//! universal-newline rules: `\n`, `\r\n` and a lone `\r` each end one line,
//! and a trailing run of text without a terminator is still a line.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use utf8_chars::BufReadCharsExt;

use crate::error::SemicountError;
use crate::Result;

use super::stats::FileCounts;

/// The character counted alongside lines.
pub const COUNTED_CHAR: char = ';';

/// A scanner over a single UTF-8 text stream.
///
/// Invalid or truncated UTF-8 surfaces as an `io::ErrorKind::InvalidData`
/// error naming the byte offset where decoding stopped. Any error fails the
/// whole scan; partial counts are discarded with the scanner.
pub struct Scanner<T: Read> {
    reader: BufReader<T>,
    counts: FileCounts,
    /// Text seen since the last line break
    line_open: bool,
    /// Previous character was `\r`, so a following `\n` closes nothing new
    after_cr: bool,
    /// Bytes decoded so far
    offset: u64,
}

impl Scanner<File> {
    /// Create a scanner for the file at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SemicountError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(file))
    }
}

impl<T: Read> Scanner<T> {
    /// Create a scanner from any reader.
    pub fn new(reader: T) -> Self {
        Self {
            reader: BufReader::new(reader),
            counts: FileCounts::default(),
            line_open: false,
            after_cr: false,
            offset: 0,
        }
    }

    /// Read the stream to the end and return its counts.
    pub fn scan(mut self) -> io::Result<FileCounts> {
        while let Some(c) = self.next_char()? {
            self.visit(c);
        }

        if self.line_open {
            self.counts.lines += 1;
        }

        Ok(self.counts)
    }

    fn visit(&mut self, c: char) {
        match c {
            '\n' if self.after_cr => {
                self.after_cr = false;
            }
            '\n' => self.finish_line(),
            '\r' => {
                self.finish_line();
                self.after_cr = true;
            }
            _ => {
                self.after_cr = false;
                self.line_open = true;
                if c == COUNTED_CHAR {
                    self.counts.semicolons += 1;
                }
            }
        }
    }

    fn finish_line(&mut self) {
        self.counts.lines += 1;
        self.line_open = false;
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        match self.reader.chars().next().transpose() {
            Ok(Some(c)) => {
                self.offset += c.len_utf8() as u64;
                Ok(Some(c))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(self.decode_error(e)),
        }
    }

    /// utf8-chars reports decode failures by error kind alone.
    fn decode_error(&self, err: io::Error) -> io::Error {
        let message = match err.kind() {
            io::ErrorKind::InvalidData => {
                format!("invalid UTF-8 sequence at byte {}", self.offset)
            }
            io::ErrorKind::UnexpectedEof => {
                format!("incomplete UTF-8 sequence at byte {}", self.offset)
            }
            _ => return err,
        };
        io::Error::new(io::ErrorKind::InvalidData, message)
    }
}
