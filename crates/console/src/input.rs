//! Whitespace-token reader over a line-oriented input.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::ConsoleError;

/// Yields whitespace-separated tokens, pulling lines from `R` on demand.
///
/// Several values may be typed on one line; unread tokens carry over to the
/// next request until [`discard_line`](Self::discard_line) drops them.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line reads
    /// as an unrecognized token instead of failing the channel.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`; `field` names the value in the error.
    pub fn next_value<T: FromStr>(
        &mut self,
        field: &'static str,
    ) -> Result<Option<T>, ConsoleError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        token
            .parse()
            .map(Some)
            .map_err(|_| ConsoleError::InvalidNumber {
                field,
                input: token,
            })
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn splits_tokens_across_and_within_lines() {
        let mut input = reader("Bat 10\n  25.5\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("Bat"));
        assert_eq!(input.next_value::<u32>("quantity").unwrap(), Some(10));
        assert_eq!(input.next_value::<f64>("price").unwrap(), Some(25.5));
        assert_eq!(input.next_token().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_becomes_a_replacement_token() {
        let mut input = TokenReader::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()));
        assert_eq!(
            input.next_token().unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(input.next_value::<u32>("quantity").unwrap(), Some(7));
    }

    #[test]
    fn skips_blank_lines() {
        let mut input = reader("\n\n   \n3\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn malformed_number_reports_field_and_token() {
        let mut input = reader("-3\n");
        match input.next_value::<u32>("quantity") {
            Err(ConsoleError::InvalidNumber { field, input }) => {
                assert_eq!(field, "quantity");
                assert_eq!(input, "-3");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn discard_line_drops_rest_of_current_line_only() {
        let mut input = reader("9 junk junk\n2\n");
        assert_eq!(input.next_token().unwrap().as_deref(), Some("9"));
        input.discard_line();
        assert_eq!(input.next_token().unwrap().as_deref(), Some("2"));
    }
}
