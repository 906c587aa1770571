use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Value {position} is missing")]
    MissingValue { position: usize },
    #[error("Value {position} is not an integer: {token:?}")]
    InvalidToken { position: usize, token: String },
}

/// Three integers in the order they were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTriple {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl InputTriple {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    pub fn values(&self) -> [i64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Read the first three whitespace separated integers from `reader`.
///
/// Lines are consumed only until three tokens have been seen, so anything
/// after the third value is left unread.
pub fn read_triple<R: BufRead>(reader: R) -> Result<InputTriple, InputError> {
    let mut numbers = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let position = numbers.len() + 1;
            let value = token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidToken {
                    position,
                    token: token.to_string(),
                })?;
            numbers.push(value);

            if numbers.len() == 3 {
                return Ok(InputTriple::new(numbers[0], numbers[1], numbers[2]));
            }
        }
    }

    Err(InputError::MissingValue {
        position: numbers.len() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    /// Yields one line of input, then fails on every later read.
    struct FailAfterFirstLine {
        sent: bool,
    }

    impl Read for FailAfterFirstLine {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::other("stream closed"));
            }
            self.sent = true;
            let line = b"4 5 6\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn reads_values_across_lines() {
        let triple = read_triple(Cursor::new("50\n30\n10\n")).unwrap();
        assert_eq!(triple, InputTriple::new(50, 30, 10));
    }

    #[test]
    fn reads_values_on_one_line() {
        let triple = read_triple(Cursor::new("  7 -3\t12")).unwrap();
        assert_eq!(triple.values(), [7, -3, 12]);
    }

    #[test]
    fn ignores_trailing_tokens() {
        let triple = read_triple(Cursor::new("1 2 3 garbage")).unwrap();
        assert_eq!(triple.values(), [1, 2, 3]);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let err = read_triple(Cursor::new(vec![b'1', b' ', 0xff, b'\n'])).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn stops_reading_after_third_value() {
        let triple = read_triple(Cursor::new(b"1 2 3\n\xff".to_vec())).unwrap();
        assert_eq!(triple.values(), [1, 2, 3]);
    }

    #[test]
    fn does_not_read_past_third_value() {
        let triple = read_triple(BufReader::new(FailAfterFirstLine { sent: false })).unwrap();
        assert_eq!(triple.values(), [4, 5, 6]);
    }

    #[test]
    fn missing_value_reports_position() {
        let err = read_triple(Cursor::new("1 2\n")).unwrap_err();
        assert!(matches!(err, InputError::MissingValue { position: 3 }));
    }

    #[test]
    fn empty_input_is_missing_first_value() {
        let err = read_triple(Cursor::new("")).unwrap_err();
        assert!(matches!(err, InputError::MissingValue { position: 1 }));
    }

    #[test]
    fn invalid_token_is_rejected() {
        let err = read_triple(Cursor::new("1 abc 3")).unwrap_err();
        match err {
            InputError::InvalidToken { position, token } => {
                assert_eq!(position, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn overflowing_token_is_rejected() {
        let err = read_triple(Cursor::new("99999999999999999999 1 2")).unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { position: 1, .. }));
    }
}
