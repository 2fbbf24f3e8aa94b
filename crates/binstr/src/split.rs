//! Tokenizers: exact-delimiter splitting, shell/config-style argument
//! splitting, and the quoted re-encoder that inverts the latter.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{BinStr, SplitArgsError};

/// Splits `data` on every non-overlapping, leftmost occurrence of the exact
/// byte sequence `sep`.
///
/// The regions between occurrences become tokens, each an independently
/// owned [`BinStr`]; leading, trailing, and adjacent separators produce
/// empty tokens. Empty input yields a single empty token, not zero tokens.
/// Binary-safe on both `data` and `sep`.
///
/// ```rust
/// use binstr::split_on;
///
/// let tokens = split_on(b"a,b,,c", b",");
/// assert_eq!(tokens, [b"a" as &[u8], b"b", b"", b"c"]);
/// ```
///
/// # Panics
///
/// Panics on an empty separator (contract violation).
#[must_use]
pub fn split_on(data: &[u8], sep: &[u8]) -> Vec<BinStr> {
    assert!(!sep.is_empty(), "split_on separator must be non-empty");
    let mut tokens = Vec::new();
    let mut rest = data;
    loop {
        match rest.find(sep) {
            Some(i) => {
                tokens.push(BinStr::from_bytes(&rest[..i]));
                rest = &rest[i + sep.len()..];
            }
            None => {
                tokens.push(BinStr::from_bytes(rest));
                return tokens;
            }
        }
    }
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Tokenizes a config/shell-style line into arguments.
///
/// Tokens are separated by runs of ASCII whitespace. Within a token:
///
/// - `"..."` spans recognize the escapes `\n`, `\r`, `\t`, `\b`, `\a`,
///   `\\`, `\"`, and `\xHH` (two hex digits, inserting that raw byte); any
///   other escape is an error.
/// - `'...'` spans copy bytes verbatim except `\'`, which inserts a literal
///   quote.
/// - A closing quote must be followed by whitespace or end of input.
/// - An unquoted `#` at a token boundary starts a comment that discards the
///   rest of the input.
///
/// On success every token is an independently owned [`BinStr`]. On failure
/// no tokens are returned at all — partial results are discarded.
///
/// ```rust
/// use binstr::split_args;
///
/// let args = split_args(b"bind \"127.0.0.1\" # local only").unwrap();
/// assert_eq!(args, [b"bind" as &[u8], b"127.0.0.1"]);
///
/// assert!(split_args(b"a \"unterminated").is_err());
/// ```
///
/// # Errors
///
/// [`SplitArgsError`] on an unterminated quote, an invalid escape, or a
/// closing quote followed by anything but whitespace.
pub fn split_args(line: &[u8]) -> Result<Vec<BinStr>, SplitArgsError> {
    let mut argv = Vec::new();
    let mut i = 0;
    loop {
        while i < line.len() && line[i].is_ascii_whitespace() {
            i += 1;
        }
        if i == line.len() {
            return Ok(argv);
        }
        // Comments are only recognized at a token boundary; a '#' inside a
        // token is payload.
        if line[i] == b'#' {
            return Ok(argv);
        }

        let mut current = BinStr::new();
        let mut in_quotes = false;
        let mut in_squotes = false;
        loop {
            if in_quotes {
                match line.get(i).copied() {
                    None => return Err(SplitArgsError::UnterminatedQuote { offset: line.len() }),
                    Some(b'\\') => match line.get(i + 1).copied() {
                        Some(b'x') => {
                            let hi = line.get(i + 2).copied().and_then(hex_val);
                            let lo = line.get(i + 3).copied().and_then(hex_val);
                            let (Some(hi), Some(lo)) = (hi, lo) else {
                                return Err(SplitArgsError::InvalidEscape { offset: i });
                            };
                            current.push_byte(hi * 16 + lo);
                            i += 4;
                        }
                        Some(escape) => {
                            let decoded = match escape {
                                b'n' => b'\n',
                                b'r' => b'\r',
                                b't' => b'\t',
                                b'b' => 0x08,
                                b'a' => 0x07,
                                b'\\' | b'"' => escape,
                                _ => return Err(SplitArgsError::InvalidEscape { offset: i }),
                            };
                            current.push_byte(decoded);
                            i += 2;
                        }
                        None => return Err(SplitArgsError::InvalidEscape { offset: i }),
                    },
                    Some(b'"') => {
                        if let Some(next) = line.get(i + 1).copied() {
                            if !next.is_ascii_whitespace() {
                                return Err(SplitArgsError::TrailingGarbage { offset: i + 1 });
                            }
                        }
                        in_quotes = false;
                        i += 1;
                    }
                    Some(byte) => {
                        current.push_byte(byte);
                        i += 1;
                    }
                }
            } else if in_squotes {
                match line.get(i).copied() {
                    None => return Err(SplitArgsError::UnterminatedQuote { offset: line.len() }),
                    Some(b'\\') if line.get(i + 1).copied() == Some(b'\'') => {
                        current.push_byte(b'\'');
                        i += 2;
                    }
                    Some(b'\'') => {
                        if let Some(next) = line.get(i + 1).copied() {
                            if !next.is_ascii_whitespace() {
                                return Err(SplitArgsError::TrailingGarbage { offset: i + 1 });
                            }
                        }
                        in_squotes = false;
                        i += 1;
                    }
                    Some(byte) => {
                        current.push_byte(byte);
                        i += 1;
                    }
                }
            } else {
                match line.get(i).copied() {
                    None => break,
                    Some(byte) if byte.is_ascii_whitespace() => break,
                    Some(b'"') => {
                        in_quotes = true;
                        i += 1;
                    }
                    Some(b'\'') => {
                        in_squotes = true;
                        i += 1;
                    }
                    Some(byte) => {
                        current.push_byte(byte);
                        i += 1;
                    }
                }
            }
        }
        argv.push(current);
    }
}

impl BinStr {
    /// Appends `bytes` rendered as a double-quoted token that
    /// [`split_args`] parses back to exactly `bytes`.
    ///
    /// Quote and backslash are backslash-escaped, the named control bytes
    /// use their `\n`-style forms, and every other non-printable byte
    /// becomes `\xHH`.
    pub fn push_quoted(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len() + 2);
        self.push_byte(b'"');
        for &byte in bytes {
            match byte {
                b'\\' | b'"' => {
                    self.push_byte(b'\\');
                    self.push_byte(byte);
                }
                b'\n' => self.push_str("\\n"),
                b'\r' => self.push_str("\\r"),
                b'\t' => self.push_str("\\t"),
                0x07 => self.push_str("\\a"),
                0x08 => self.push_str("\\b"),
                _ if byte.is_ascii_graphic() || byte == b' ' => self.push_byte(byte),
                _ => self.push_fmt(format_args!("\\x{byte:02x}")),
            }
        }
        self.push_byte(b'"');
    }

    /// Returns this payload as a double-quoted, escaped token.
    ///
    /// The round-trip contract: feeding the result through [`split_args`]
    /// yields exactly one token equal to the original payload.
    ///
    /// ```rust
    /// use binstr::{BinStr, split_args};
    ///
    /// let raw = BinStr::from_bytes(b"say \"hi\"\n\x00");
    /// let quoted = raw.quoted();
    /// assert_eq!(quoted, "\"say \\\"hi\\\"\\n\\x00\"");
    /// assert_eq!(split_args(&quoted).unwrap(), [raw]);
    /// ```
    #[must_use]
    pub fn quoted(&self) -> BinStr {
        let mut out = BinStr::new();
        out.push_quoted(self.as_bytes());
        out
    }
}
