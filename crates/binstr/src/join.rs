//! Joining byte-string sequences with a separator.

use crate::BinStr;

/// Concatenates `parts` into one buffer with `sep` between consecutive
/// elements only — none before the first, none after the last.
///
/// ```rust
/// use binstr::join;
///
/// assert_eq!(join(["123", "456", "789"], b"$$"), "123$$456$$789");
/// assert_eq!(join::<[&str; 0], _>([], b","), "");
/// ```
pub fn join<I, T>(parts: I, sep: &[u8]) -> BinStr
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut out = BinStr::new();
    let mut first = true;
    for part in parts {
        if !first {
            out.push_bytes(sep);
        }
        out.push_bytes(part.as_ref());
        first = false;
    }
    out
}
