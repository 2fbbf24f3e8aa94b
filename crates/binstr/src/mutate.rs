//! In-place mutation: appends, overwrites, trimming, slicing, and byte
//! mapping.
//!
//! Every operation that can grow the buffer funnels through
//! [`BinStr::reserve`], so the growth policy applies uniformly. Trimming and
//! slicing never reallocate; they shift the surviving span to the front and
//! give the freed bytes back as spare capacity.

use core::ffi::CStr;

use crate::BinStr;

impl BinStr {
    /// Appends `bytes` verbatim, embedded zero bytes included.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        let start = self.len;
        self.buf[start..start + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        self.buf[self.len] = 0;
    }

    /// Appends the UTF-8 bytes of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.push_bytes(s.as_bytes());
    }

    /// Appends another buffer's payload.
    pub fn push_binstr(&mut self, other: &BinStr) {
        self.push_bytes(other.as_bytes());
    }

    /// Appends a C string's bytes, up to but not including its terminator.
    pub fn push_cstr(&mut self, s: &CStr) {
        self.push_bytes(s.to_bytes());
    }

    /// Appends a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.reserve(1);
        self.buf[self.len] = byte;
        self.len += 1;
        self.buf[self.len] = 0;
    }

    /// Appends a character as UTF-8.
    pub fn push_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.push_bytes(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Replaces the entire content with `bytes`, reusing storage when it
    /// fits.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        if self.capacity() < bytes.len() {
            self.reserve(bytes.len() - self.len);
        }
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        self.buf[self.len] = 0;
    }

    /// Replaces the entire content with the UTF-8 bytes of `s`.
    pub fn set_str(&mut self, s: &str) {
        self.set_bytes(s.as_bytes());
    }

    /// Extends the payload to `target_len` bytes, filling the new tail with
    /// zero bytes. No-op when the buffer is already at least that long.
    pub fn grow_zeroed(&mut self, target_len: usize) {
        if self.len >= target_len {
            return;
        }
        self.reserve(target_len - self.len);
        // Spare storage may hold stale bytes from earlier truncations.
        self.buf[self.len..=target_len].fill(0);
        self.len = target_len;
    }

    /// Strips leading and trailing bytes that occur in `charset`, in place.
    ///
    /// Never reallocates; the removed bytes become spare capacity.
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// let mut s = BinStr::from(" **hello**");
    /// s.trim(b"* ");
    /// assert_eq!(s, "hello");
    /// ```
    pub fn trim(&mut self, charset: &[u8]) {
        let bytes = self.as_bytes();
        let start = bytes
            .iter()
            .position(|b| !charset.contains(b))
            .unwrap_or(bytes.len());
        let end = bytes
            .iter()
            .rposition(|b| !charset.contains(b))
            .map_or(start, |i| i + 1);
        let new_len = end - start;
        self.buf.copy_within(start..end, 0);
        self.len = new_len;
        self.buf[new_len] = 0;
    }

    /// Retains only the `start..=end` range of the payload, in place.
    ///
    /// Negative indices count from the end (`-1` is the last byte).
    /// Out-of-range indices clamp; a normalized `start` past `end` leaves an
    /// empty buffer. Never reallocates.
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// let mut s = BinStr::from("Hello World");
    /// s.range(-5, -1);
    /// assert_eq!(s, "World");
    /// ```
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn range(&mut self, start: isize, end: isize) {
        let len = self.len as isize;
        if len == 0 {
            return;
        }
        let mut start = if start < 0 { (len + start).max(0) } else { start };
        let mut end = if end < 0 { (len + end).max(0) } else { end };
        let mut new_len = if start > end { 0 } else { end - start + 1 };
        if new_len == 0 {
            start = 0;
        } else if start >= len {
            new_len = 0;
        } else if end >= len {
            end = len - 1;
            new_len = if start > end { 0 } else { end - start + 1 };
        }
        let (start, new_len) = (start as usize, new_len as usize);
        if start > 0 && new_len > 0 {
            self.buf.copy_within(start..start + new_len, 0);
        }
        self.len = new_len;
        self.buf[new_len] = 0;
    }

    /// Substitutes payload bytes: every byte found in `from` becomes the
    /// byte at the same position in `to`. First match in `from` wins.
    /// In place, byte-wise, no allocation.
    ///
    /// # Panics
    ///
    /// Panics if `from` and `to` differ in length (contract violation).
    pub fn map_bytes(&mut self, from: &[u8], to: &[u8]) {
        assert_eq!(
            from.len(),
            to.len(),
            "map_bytes requires equal-length byte sets"
        );
        for byte in self.as_bytes_mut() {
            if let Some(i) = from.iter().position(|f| f == byte) {
                *byte = to[i];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinStr;

    #[test]
    fn appends_are_binary_safe() {
        let mut s = BinStr::new();
        s.push_bytes(b"a\x00b");
        s.push_binstr(&BinStr::from_bytes(b"\x00"));
        s.push_byte(b'c');
        assert_eq!(s, b"a\x00b\x00c");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn cstr_append_stops_at_the_input_terminator() {
        let mut s = BinStr::from("x=");
        let c = core::ffi::CStr::from_bytes_with_nul(b"abc\0").unwrap();
        s.push_cstr(c);
        assert_eq!(s, "x=abc");
    }

    #[test]
    fn push_char_encodes_utf8() {
        let mut s = BinStr::new();
        s.push_char('é');
        assert_eq!(s, "é".as_bytes());
    }

    #[test]
    fn set_bytes_reuses_storage_when_it_fits() {
        let mut s = BinStr::from("a longer initial value");
        let cap = s.capacity();
        s.set_bytes(b"short");
        assert_eq!(s, "short");
        assert_eq!(s.capacity(), cap);

        s.set_bytes(&[b'x'; 64]);
        assert_eq!(s.len(), 64);
    }

    #[test]
    fn grow_zeroed_extends_with_zero_bytes() {
        let mut s = BinStr::from("ab");
        s.grow_zeroed(5);
        assert_eq!(s, b"ab\x00\x00\x00");
        s.grow_zeroed(3);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn grow_zeroed_clears_stale_spare_bytes() {
        let mut s = BinStr::from("abcdef");
        s.incr_len(-4);
        s.grow_zeroed(6);
        assert_eq!(s, b"ab\x00\x00\x00\x00");
    }

    #[test]
    fn trim_can_empty_the_buffer() {
        let mut s = BinStr::from("***");
        s.trim(b"*");
        assert!(s.is_empty());
    }

    #[test]
    fn trim_never_reallocates() {
        let mut s = BinStr::from("  padded  ");
        let cap = s.capacity();
        s.trim(b" ");
        assert_eq!(s, "padded");
        assert_eq!(s.capacity(), cap);
        assert_eq!(s.spare(), cap - 6);
    }

    #[test]
    fn case_mapping_through_the_slice_view() {
        let mut s = BinStr::from_bytes(b"MiXeD\xff09");
        s.make_ascii_lowercase();
        assert_eq!(s, b"mixed\xff09");
        s.make_ascii_uppercase();
        assert_eq!(s, b"MIXED\xff09");
    }

    #[test]
    fn map_bytes_substitutes_positionally() {
        let mut s = BinStr::from("hello");
        s.map_bytes(b"ho", b"0_");
        assert_eq!(s, "0ell_");
    }

    #[test]
    #[should_panic(expected = "equal-length byte sets")]
    fn map_bytes_length_mismatch_is_a_contract_violation() {
        let mut s = BinStr::from("hello");
        s.map_bytes(b"ab", b"x");
    }
}
