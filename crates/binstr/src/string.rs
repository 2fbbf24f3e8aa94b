//! The buffer core: layout, growth policy, and length bookkeeping.

use alloc::{vec, vec::Vec};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use bstr::{BStr, ByteSlice};

/// Growth-policy threshold, in bytes.
///
/// Below this target size, [`BinStr::reserve`] doubles the requested
/// allocation (geometric growth); at or above it, reservations add exactly
/// this much headroom on top of the target (linear growth), so slack on
/// large buffers stays bounded by a constant instead of a multiple.
pub const MAX_PREALLOC: usize = 1024 * 1024;

/// A binary-safe, growable byte string.
///
/// `BinStr` stores an explicit, authoritative length: payloads may contain
/// embedded zero bytes and no operation ever infers the length from a
/// terminator. One zero sentinel byte is nevertheless maintained just past
/// the payload so the contents can be handed to terminator-expecting
/// consumers; it is not part of the logical content.
///
/// The buffer dereferences to `[u8]`, so the whole byte-slice API (search,
/// iteration, ASCII case mapping, ...) is available on the payload. Writing
/// through the `&mut [u8]` view cannot change the length; the only ways to
/// do that are the mutation methods and the [`spare_mut`]/[`incr_len`]
/// escape hatch.
///
/// ```rust
/// use binstr::BinStr;
///
/// let mut s = BinStr::from_bytes(b"bin\x00safe");
/// s.push_str("!");
/// assert_eq!(s.len(), 9);
/// assert_eq!(&s[..], b"bin\x00safe!");
/// ```
///
/// [`spare_mut`]: BinStr::spare_mut
/// [`incr_len`]: BinStr::incr_len
pub struct BinStr {
    // Layout: `buf[..len]` payload, `buf[len]` sentinel zero,
    // `buf[len + 1..]` initialized spare storage.
    pub(crate) buf: Vec<u8>,
    pub(crate) len: usize,
}

impl BinStr {
    /// Creates an empty buffer with no spare capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0],
            len: 0,
        }
    }

    /// Creates an empty buffer with at least `capacity` bytes of spare
    /// storage.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity + 1],
            len: 0,
        }
    }

    /// Creates a buffer holding a verbatim copy of `bytes`, with no spare
    /// capacity.
    ///
    /// Embedded zero bytes are payload like any other byte:
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// let s = BinStr::from_bytes(b"a\x00b");
    /// assert_eq!(s.len(), 3);
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        Self {
            buf,
            len: bytes.len(),
        }
    }

    /// Logical length in bytes. O(1); independent of any zero bytes in the
    /// payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Spare payload storage past the logical length, in bytes. O(1).
    #[must_use]
    pub fn spare(&self) -> usize {
        self.buf.len() - 1 - self.len
    }

    /// Total payload storage (`len() + spare()`), not counting the sentinel.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    /// The payload as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The payload as a mutable byte slice.
    ///
    /// Writes through this view cannot change the length. Deliberately
    /// planting a zero byte here and then calling [`update_len`] is the
    /// supported way to truncate at a terminator.
    ///
    /// [`update_len`]: BinStr::update_len
    #[must_use]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    /// Consumes the buffer, returning the payload as a `Vec<u8>`.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.len);
        self.buf
    }

    /// Ensures `spare() >= additional`; no-op if already satisfied.
    ///
    /// When growth is needed, the target size `len() + additional` is
    /// doubled while below [`MAX_PREALLOC`], and padded by exactly
    /// [`MAX_PREALLOC`] otherwise. New storage is zero-initialized.
    /// Existing payload and the sentinel are preserved.
    pub fn reserve(&mut self, additional: usize) {
        if self.spare() >= additional {
            return;
        }
        let target = self.len + additional;
        let new_cap = if target < MAX_PREALLOC {
            target * 2
        } else {
            target + MAX_PREALLOC
        };
        self.buf.resize(new_cap + 1, 0);
    }

    /// Drops all spare capacity, reallocating to exactly the payload size.
    ///
    /// Useful before storing a buffer long-term. Content is unchanged and
    /// `spare()` is zero afterwards.
    pub fn shrink_to_fit(&mut self) {
        self.buf.truncate(self.len + 1);
        self.buf.shrink_to_fit();
    }

    /// Empties the buffer without releasing any storage.
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    /// A mutable view of the spare region, starting at the payload end.
    ///
    /// This is the zero-copy write path: reserve room, write into this
    /// slice, then commit with [`incr_len`]. The view is exactly `spare()`
    /// bytes long. Until `incr_len` runs, the sentinel may be clobbered and
    /// the written bytes are not part of the payload.
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// let mut s = BinStr::from("id:");
    /// s.reserve(4);
    /// s.spare_mut()[..4].copy_from_slice(b"1234");
    /// s.incr_len(4);
    /// assert_eq!(s, "id:1234");
    /// ```
    ///
    /// [`incr_len`]: BinStr::incr_len
    #[must_use]
    pub fn spare_mut(&mut self) -> &mut [u8] {
        let end = self.buf.len() - 1;
        &mut self.buf[self.len..end]
    }

    /// Adjusts the length by `delta` after a direct write through
    /// [`spare_mut`], then rewrites the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if a positive `delta` exceeds `spare()` or a negative one
    /// exceeds `len()` — both are contract violations, not recoverable
    /// conditions.
    ///
    /// [`spare_mut`]: BinStr::spare_mut
    pub fn incr_len(&mut self, delta: isize) {
        let magnitude = delta.unsigned_abs();
        if delta >= 0 {
            assert!(
                self.spare() >= magnitude,
                "incr_len({delta}) exceeds spare capacity {}",
                self.spare()
            );
            self.len += magnitude;
        } else {
            assert!(
                self.len >= magnitude,
                "incr_len({delta}) exceeds length {}",
                self.len
            );
            self.len -= magnitude;
        }
        self.buf[self.len] = 0;
    }

    /// Re-derives the length by scanning for the first zero byte.
    ///
    /// Exists to reconcile the explicit length after a caller has planted a
    /// terminator mid-payload through [`as_bytes_mut`]; it is never run
    /// automatically. If no zero byte survives (possible after raw writes
    /// through [`spare_mut`]), the full storage is adopted as payload and a
    /// sentinel is restored at its end.
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// let mut s = BinStr::from("foobar");
    /// s.as_bytes_mut()[2] = 0;
    /// s.update_len();
    /// assert_eq!(s.len(), 2);
    /// assert_eq!(s, "fo");
    /// ```
    ///
    /// [`as_bytes_mut`]: BinStr::as_bytes_mut
    /// [`spare_mut`]: BinStr::spare_mut
    pub fn update_len(&mut self) {
        let terminator = self.buf.find_byte(0).unwrap_or(self.buf.len() - 1);
        self.len = terminator;
        self.buf[terminator] = 0;
    }
}

impl Default for BinStr {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BinStr {
    /// Duplicates the payload compactly: the clone carries no spare
    /// capacity regardless of the source's.
    fn clone(&self) -> Self {
        Self::from_bytes(self.as_bytes())
    }
}

impl Deref for BinStr {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for BinStr {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for BinStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for BinStr {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for BinStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl fmt::Display for BinStr {
    /// Lossy display: invalid UTF-8 renders as replacement characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl PartialEq for BinStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BinStr {}

impl PartialOrd for BinStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinStr {
    /// Byte-wise lexicographic order with length as the tiebreak: a buffer
    /// that is a strict prefix of another sorts first. Embedded zero bytes
    /// compare as ordinary bytes.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for BinStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for BinStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for BinStr {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for BinStr {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for BinStr {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for BinStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for BinStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&[u8]> for BinStr {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for BinStr {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<alloc::string::String> for BinStr {
    fn from(s: alloc::string::String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<Vec<u8>> for BinStr {
    /// Takes ownership of the vector without copying; the sentinel is
    /// appended in place.
    fn from(mut bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        bytes.push(0);
        Self { buf: bytes, len }
    }
}

impl From<&CStr> for BinStr {
    /// Builds from a C string, with the length taken from the terminator
    /// scan the `CStr` already performed.
    fn from(s: &CStr) -> Self {
        Self::from_bytes(s.to_bytes())
    }
}

impl FromIterator<u8> for BinStr {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl Extend<u8> for BinStr {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for byte in iter {
            self.push_byte(byte);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::vec::Vec;
    use core::fmt;

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::BinStr;

    impl Serialize for BinStr {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    struct BinStrVisitor;

    impl<'de> de::Visitor<'de> for BinStrVisitor {
        type Value = BinStr;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a byte string")
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<BinStr, E> {
            Ok(BinStr::from_bytes(v))
        }

        fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<BinStr, E> {
            Ok(BinStr::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BinStr, E> {
            Ok(BinStr::from(v))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<BinStr, A::Error> {
            let mut out = BinStr::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                out.push_byte(byte);
            }
            Ok(out)
        }
    }

    impl<'de> Deserialize<'de> for BinStr {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_byte_buf(BinStrVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinStr, MAX_PREALLOC};

    #[test]
    fn empty_has_no_storage() {
        let s = BinStr::new();
        assert_eq!(s.len(), 0);
        assert_eq!(s.spare(), 0);
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn small_reserve_doubles_the_target() {
        let mut s = BinStr::from("abcd");
        s.reserve(10);
        // target 14, doubled
        assert_eq!(s.capacity(), 28);
        assert_eq!(s.spare(), 24);
        assert_eq!(s, "abcd");
    }

    #[test]
    fn large_reserve_adds_constant_headroom() {
        let mut s = BinStr::new();
        s.reserve(MAX_PREALLOC);
        assert_eq!(s.capacity(), 2 * MAX_PREALLOC);
        s.reserve(3 * MAX_PREALLOC);
        assert_eq!(s.capacity(), 4 * MAX_PREALLOC);
    }

    #[test]
    fn satisfied_reserve_is_a_noop() {
        let mut s = BinStr::from("abcd");
        s.reserve(10);
        let cap = s.capacity();
        s.reserve(5);
        assert_eq!(s.capacity(), cap);
    }

    #[test]
    fn shrink_drops_all_spare() {
        let mut s = BinStr::from("hello");
        s.reserve(100);
        s.shrink_to_fit();
        assert_eq!(s.spare(), 0);
        assert_eq!(s, "hello");
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut s = BinStr::from("hello");
        s.reserve(32);
        let cap = s.capacity();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), cap);
    }

    #[test]
    fn incr_len_commits_raw_writes() {
        let mut s = BinStr::from("ab");
        s.reserve(4);
        s.spare_mut()[..2].copy_from_slice(b"cd");
        s.incr_len(2);
        assert_eq!(s, "abcd");
        s.incr_len(-3);
        assert_eq!(s, "a");
    }

    #[test]
    #[should_panic(expected = "exceeds spare capacity")]
    fn incr_len_past_spare_is_a_contract_violation() {
        let mut s = BinStr::new();
        s.incr_len(1);
    }

    #[test]
    #[should_panic(expected = "exceeds length")]
    fn incr_len_below_zero_is_a_contract_violation() {
        let mut s = BinStr::from("ab");
        s.incr_len(-3);
    }

    #[test]
    fn clone_is_compact() {
        let mut s = BinStr::from("data");
        s.reserve(100);
        let dup = s.clone();
        assert_eq!(dup, s);
        assert_eq!(dup.spare(), 0);
    }

    #[test]
    fn debug_escapes_non_printable_bytes() {
        let s = BinStr::from_bytes(b"a\xffb");
        let rendered = std::format!("{s:?}");
        assert!(rendered.starts_with('"') && rendered.ends_with('"'));
        assert!(rendered.contains("\\x"), "non-UTF-8 byte should be escaped: {rendered}");
    }
}
