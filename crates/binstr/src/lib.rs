//! Binary-safe, growable byte strings.
//!
//! The central type, [`BinStr`], is an exclusively-owned byte buffer that
//! tracks its length explicitly instead of relying on a terminator, so
//! payloads may contain embedded zero bytes. A single zero sentinel byte is
//! still kept just past the payload for interop with terminator-expecting
//! consumers, but it never participates in the logical content.
//!
//! Appends funnel through an amortized growth policy: allocations double
//! until [`MAX_PREALLOC`], after which they grow by a constant amount, so
//! repeated small appends cost O(1) per byte without wasting unbounded
//! memory on large buffers.
//!
//! Two tokenizers accompany the buffer: [`split_on`] cuts on an exact byte
//! sequence, and [`split_args`] understands a shell/config-file grammar with
//! quoting and escapes. [`BinStr::quoted`] is the inverse of the latter:
//! its output fed back through `split_args` reproduces the original bytes.
//!
//! ```rust
//! use binstr::{BinStr, split_args};
//!
//! let mut line = BinStr::from("timeout");
//! line.push_str(" 300");
//! let args = split_args(&line).unwrap();
//! assert_eq!(args, [BinStr::from("timeout"), BinStr::from("300")]);
//!
//! let raw = BinStr::from_bytes(b"a\x00b\n");
//! assert_eq!(split_args(&raw.quoted()).unwrap(), [raw]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod format;
mod join;
mod mutate;
mod split;
mod string;

#[cfg(test)]
mod tests;

pub use error::SplitArgsError;
pub use format::TemplateArg;
pub use join::join;
pub use split::{split_args, split_on};
pub use string::{BinStr, MAX_PREALLOC};

/// Appends formatted text to a [`BinStr`], `format!`-style.
///
/// Sugar over [`BinStr::push_fmt`]; accepts any standard format string and
/// arguments.
///
/// ```rust
/// use binstr::{BinStr, cat_fmt};
///
/// let mut s = BinStr::from("pi = ");
/// cat_fmt!(s, "{:.2}", 3.14159);
/// assert_eq!(s, "pi = 3.14");
/// ```
#[macro_export]
macro_rules! cat_fmt {
    ($buf:expr, $($arg:tt)*) => {
        $buf.push_fmt(core::format_args!($($arg)*))
    };
}
