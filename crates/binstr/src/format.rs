//! Formatted append and numeric conversion.
//!
//! `BinStr` implements [`core::fmt::Write`], so the whole standard
//! formatting machinery renders straight into the buffer. Rendering is
//! incremental: each fragment goes through [`BinStr::reserve`], whose
//! geometric policy plays the role of the grow-and-retry sizing loop a
//! C-style `vsnprintf` append would need.

use core::fmt;

use crate::BinStr;

/// A typed argument for [`BinStr::push_template`].
#[derive(Debug, Clone, Copy)]
pub enum TemplateArg<'a> {
    /// Consumed by `%s`; appended verbatim (binary-safe).
    Bytes(&'a [u8]),
    /// Consumed by `%i`; rendered in signed decimal.
    Int(i64),
    /// Consumed by `%u`; rendered in unsigned decimal.
    Uint(u64),
}

impl fmt::Write for BinStr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl BinStr {
    /// Appends the rendering of a standard format invocation.
    ///
    /// Usually spelled through the [`cat_fmt!`](crate::cat_fmt) macro:
    ///
    /// ```rust
    /// use binstr::{BinStr, cat_fmt};
    ///
    /// let mut s = BinStr::from("sum=");
    /// cat_fmt!(s, "{}", 40 + 2);
    /// assert_eq!(s, "sum=42");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a formatting trait implementation among the arguments
    /// reports an error, the same way `format!` does. Writing into the
    /// buffer itself cannot fail.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        fmt::write(self, args).expect("a formatting trait implementation returned an error");
    }

    /// Appends a restricted positional template.
    ///
    /// Directives are single characters: `%s` consumes a
    /// [`TemplateArg::Bytes`], `%i` a [`TemplateArg::Int`], `%u` a
    /// [`TemplateArg::Uint`], and `%%` emits a literal percent. Any other
    /// byte after `%` is copied verbatim. Each expansion is computed
    /// directly from its typed argument, so no sizing retries are needed.
    ///
    /// ```rust
    /// use binstr::{BinStr, TemplateArg};
    ///
    /// let mut s = BinStr::new();
    /// s.push_template("%s=%i (%u%%)", &[
    ///     TemplateArg::Bytes(b"delta"),
    ///     TemplateArg::Int(-3),
    ///     TemplateArg::Uint(97),
    /// ]);
    /// assert_eq!(s, "delta=-3 (97%)");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a directive finds no argument left or an argument of the
    /// wrong kind — both contract violations.
    pub fn push_template(&mut self, template: impl AsRef<[u8]>, args: &[TemplateArg<'_>]) {
        let template = template.as_ref();
        self.reserve(template.len());
        let mut args = args.iter();
        let mut i = 0;
        while i < template.len() {
            let byte = template[i];
            if byte == b'%' && i + 1 < template.len() {
                i += 1;
                match template[i] {
                    b's' => match args.next() {
                        Some(TemplateArg::Bytes(v)) => self.push_bytes(v),
                        other => panic!("%s expects a bytes argument, got {other:?}"),
                    },
                    b'i' => match args.next() {
                        Some(TemplateArg::Int(v)) => self.push_fmt(format_args!("{v}")),
                        other => panic!("%i expects a signed argument, got {other:?}"),
                    },
                    b'u' => match args.next() {
                        Some(TemplateArg::Uint(v)) => self.push_fmt(format_args!("{v}")),
                        other => panic!("%u expects an unsigned argument, got {other:?}"),
                    },
                    // Covers %% and any unknown directive byte.
                    other => self.push_byte(other),
                }
            } else {
                self.push_byte(byte);
            }
            i += 1;
        }
    }

    /// Renders a signed 64-bit integer in decimal.
    ///
    /// ```rust
    /// use binstr::BinStr;
    ///
    /// assert_eq!(BinStr::from_int(-7), "-7");
    /// ```
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        let mut s = Self::new();
        s.push_fmt(format_args!("{value}"));
        s
    }
}

impl From<i64> for BinStr {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}
