//! The tagged value model and its accessor/mutator contract.
//!
//! [`Value`] is the sum type a successful parse produces. The payload of
//! each variant is valid by construction — there is no discriminant to
//! keep in sync with an overlapping union. String payloads are owned byte
//! strings ([`BString`]), length-delimited and free to contain NUL bytes.

use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};

/// The discriminant of a [`Value`], as reported by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    True,
    False,
    Number,
    String,
}

/// One JSON scalar value.
///
/// `true` and `false` are distinct variants rather than a `Boolean(bool)`
/// so that `kind()` is exactly the five-way discriminant the accessors
/// are specified against.
///
/// # Examples
///
/// ```
/// use jsonatom::{Value, ValueKind};
///
/// let mut v = Value::default();
/// assert_eq!(v.kind(), ValueKind::Null);
///
/// v.set_string(b"has\0nul");
/// assert_eq!(v.as_bytes().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    True,
    False,
    Number(f64),
    String(BString),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::String(BString::from(v))
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::String(BString::from(v))
    }
}

impl Value {
    /// Returns the discriminant of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::True => ValueKind::True,
            Self::False => ValueKind::False,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Reads the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is [`True`] or [`False`]. Reading through
    /// the wrong tag is a programming error, not a recoverable one.
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn as_bool(&self) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            other => panic!("as_bool on a {:?} value", other.kind()),
        }
    }

    /// Reads the number payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("as_number on a {:?} value", other.kind()),
        }
    }

    /// Borrows the string payload: exactly the decoded bytes, with no
    /// residual escape sequences and no NUL terminator counted.
    ///
    /// # Panics
    ///
    /// Panics unless the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_bytes(&self) -> &BStr {
        match self {
            Self::String(s) => s.as_bstr(),
            other => panic!("as_bytes on a {:?} value", other.kind()),
        }
    }

    /// Resets the value to [`Null`], releasing any owned payload.
    ///
    /// [`Null`]: Value::Null
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Overwrites the value with a boolean. The previous payload, if any,
    /// is released first.
    pub fn set_bool(&mut self, b: bool) {
        *self = Self::from(b);
    }

    /// Overwrites the value with a number. The previous payload, if any,
    /// is released first.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Overwrites the value with a copy of `bytes`, owned independently of
    /// the source buffer's lifetime. Embedded NULs are preserved. The
    /// previous payload, if any, is released first.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Self::String(BString::from(bytes));
    }
}
