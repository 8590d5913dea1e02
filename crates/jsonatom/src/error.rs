use thiserror::Error;

/// The closed taxonomy of parse failures.
///
/// Each kind is produced by exactly one condition; the parser returns the
/// first one it detects and never recovers past it. These are values for
/// the caller to branch on — contract violations on a [`Value`] accessor
/// are a panic, not a `ParseError`.
///
/// [`Value`]: crate::Value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or all-whitespace where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// The lookahead byte matches no grammar production, or a matched
    /// production's body is malformed (bad literal, malformed number).
    #[error("invalid value")]
    InvalidValue,
    /// A valid root value parsed, but non-whitespace bytes remain after it.
    #[error("unexpected bytes after the root value")]
    RootNotSingular,
    /// A grammatically valid numeral whose magnitude overflows `f64`.
    #[error("number out of double range")]
    NumberTooBig,
    /// A string's closing quote was never found before the input ended.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by a byte outside the accepted escape set.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    /// A raw (unescaped) control byte appeared inside a string literal.
    #[error("invalid raw character in string")]
    InvalidStringChar,
}
