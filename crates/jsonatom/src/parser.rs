//! The scanner and grammar engine.
//!
//! One [`parse`] call owns one [`Cursor`]: a borrowed view of the input,
//! an advancing byte offset, and a private scratch stack for string
//! decoding. End-of-input is an explicit bounds check everywhere — there
//! is no NUL sentinel, because string payloads may legally contain NUL.
//!
//! Control flow is the classic single-pass shape: skip whitespace,
//! dispatch on the lookahead byte to a sub-parser, skip trailing
//! whitespace, and reject anything left over as [`RootNotSingular`].
//! Sub-parsers return their [`ParseError`] immediately on detection; the
//! `Result` plumbing guarantees a caller never sees a value alongside an
//! error.
//!
//! [`RootNotSingular`]: ParseError::RootNotSingular

use bstr::BString;

use crate::{error::ParseError, scratch::Scratch, value::Value};

/// Parses exactly one JSON scalar value from `input`.
///
/// Leading and trailing whitespace (space, tab, CR, LF — nothing else)
/// is permitted around the value; any other remaining byte makes the
/// whole document [`RootNotSingular`], even though the value itself
/// parsed. The returned [`Value`] is fully owned by the caller.
///
/// # Errors
///
/// One of the seven [`ParseError`] kinds; see each variant for the exact
/// trigger condition.
///
/// # Examples
///
/// ```
/// use jsonatom::{parse, ParseError, Value};
///
/// assert_eq!(parse(b"null"), Ok(Value::Null));
/// assert_eq!(parse(b"true false"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let value = cursor.parse_value()?;
    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(ParseError::RootNotSingular);
    }
    debug_assert!(cursor.scratch.is_empty());
    Ok(value)
}

/// Per-parse state: the unread input and the string scratch stack.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    scratch: Scratch,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            scratch: Scratch::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::True),
            Some(b'f') => self.parse_literal(b"false", Value::False),
            Some(b'"') => self.parse_string(),
            Some(_) => self.parse_number(),
        }
    }

    /// Matches one fixed token. A deviation anywhere in the token,
    /// including running past its end into more letters ("truee"), is
    /// `InvalidValue`; no partial-match state persists.
    fn parse_literal(
        &mut self,
        literal: &'static [u8],
        value: Value,
    ) -> Result<Value, ParseError> {
        if !self.rest().starts_with(literal) {
            return Err(ParseError::InvalidValue);
        }
        if let Some(&next) = self.input.get(self.pos + literal.len()) {
            if next.is_ascii_alphanumeric() {
                return Err(ParseError::InvalidValue);
            }
        }
        self.pos += literal.len();
        Ok(value)
    }

    /// `number = ["-"] int [frac] [exp]` with `int = "0" | digit1-9
    /// digit*`, `frac = "." digit+`, `exp = ("e"|"E") ["+"|"-"] digit+`.
    ///
    /// The grammar matcher first measures the numeral's span without
    /// moving the cursor; exactly that substring is then converted, and
    /// the cursor advances only if the conversion stays in `f64` range.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let mut p = self.pos;
        if self.input.get(p) == Some(&b'-') {
            p += 1;
        }
        match self.input.get(p) {
            Some(b'0') => {
                p += 1;
                // "0" takes no further int digits: "01" is malformed.
                if matches!(self.input.get(p), Some(b'0'..=b'9')) {
                    return Err(ParseError::InvalidValue);
                }
            }
            Some(b'1'..=b'9') => {
                p += 1;
                while matches!(self.input.get(p), Some(b'0'..=b'9')) {
                    p += 1;
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if self.input.get(p) == Some(&b'.') {
            p += 1;
            if !matches!(self.input.get(p), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(self.input.get(p), Some(b'0'..=b'9')) {
                p += 1;
            }
        }
        if matches!(self.input.get(p), Some(b'e' | b'E')) {
            p += 1;
            if matches!(self.input.get(p), Some(b'+' | b'-')) {
                p += 1;
            }
            if !matches!(self.input.get(p), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(self.input.get(p), Some(b'0'..=b'9')) {
                p += 1;
            }
        }

        // The span is all ASCII by construction.
        let lexeme =
            core::str::from_utf8(&self.input[start..p]).map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.pos = p;
        Ok(Value::Number(n))
    }

    /// Scans a string literal whose opening quote is the current byte.
    ///
    /// Accepted bytes accumulate in the scratch stack, never in the
    /// output value, so every error path can discard exactly the bytes
    /// produced so far by unwinding to the mark taken here.
    fn parse_string(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        let head = self.scratch.mark();
        loop {
            // Bulk-copy the run up to the next quote, escape, or control
            // byte. Bytes >= 0x20, including >= 0x80, pass through raw.
            let run = self.pos;
            while let Some(&b) = self.input.get(self.pos) {
                if b < 0x20 || b == b'"' || b == b'\\' {
                    break;
                }
                self.pos += 1;
            }
            self.scratch.push_slice(&self.input[run..self.pos]);

            match self.peek() {
                None => {
                    self.scratch.unwind(head);
                    return Err(ParseError::MissQuotationMark);
                }
                Some(b'"') => {
                    self.pos += 1;
                    let bytes = self.scratch.take_from(head);
                    return Ok(Value::String(BString::from(bytes)));
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let Some(esc) = self.peek() else {
                        // A trailing backslash still means the closing
                        // quote was never found.
                        self.scratch.unwind(head);
                        return Err(ParseError::MissQuotationMark);
                    };
                    self.pos += 1;
                    let decoded = match esc {
                        b'"' | b'\\' | b'/' => esc,
                        b'b' => 0x08,
                        b'f' => 0x0C,
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        _ => {
                            self.scratch.unwind(head);
                            return Err(ParseError::InvalidStringEscape);
                        }
                    };
                    self.scratch.push(decoded);
                }
                // Only a raw control byte can stop the run scan here.
                Some(_) => {
                    self.scratch.unwind(head);
                    return Err(ParseError::InvalidStringChar);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, ParseError};

    #[test]
    fn number_sub_parse_advances_exactly_past_the_span() {
        let mut c = Cursor::new(b"1.5e2abc");
        let v = c.parse_value().unwrap();
        assert_eq!(v.as_number(), 150.0);
        assert_eq!(c.pos, 5);
    }

    #[test]
    fn cursor_stays_put_when_number_overflows() {
        let mut c = Cursor::new(b"1e1000");
        assert_eq!(c.parse_value(), Err(ParseError::NumberTooBig));
        assert_eq!(c.pos, 0);
    }

    #[test]
    fn scratch_unwinds_after_failed_string_parse() {
        let input = b"\"\\q\" \"ok\"";
        let mut c = Cursor::new(input);
        assert_eq!(c.parse_value(), Err(ParseError::InvalidStringEscape));
        assert!(c.scratch.is_empty());

        // Reuse the same cursor (and thus the same scratch stack) for the
        // second string; nothing from the failed attempt may leak in.
        c.pos = 5;
        let v = c.parse_value().unwrap();
        assert_eq!(v.as_bytes(), "ok");
    }

    #[test]
    fn failed_control_byte_leaves_no_partial_bytes() {
        let mut c = Cursor::new(b"\"ab\x01\"");
        assert_eq!(c.parse_value(), Err(ParseError::InvalidStringChar));
        assert!(c.scratch.is_empty());
    }
}
