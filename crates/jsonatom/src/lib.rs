//! A strict, single-pass recursive-descent parser for one JSON scalar
//! value: `null`, `true`, `false`, a number, or a string.
//!
//! The input is an in-memory byte slice and the output is an owned
//! [`Value`]; string payloads are byte strings that may contain embedded
//! NUL bytes. The document must contain exactly one value surrounded by
//! nothing but JSON whitespace — anything else is one of the seven
//! [`ParseError`] kinds.
//!
//! ```rust
//! use jsonatom::{parse, Value, ValueKind};
//!
//! let v = parse(b" \"ab\\n\\\"cd\" ").unwrap();
//! assert_eq!(v.kind(), ValueKind::String);
//! assert_eq!(v.as_bytes(), "ab\n\"cd");
//!
//! assert_eq!(parse(b"1.5e2").unwrap(), Value::Number(150.0));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod scratch;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse;
pub use value::{Value, ValueKind};
