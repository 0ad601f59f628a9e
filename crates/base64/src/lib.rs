//! Base64 encoding and decoding into caller-sized buffers.
//!
//! This crate implements the RFC 4648 standard alphabet (`+/`, `=` padding):
//! - [`encoded_length`] / [`decoded_length`] size the output before allocating
//! - [`encode`] writes into a fixed-capacity buffer and, when it does not fit,
//!   returns the required size without writing anything
//! - [`decode`] validates the text group by group and refuses to write past
//!   the end of the destination
//! - [`to_base64`] / [`from_base64`] allocate the output for you
//!
//! # Example
//!
//! ```
//! use bounded_base64::{decode, decoded_length, encode, encoded_capacity};
//!
//! let data = b"hello world";
//! let mut text = vec![0u8; encoded_capacity(data.len())];
//! let n = encode(data, &mut text);
//! assert_eq!(&text[..n], b"aGVsbG8gd29ybGQ=");
//!
//! let mut bytes = vec![0u8; decoded_length(&text[..n]).unwrap()];
//! let m = decode(&text[..n], &mut bytes).unwrap();
//! assert_eq!(&bytes[..m], data);
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod decoded_length;
mod encode;
mod encoded_length;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, TERMINATOR};
pub use decode::{decode, decode_c};
pub use decoded_length::{decoded_length, decoded_length_c};
pub use encode::encode;
pub use encoded_length::{encoded_capacity, encoded_length};
pub use from_base64::from_base64;
pub use to_base64::to_base64;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The text length is not a positive multiple of 4.
    #[error("base64 text length must be a multiple of 4")]
    InvalidLength,
    /// The text does not follow the symbols-then-padding layout.
    #[error("malformed base64 text")]
    MalformedInput,
    /// A byte outside the alphabet and padding appears where a symbol is expected.
    #[error("invalid base64 character {byte:#04x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },
    /// The destination cannot hold the decoded output.
    #[error("destination buffer too small (capacity {capacity})")]
    BufferTooSmall { capacity: usize },
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
#[inline]
pub(crate) fn rejected(err: Base64Error, length: usize) -> Base64Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, length, "base64 text rejected");
    err
}
