//! Allocating decoder.

use crate::{decode, decoded_length, Base64Error};

/// Decodes a standard base64 string to bytes.
///
/// The output is allocated at exactly [`decoded_length`] bytes before decoding.
///
/// # Example
///
/// ```
/// use bounded_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let text = encoded.as_bytes();
    let mut buf = vec![0u8; decoded_length(text)?];
    let len = decode(text, &mut buf)?;
    buf.truncate(len);
    Ok(buf)
}
