//! Output sizing and structural validation for the decoder.

use std::ffi::CStr;

use crate::constants::{is_symbol, PAD};
use crate::{rejected, Base64Error};

/// Returns the exact number of bytes [`decode`](crate::decode) produces for `text`.
///
/// The text is only checked for layout: a run of alphabet symbols followed by
/// at most two `=` characters, covering the whole input.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// - [`Base64Error::MalformedInput`] if any byte falls outside the
///   symbols-then-padding layout, or there are more than two pad characters.
///
/// # Example
///
/// ```
/// use bounded_base64::{decoded_length, Base64Error};
///
/// assert_eq!(decoded_length(b"").unwrap(), 0);
/// assert_eq!(decoded_length(b"Zm9vYg==").unwrap(), 4);
/// assert_eq!(decoded_length(b"Zm9vY"), Err(Base64Error::InvalidLength));
/// ```
pub fn decoded_length(text: &[u8]) -> Result<usize, Base64Error> {
    let length = text.len();
    if length == 0 {
        return Ok(0);
    }
    if !length.is_multiple_of(4) {
        return Err(rejected(Base64Error::InvalidLength, length));
    }

    let symbols = text.iter().take_while(|&&c| is_symbol(c)).count();
    let pads = text[symbols..].iter().take_while(|&&c| c == PAD).count();
    if symbols + pads != length || pads > 2 {
        return Err(rejected(Base64Error::MalformedInput, length));
    }

    Ok(length / 4 * 3 - pads)
}

/// Same as [`decoded_length`], with the length taken from a NUL-terminated string.
///
/// # Example
///
/// ```
/// use bounded_base64::decoded_length_c;
///
/// assert_eq!(decoded_length_c(c"Zm8=").unwrap(), 2);
/// ```
pub fn decoded_length_c(text: &CStr) -> Result<usize, Base64Error> {
    decoded_length(text.to_bytes())
}
