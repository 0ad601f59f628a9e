//! Base64 decoding into a caller-supplied buffer.

use std::ffi::CStr;

use crate::constants::{INVALID, PAD, SEXTETS};
use crate::{rejected, Base64Error};

/// Decodes standard, padded base64 `text` into `dest`.
///
/// Size `dest` with [`decoded_length`](crate::decoded_length) first. The
/// capacity is `dest.len()`.
///
/// # Returns
///
/// The number of bytes written to the start of `dest`.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the text is shorter than one group and
///   not empty.
/// - [`Base64Error::MalformedInput`] if padding appears anywhere but the end
///   of the last group, there are more than two pad characters, or a
///   truncated group follows the complete ones.
/// - [`Base64Error::InvalidCharacter`] for a byte outside the alphabet and padding.
/// - [`Base64Error::BufferTooSmall`] if the output does not fit in `dest`.
///   Bytes decoded before the overflow are left in place.
///
/// # Example
///
/// ```
/// use bounded_base64::{decode, decoded_length};
///
/// let text = b"aGVsbG8gd29ybGQ=";
/// let mut dest = vec![0u8; decoded_length(text).unwrap()];
/// let written = decode(text, &mut dest).unwrap();
/// assert_eq!(&dest[..written], b"hello world");
/// ```
pub fn decode(text: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    decode_groups(text, dest).map_err(|err| rejected(err, text.len()))
}

/// Same as [`decode`], with the length taken from a NUL-terminated string.
pub fn decode_c(text: &CStr, dest: &mut [u8]) -> Result<usize, Base64Error> {
    decode(text.to_bytes(), dest)
}

fn decode_groups(text: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    let length = text.len();
    if length == 0 {
        return Ok(0);
    }
    if !length.is_multiple_of(4) {
        // Past the first group, the leftover is a broken final group.
        return Err(if length < 4 {
            Base64Error::InvalidLength
        } else {
            Base64Error::MalformedInput
        });
    }

    let mut sink = Sink::new(dest);
    let (body, last) = text.split_at(length - 4);

    for (i, quad) in body.chunks_exact(4).enumerate() {
        let offset = i * 4;
        let s0 = sextet(quad[0], offset)?;
        let s1 = sextet(quad[1], offset + 1)?;
        let s2 = sextet(quad[2], offset + 2)?;
        let s3 = sextet(quad[3], offset + 3)?;
        sink.push((s0 << 2) | (s1 >> 4))?;
        sink.push((s1 << 4) | (s2 >> 2))?;
        sink.push((s2 << 6) | s3)?;
    }

    let pads = last.iter().rev().take_while(|&&c| c == PAD).count();
    if pads > 2 {
        return Err(Base64Error::MalformedInput);
    }
    let symbols = &last[..4 - pads];
    let mut s = [0u8; 4];
    for (j, &c) in symbols.iter().enumerate() {
        s[j] = sextet(c, body.len() + j)?;
    }

    sink.push((s[0] << 2) | (s[1] >> 4))?;
    if symbols.len() > 2 {
        sink.push((s[1] << 4) | (s[2] >> 2))?;
    }
    if symbols.len() > 3 {
        sink.push((s[2] << 6) | s[3])?;
    }

    Ok(sink.len)
}

#[inline]
fn sextet(byte: u8, position: usize) -> Result<u8, Base64Error> {
    match SEXTETS[byte as usize] {
        INVALID if byte == PAD => Err(Base64Error::MalformedInput),
        INVALID => Err(Base64Error::InvalidCharacter { byte, position }),
        s => Ok(s),
    }
}

/// Bounds-checked writer over the destination slice.
struct Sink<'a> {
    dest: &'a mut [u8],
    len: usize,
}

impl<'a> Sink<'a> {
    fn new(dest: &'a mut [u8]) -> Self {
        Self { dest, len: 0 }
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), Base64Error> {
        let capacity = self.dest.len();
        let slot = self
            .dest
            .get_mut(self.len)
            .ok_or(Base64Error::BufferTooSmall { capacity })?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }
}
