//! Base64 encoding into a caller-supplied buffer.

use crate::constants::{ALPHABET_BYTES, PAD, TERMINATOR};
use crate::encoded_length;

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i` holds the characters for the two sextets packed in the 12-bit index `i`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Encodes `input` into `dest` using the standard alphabet with `=` padding.
///
/// The capacity is `dest.len()`, which must fit the encoding plus a trailing
/// [`TERMINATOR`] (see [`encoded_capacity`](crate::encoded_capacity)).
///
/// # Returns
///
/// On success, the number of characters written, not counting the terminator.
/// The returned value is then strictly less than `dest.len()`.
///
/// If `dest` is too small, nothing is written and the required
/// [`encoded_length`] is returned instead. The caller can tell the two cases
/// apart by checking `written >= dest.len()` and retry with a larger buffer.
///
/// # Example
///
/// ```
/// use bounded_base64::{encode, encoded_capacity};
///
/// let mut probe = [0u8; 4];
/// let required = encode(b"hello", &mut probe);
/// assert!(required >= probe.len());
///
/// let mut dest = vec![0u8; encoded_capacity(5)];
/// let written = encode(b"hello", &mut dest);
/// assert_eq!(&dest[..written], b"aGVsbG8=");
/// assert_eq!(dest[written], 0);
/// ```
pub fn encode(input: &[u8], dest: &mut [u8]) -> usize {
    let size = encoded_length(input.len());
    if size >= dest.len() {
        #[cfg(feature = "tracing")]
        tracing::trace!(required = size, capacity = dest.len(), "encode capacity probe");
        return size;
    }

    let mut chunks = input.chunks_exact(3);
    let mut offset = 0;
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0], chunk[1], chunk[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
        dest[offset + 2..offset + 4].copy_from_slice(&TABLE2[v2]);
        offset += 4;
    }

    match *chunks.remainder() {
        [o1] => {
            let v1 = (o1 as usize) << 4;
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2] = PAD;
            dest[offset + 3] = PAD;
            offset += 4;
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2] = ALPHABET_BYTES[v2];
            dest[offset + 3] = PAD;
            offset += 4;
        }
        _ => {}
    }

    dest[offset] = TERMINATOR;
    offset
}
