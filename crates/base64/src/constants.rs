/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Written by [`encode`](crate::encode) right after the last encoded character.
pub const TERMINATOR: u8 = 0;

/// Marks bytes that are not part of the alphabet in [`SEXTETS`].
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup: byte value to its 6-bit alphabet index, or [`INVALID`].
pub(crate) static SEXTETS: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns `true` if `byte` is one of the 64 alphabet symbols (padding excluded).
#[inline]
pub(crate) fn is_symbol(byte: u8) -> bool {
    SEXTETS[byte as usize] != INVALID
}
