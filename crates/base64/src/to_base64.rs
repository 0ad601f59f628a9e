//! Allocating encoder.

use crate::{encode, encoded_capacity};

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use bounded_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_capacity(uint8.len())];
    let len = encode(uint8, &mut buf);
    buf[..len].iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_every_byte_value() {
        const EXPECTED: &str = concat!(
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4v",
            "MDEyMzQ1Njc4OTo7PD0+P0BBQkNERUZHSElKS0xNTk9QUVJTVFVWV1hZWltcXV5f",
            "YGFiY2RlZmdoaWprbG1ub3BxcnN0dXZ3eHl6e3x9fn+AgYKDhIWGh4iJiouMjY6P",
            "kJGSk5SVlpeYmZqbnJ2en6ChoqOkpaanqKmqq6ytrq+wsbKztLW2t7i5uru8vb6/",
            "wMHCw8TFxsfIycrLzM3Oz9DR0tPU1dbX2Nna29zd3t/g4eLj5OXm5+jp6uvs7e7v",
            "8PHy8/T19vf4+fr7/P3+/w==",
        );
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(to_base64(&data), EXPECTED);
    }
}
