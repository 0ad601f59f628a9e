//! Output sizing for the encoder.

/// Returns the number of characters [`encode`](crate::encode) produces for
/// `length` input bytes, not counting the terminator.
///
/// Lengths whose encoding does not fit in a `usize` saturate to `usize::MAX`.
/// No buffer can hold that many bytes, so [`encode`](crate::encode) reports
/// such inputs as a capacity shortfall.
///
/// # Example
///
/// ```
/// use bounded_base64::encoded_length;
///
/// assert_eq!(encoded_length(0), 0);
/// assert_eq!(encoded_length(1), 4);
/// assert_eq!(encoded_length(4), 8);
/// ```
pub const fn encoded_length(length: usize) -> usize {
    length.div_ceil(3).saturating_mul(4)
}

/// Returns the destination capacity [`encode`](crate::encode) needs for
/// `length` input bytes: the encoded characters plus the terminator.
pub const fn encoded_capacity(length: usize) -> usize {
    encoded_length(length).saturating_add(1)
}
