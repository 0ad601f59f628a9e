//! Tests for fixed-capacity base64 encoding (encode).

use std::ffi::CStr;

use bounded_base64::{encode, encoded_capacity, encoded_length, to_base64, TERMINATOR};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = to_base64(&blob);

        let mut dest = vec![0u8; encoded_capacity(blob.len())];
        let dupe = blob.clone();
        let len = encode(&blob, &mut dest);
        assert_eq!(dupe, blob);
        assert_eq!(len, encoded_length(blob.len()));
        assert_eq!(&dest[..len], expected.as_bytes());
        assert_eq!(dest[len], TERMINATOR);
    }
}

#[test]
fn probe_then_fill() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut rng = rand::thread_rng();
        let capacity = rng.gen_range(0..encoded_capacity(blob.len()));

        let mut small = vec![0x5a; capacity];
        let required = encode(&blob, &mut small);
        assert!(required >= small.len());
        assert_eq!(required, encoded_length(blob.len()));
        assert!(small.iter().all(|&b| b == 0x5a), "probe must not write");

        let mut dest = vec![0u8; required + 1];
        let len = encode(&blob, &mut dest);
        assert!(len < dest.len());
        assert_eq!(len, required);
    }
}

#[test]
fn empty_input() {
    let mut dest = vec![0xffu8; 100];
    let len = encode(b"", &mut dest);
    assert_eq!(len, 0);
    assert_eq!(dest[0], TERMINATOR);
}

#[test]
fn exact_content_size_is_not_enough() {
    let mut dest = [0u8; 8];
    assert_eq!(encode(b"hello", &mut dest), 8);
    assert_eq!(dest, [0u8; 8]);
}

#[test]
fn output_reads_as_c_string() {
    let mut dest = [0u8; 16];
    let len = encode(b"hello", &mut dest);
    let text = CStr::from_bytes_with_nul(&dest[..=len]).unwrap();
    assert_eq!(text, c"aGVsbG8=");
}
