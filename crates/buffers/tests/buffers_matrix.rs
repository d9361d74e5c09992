//! Hex and text transcoding matrix for the buffers crate.

use cryptobuf_buffers::{
    ct_eq, decode_hex, decode_utf16be, decode_utf16le, decode_utf8, encode_hex_lower,
    encode_hex_upper, utf16be, utf16le, utf8, BufferError,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

#[test]
fn hex_example_scenario() {
    let bytes = [0x00, 0xFF, 0x10];
    assert_eq!(encode_hex_lower(&bytes), "00ff10");
    assert_eq!(decode_hex("00ff10").unwrap(), bytes);
}

#[test]
fn hex_upper_and_lower_decode_to_same_bytes() {
    let lower = decode_hex("deadbeef").unwrap();
    let upper = decode_hex("DEADBEEF").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn hex_rejects_every_non_hex_ascii_char() {
    for c in (0u8..128).map(char::from) {
        if c.is_ascii_hexdigit() {
            continue;
        }
        let input = format!("0{}", c);
        assert!(
            matches!(decode_hex(&input), Err(BufferError::InvalidHexDigit { index: 1, .. })),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn hex_odd_length_is_reported_before_bad_digits() {
    assert_eq!(decode_hex("zzz"), Err(BufferError::OddHexLength { len: 3 }));
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn utf16_byte_orders_are_swapped_images() {
    let text = "h\u{e9}llo \u{65E5}\u{672C} \u{1F600}";
    let le = utf16le(text);
    let be = utf16be(text);
    assert_eq!(le.len(), be.len());
    for (l, b) in le.chunks_exact(2).zip(be.chunks_exact(2)) {
        assert_eq!(l[0], b[1]);
        assert_eq!(l[1], b[0]);
    }
}

#[test]
fn utf16_empty() {
    assert!(utf16le("").is_empty());
    assert_eq!(decode_utf16be(&[]).unwrap(), "");
}

#[test]
fn utf8_overlong_encoding_is_rejected() {
    assert!(decode_utf8(&[0xC0, 0x80]).is_err());
}

#[test]
fn utf8_encoded_surrogate_is_rejected() {
    assert!(decode_utf8(&[0xED, 0xA0, 0x80]).is_err());
}

#[test]
fn ct_eq_matches_slice_eq() {
    let cases: [(&[u8], &[u8]); 4] = [
        (b"", b""),
        (b"abc", b"abc"),
        (b"abc", b"abd"),
        (b"ab", b"abc"),
    ];
    for (a, b) in cases {
        assert_eq!(ct_eq(a, b), a == b);
    }
}

proptest! {
    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(decode_hex(&encode_hex_lower(&bytes)).unwrap(), bytes.clone());
        prop_assert_eq!(decode_hex(&encode_hex_upper(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn text_roundtrip(text in any::<String>()) {
        prop_assert_eq!(decode_utf8(&utf8(&text)).unwrap(), text.clone());
        prop_assert_eq!(decode_utf16le(&utf16le(&text)).unwrap(), text.clone());
        prop_assert_eq!(decode_utf16be(&utf16be(&text)).unwrap(), text);
    }
}
