//! Integration tests for named and decoder-driven conversion to UTF-8.

use charsniff::{
    to_utf8_with_charset_name, to_utf8_with_decoder, to_utf8_with_encoding, CodepageDecoder,
    Encoding, Error, Passthrough,
};

#[test]
fn test_gbk_by_name() {
    let out = to_utf8_with_charset_name(&[0xC4, 0xE3, 0xBA, 0xC3], "gbk").unwrap();
    assert_eq!(out, "\u{4f60}\u{597d}".as_bytes());
}

#[test]
fn test_gb18030_spelling_variants() {
    for name in ["gb18030", "gb-18030", "gb_18030", "gb 18030", "GB-18030"] {
        let out = to_utf8_with_charset_name(&[0xC4, 0xE3, 0xBA, 0xC3], name).unwrap();
        assert_eq!(out, "\u{4f60}\u{597d}".as_bytes(), "name {name:?}");
    }
}

#[test]
fn test_big5_by_name() {
    let out = to_utf8_with_charset_name(&[0xA4, 0xA4, 0xA4, 0xE5], "big5").unwrap();
    assert_eq!(out, "\u{4e2d}\u{6587}".as_bytes());
}

#[test]
fn test_shift_jis_by_name() {
    let out = to_utf8_with_charset_name(b"\x83n\x83\x8D\x81\x5B", "shift_jis").unwrap();
    assert_eq!(out, "\u{30cf}\u{30ed}\u{30fc}".as_bytes());
}

#[test]
fn test_euc_jp_by_name() {
    let out = to_utf8_with_charset_name(&[0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC], "euc-jp").unwrap();
    assert_eq!(out, "\u{65e5}\u{672c}\u{8a9e}".as_bytes());
}

#[test]
fn test_iso_2022_jp_by_name() {
    let out = to_utf8_with_charset_name(b"\x1B$B$3$s$K$A$O\x1B(B", "iso-2022-jp").unwrap();
    assert_eq!(
        out,
        "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}".as_bytes()
    );
}

#[test]
fn test_euc_kr_by_name() {
    let out = to_utf8_with_charset_name(&[0xBE, 0xC8, 0xB3, 0xE7], "euc-kr").unwrap();
    assert_eq!(out, "\u{c548}\u{b155}".as_bytes());
}

#[test]
fn test_iso_2022_kr_resolves_to_replacement() {
    // the WHATWG registry maps this label to its replacement machinery
    let out = to_utf8_with_charset_name(b"\x1B$)Cabc", "iso-2022-kr").unwrap();
    assert_eq!(out, "\u{fffd}".as_bytes());
}

#[test]
fn test_utf16_by_name_without_bom() {
    let out = to_utf8_with_charset_name(&[0x00, 0x41, 0x00, 0x42], "utf-16be").unwrap();
    assert_eq!(out, b"AB");
    let out = to_utf8_with_charset_name(&[0x41, 0x00, 0x42, 0x00], "utf-16le").unwrap();
    assert_eq!(out, b"AB");
}

#[test]
fn test_utf16_by_name_with_bom() {
    let out = to_utf8_with_charset_name(&[0xFE, 0xFF, 0x00, 0x41], "utf-16be").unwrap();
    assert_eq!(out, b"A");
}

#[test]
fn test_utf32_le_with_bom() {
    // the hand-rolled UTF-32 decoder ignores the BOM: it decodes as U+FEFF
    let input = [0xFF, 0xFE, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00];
    let out = to_utf8_with_charset_name(&input, "utf-32-le").unwrap();
    assert!(out.ends_with(b"A"));
    assert_eq!(out, "\u{feff}A".as_bytes());
}

#[test]
fn test_utf32_be_by_name() {
    let input = [0x00, 0x00, 0x00, 0x41, 0x00, 0x01, 0xF6, 0x00];
    let out = to_utf8_with_charset_name(&input, "utf-32-be").unwrap();
    assert_eq!(out, "A\u{1f600}".as_bytes());
}

#[test]
fn test_iso_8859_7_by_name() {
    // lowercase alpha through the registry decoder
    let out = to_utf8_with_charset_name(&[0xE1], "iso-8859-7").unwrap();
    assert_eq!(out, "\u{3b1}".as_bytes());
}

#[test]
fn test_windows_1256_by_name() {
    let out = to_utf8_with_charset_name(&[0xC8], "windows-1256").unwrap();
    assert_eq!(out, "\u{628}".as_bytes());
}

#[test]
fn test_invalid_name() {
    let err = to_utf8_with_charset_name(b"abc", "martian-5").unwrap_err();
    assert!(matches!(err, Error::InvalidName));
}

#[test]
fn test_wrong_decoder_on_truncated_utf32() {
    let err = to_utf8_with_charset_name(&[0x41, 0x00], "utf-32-le").unwrap_err();
    assert!(matches!(err, Error::WrongDecoder));
}

#[test]
fn test_identity_decoder_returns_input() {
    let input: Vec<u8> = (0u8..=255).collect();
    let out = to_utf8_with_decoder(&input, &mut Passthrough).unwrap();
    assert_eq!(out, input);
}

#[test]
fn test_windows_1251_with_decoder() {
    // "\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}" in windows-1251
    let input = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
    let out = to_utf8_with_decoder(&input, &mut CodepageDecoder::windows_1251()).unwrap();
    assert_eq!(out, "\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}".as_bytes());
}

#[test]
fn test_koi8_r_with_decoder() {
    // "\u{43c}\u{438}\u{440}" in KOI8-R
    let input = [0xCD, 0xC9, 0xD2];
    let out = to_utf8_with_decoder(&input, &mut CodepageDecoder::koi8_r()).unwrap();
    assert_eq!(out, "\u{43c}\u{438}\u{440}".as_bytes());
}

#[test]
fn test_iso_8859_2_with_decoder() {
    let out = to_utf8_with_decoder(&[0xB1], &mut CodepageDecoder::iso_8859_2()).unwrap();
    assert_eq!(out, "\u{105}".as_bytes());
}

#[test]
fn test_hand_rolled_and_registry_agree_on_windows_1251() {
    let input: Vec<u8> = (0xC0u8..=0xFF).collect();
    let hand_rolled = to_utf8_with_decoder(&input, &mut CodepageDecoder::windows_1251()).unwrap();
    let registry = to_utf8_with_charset_name(&input, "windows-1251").unwrap();
    assert_eq!(hand_rolled, registry);
}

#[test]
fn test_by_encoding_handle() {
    let encoding = charsniff::encoding_from_charset_name("big5").unwrap();
    assert!(matches!(encoding, Encoding::Registry(_)));
    let out = to_utf8_with_encoding(&[0xA4, 0xA4], &encoding).unwrap();
    assert_eq!(out, "\u{4e2d}".as_bytes());
}

#[test]
fn test_canonical_names() {
    for name in ["GBK", "GB18030", "Big5", "EUC-KR", "UTF-32BE", "UTF-32LE"] {
        let encoding = charsniff::encoding_from_charset_name(name).unwrap();
        assert_eq!(
            charsniff::charset_name_from_encoding(&encoding).unwrap(),
            name
        );
    }
}
