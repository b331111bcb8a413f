//! Integration tests for the detection arbiter.
//!
//! Scenarios that depend on exact detector labels and confidences run
//! against a scripted detector; the default chardetng-backed path is
//! exercised where its verdict is stable.

use std::borrow::Cow;

use charsniff::{
    detect_all, detect_all_with, detect_and_convert_to_utf8, detect_and_convert_to_utf8_with,
    detect_encoding, is_valid_gbk, is_valid_utf8, Candidate, Detector, Result,
};

/// A detector that replays a fixed candidate list.
struct Scripted(Vec<Candidate>);

impl Detector for Scripted {
    fn detect(&self, _content: &[u8]) -> Result<Vec<Candidate>> {
        Ok(self.0.clone())
    }
}

fn scripted(charset: &str, confidence: u8) -> Scripted {
    Scripted(vec![Candidate {
        charset: charset.to_string(),
        language: String::new(),
        confidence,
    }])
}

#[test]
fn test_ascii_detects_and_converts_unchanged() {
    let (out, result) = detect_and_convert_to_utf8(b"ABC").unwrap();
    assert_eq!(&*out, b"ABC");
    assert!(result.confidence > 0);
}

#[test]
fn test_utf16be_bom_converts() {
    let (out, result) = detect_and_convert_to_utf8(&[0xFE, 0xFF, 0x00, 0x41]).unwrap();
    assert_eq!(&*out, b"A");
    assert_eq!(result.charset, "UTF-16BE");
}

#[test]
fn test_utf16le_bom_converts() {
    let (out, result) = detect_and_convert_to_utf8(&[0xFF, 0xFE, 0x41, 0x00]).unwrap();
    assert_eq!(&*out, b"A");
    assert_eq!(result.charset, "UTF-16LE");
}

#[test]
fn test_valid_utf8_returned_borrowed() {
    // covers plain ASCII and multi-byte UTF-8 text
    let inputs: &[&[u8]] = &[
        "\u{4f60}\u{597d}\u{4e16}\u{754c}".as_bytes(),
        "\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}, world".as_bytes(),
    ];
    for &input in inputs {
        assert!(is_valid_utf8(input));
        let (out, _) = detect_and_convert_to_utf8(input).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, input);
    }
}

#[test]
fn test_gbk_detected_and_converted() {
    // GBK for "\u{4f60}\u{597d}"; the detector reports the GB family name
    let input = [0xC4, 0xE3, 0xBA, 0xC3];
    assert!(is_valid_gbk(&input));
    let (out, result) = detect_and_convert_to_utf8_with(&scripted("GB-18030", 95), &input).unwrap();
    assert_eq!(&*out, &[0xE4, 0xBD, 0xA0, 0xE5, 0xA5, 0xBD]);
    assert_eq!(result.charset, "GB-18030");
    assert_eq!(result.confidence, 95);
    assert!(result.convertible);
}

#[test]
fn test_gbk_guard_overrides_confidence() {
    // UTF-16 content misreported as GB18030: the GBK validator rejects,
    // the confidence drops to the fixed low-trust value, and conversion
    // still proceeds with the detector's choice
    let input = [0xFF, 0xFE, 0x41, 0x00];
    assert!(!is_valid_gbk(&input));
    let (out, result) = detect_and_convert_to_utf8_with(&scripted("GB18030", 95), &input).unwrap();
    assert_eq!(result.confidence, 20);
    assert!(result.convertible);
    assert!(is_valid_utf8(&out));
}

#[test]
fn test_gbk_guard_applies_to_every_family_label() {
    let input = [0xFF, 0xFE, 0x41, 0x00];
    for label in ["gb18030", "GB-18030", "gb 18030", "GBK", "gb2312"] {
        let (_, result) = detect_and_convert_to_utf8_with(&scripted(label, 95), &input).unwrap();
        assert_eq!(result.confidence, 20, "label {label:?}");
    }
}

#[test]
fn test_guard_does_not_touch_other_charsets() {
    let input = [0xFF, 0xFE, 0x41, 0x00];
    let (_, result) = detect_and_convert_to_utf8_with(&scripted("windows-1251", 95), &input).unwrap();
    assert_eq!(result.confidence, 95);
}

#[test]
fn test_utf8_label_returns_input_unchanged() {
    let input = &[0xE4, 0xBD, 0xA0];
    for label in ["utf-8", "UTF-8", "utf8"] {
        let (out, _) = detect_and_convert_to_utf8_with(&scripted(label, 90), input).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)), "label {label:?}");
    }
}

#[test]
fn test_unknown_sentinel_returns_input_unchanged() {
    let input = [0x00, 0xFF];
    let (out, result) = detect_and_convert_to_utf8_with(&scripted("unknown", 10), &input).unwrap();
    assert_eq!(&*out, &input);
    assert!(!result.convertible);
}

#[test]
fn test_unconvertible_candidate_returns_input_unchanged() {
    let input = [0x82, 0x31];
    let (out, result) =
        detect_and_convert_to_utf8_with(&scripted("no-such-charset", 60), &input).unwrap();
    assert_eq!(&*out, &input);
    assert!(!result.convertible);
    assert_eq!(result.charset, "no-such-charset");
}

#[test]
fn test_detect_all_enriches_and_sorts() {
    let detector = Scripted(vec![
        Candidate {
            charset: "Big5".to_string(),
            language: "zh".to_string(),
            confidence: 40,
        },
        Candidate {
            charset: "not-a-charset".to_string(),
            language: String::new(),
            confidence: 90,
        },
        Candidate {
            charset: "GB-18030".to_string(),
            language: "zh".to_string(),
            confidence: 70,
        },
    ]);
    let results = detect_all_with(&detector, &[0xA4, 0xA4]).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].charset, "not-a-charset");
    assert!(!results[0].convertible);
    assert_eq!(results[1].charset, "GB-18030");
    assert!(results[1].convertible);
    assert_eq!(results[2].language, "zh");
}

#[test]
fn test_detect_encoding_takes_top_candidate() {
    let detector = Scripted(vec![
        Candidate {
            charset: "windows-1251".to_string(),
            language: "ru".to_string(),
            confidence: 30,
        },
        Candidate {
            charset: "KOI8-R".to_string(),
            language: "ru".to_string(),
            confidence: 85,
        },
    ]);
    let result = charsniff::detect_encoding_with(&detector, &[0xC1]).unwrap();
    assert_eq!(result.charset, "KOI8-R");
    assert_eq!(result.confidence, 85);
}

#[test]
fn test_default_detector_on_legacy_cyrillic() {
    // Windows-1251 text long enough for a stable statistical verdict
    let input: Vec<u8> = vec![
        0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2, 0x20, 0xEC, 0xE8, 0xF0, 0x21, 0x20, 0xCA, 0xE0, 0xEA,
        0x20, 0xE4, 0xE5, 0xEB, 0xE0, 0x3F,
    ];
    let (out, result) = detect_and_convert_to_utf8(&input).unwrap();
    assert!(result.convertible);
    assert!(is_valid_utf8(&out));
    assert_ne!(&*out, &input[..]);
}

#[test]
fn test_detect_all_reports_bom_candidates() {
    let results = detect_all(&[0xFE, 0xFF, 0x00, 0x41]).unwrap();
    assert_eq!(results[0].charset, "UTF-16BE");
    assert_eq!(results[0].confidence, 100);
    assert!(results[0].convertible);
}

#[test]
fn test_detect_encoding_reports_utf8() {
    let result = detect_encoding("\u{4f60}\u{597d}\u{4e16}\u{754c}".as_bytes()).unwrap();
    assert_eq!(result.charset, "UTF-8");
}
