//! charsniff: charset detection and conversion to UTF-8
//!
//! Hand bytes in, get UTF-8 bytes and a verdict back. Detection combines a
//! statistical detector's ranked guesses with exact byte-sequence validators
//! for the encodings the detector most often confuses (notably GBK vs
//! UTF-16), then pumps the input through a streaming decoder.
//!
//! # Quick Start
//!
//! ```no_run
//! use charsniff::detect_and_convert_to_utf8;
//!
//! let content: &[u8] = &[0xC4, 0xE3, 0xBA, 0xC3];
//! let (utf8, result) = detect_and_convert_to_utf8(content).unwrap();
//!
//! println!("charset: {}", result.charset);
//! println!("confidence: {}", result.confidence);
//! println!("text: {}", String::from_utf8_lossy(&utf8));
//! ```
//!
//! # Converting with a known charset
//!
//! ```
//! use charsniff::to_utf8_with_charset_name;
//!
//! let utf8 = to_utf8_with_charset_name(&[0xCF, 0xF0], "windows-1251").unwrap();
//! assert_eq!(utf8, "\u{41f}\u{440}".as_bytes());
//! ```
//!
//! # Design
//!
//! - Every operation is synchronous and touches only call-local state plus
//!   immutable program-wide tables, so the public functions are safe to call
//!   from any number of threads.
//! - Decoding only; this crate never encodes into legacy charsets.
//! - On any failure the caller keeps the original bytes — no partially
//!   converted output escapes.

mod codepage;
mod convert;
mod detect;
mod error;
mod resolve;
mod scalar;
mod transform;
mod utf32;
mod validate;

// Re-export public API
pub use codepage::tables;
pub use codepage::CodepageDecoder;
pub use convert::{to_utf8_with_charset_name, to_utf8_with_decoder, to_utf8_with_encoding};
pub use detect::{
    detect_all, detect_all_with, detect_and_convert_to_utf8, detect_and_convert_to_utf8_with,
    detect_encoding, detect_encoding_with, Candidate, ChardetngDetector, DetectionResult, Detector,
};
pub use error::{Error, Result};
pub use resolve::{
    charset_name_from_encoding, decoder_from_charset_name, encoding_from_charset_name, Encoding,
};
pub use scalar::encode_utf8;
pub use transform::{ByteTransformer, Passthrough, RegistryDecoder, TransformStatus};
pub use utf32::{ByteOrder, Utf32Decoder};
pub use validate::{
    is_valid_big5, is_valid_gb18030, is_valid_gbk, is_valid_utf16, is_valid_utf16be,
    is_valid_utf16le, is_valid_utf8,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        // Verify all public types are accessible
        let _decoder = CodepageDecoder::windows_1251();
        let _passthrough = Passthrough;
        let _utf32 = Utf32Decoder::little_endian();
        let _detector = ChardetngDetector;
        let _status = TransformStatus::Ok;
    }

    #[test]
    fn test_ascii_round_trip() {
        let (out, result) = detect_and_convert_to_utf8(b"ABC").unwrap();
        assert_eq!(&*out, b"ABC");
        assert!(result.confidence > 0);
    }

    #[test]
    fn test_named_conversion() {
        let out = to_utf8_with_charset_name(&[0xC4, 0xE3, 0xBA, 0xC3], "gb18030").unwrap();
        assert_eq!(out, "\u{4f60}\u{597d}".as_bytes());
    }
}
