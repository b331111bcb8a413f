//! Detection and arbitration: the statistical detector's ranked guesses,
//! cross-checked against the byte-sequence validators before a decoder is
//! committed to.

use std::borrow::Cow;
use std::fmt;

use chardetng::EncodingDetector;

use crate::error::Result;
use crate::resolve::decoder_from_charset_name;
use crate::transform::{transcode, ByteTransformer, Passthrough};
use crate::validate::is_valid_gbk;

/// One ranked guess from a statistical detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Charset label as reported by the detector.
    pub charset: String,
    /// Language tag; may be empty.
    pub language: String,
    /// Confidence in [0, 100]; higher is stronger.
    pub confidence: u8,
}

/// The statistical detector contract.
///
/// Given a byte buffer, a detector returns ranked candidates. There is no
/// guarantee of completeness, nor that the true encoding appears at all.
/// Detectors are injected by contract rather than inherited from, so tests
/// and embedders can supply their own.
pub trait Detector {
    fn detect(&self, content: &[u8]) -> Result<Vec<Candidate>>;
}

/// The default detector: byte-order-mark sniffing in front of `chardetng`.
///
/// `chardetng` reports neither a language nor a numeric score, so candidates
/// carry fixed confidence tiers: 100 for a byte-order-mark match, 80 when the
/// detector assesses its guess as higher-confidence, 30 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetngDetector;

impl Detector for ChardetngDetector {
    fn detect(&self, content: &[u8]) -> Result<Vec<Candidate>> {
        if let Some((encoding, _)) = encoding_rs::Encoding::for_bom(content) {
            return Ok(vec![Candidate {
                charset: encoding.name().to_string(),
                language: String::new(),
                confidence: 100,
            }]);
        }
        let mut detector = EncodingDetector::new();
        detector.feed(content, true);
        let (encoding, higher_confidence) = detector.guess_assess(None, true);
        Ok(vec![Candidate {
            charset: encoding.name().to_string(),
            language: String::new(),
            confidence: if higher_confidence { 80 } else { 30 },
        }])
    }
}

/// One candidate verdict: a detector guess enriched with a decoder.
pub struct DetectionResult {
    /// Canonical label of the detected charset. Never empty when the
    /// detector produced it, though it may be the sentinel `"unknown"`.
    pub charset: String,
    /// Language reported by the detector; may be empty.
    pub language: String,
    /// Confidence in [0, 100]; higher is stronger. May have been lowered by
    /// the arbiter's validator check.
    pub confidence: u8,
    /// A decoder producing UTF-8 from bytes in `charset`; the identity
    /// transformer when no local decoder exists.
    pub decoder: Box<dyn ByteTransformer>,
    /// Whether a real (non-passthrough) decoder was found.
    pub convertible: bool,
}

impl fmt::Debug for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectionResult")
            .field("charset", &self.charset)
            .field("language", &self.language)
            .field("confidence", &self.confidence)
            .field("convertible", &self.convertible)
            .finish_non_exhaustive()
    }
}

/// Detect with the default detector. See [`detect_all_with`].
pub fn detect_all(content: &[u8]) -> Result<Vec<DetectionResult>> {
    detect_all_with(&ChardetngDetector, content)
}

/// Run `detector` and return every candidate enriched with a decoder, sorted
/// by confidence descending.
///
/// A candidate whose charset has no local decoder is kept, bound to the
/// identity transformer with `convertible` false; candidates are never
/// dropped. Detector failures propagate as-is.
pub fn detect_all_with(detector: &dyn Detector, content: &[u8]) -> Result<Vec<DetectionResult>> {
    let mut results: Vec<DetectionResult> = detector
        .detect(content)?
        .into_iter()
        .map(|candidate| {
            let (decoder, convertible) = match decoder_from_charset_name(&candidate.charset) {
                Ok(decoder) => (decoder, true),
                Err(_) => (Box::new(Passthrough) as Box<dyn ByteTransformer>, false),
            };
            DetectionResult {
                charset: candidate.charset,
                language: candidate.language,
                confidence: candidate.confidence,
                decoder,
                convertible,
            }
        })
        .collect();
    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    Ok(results)
}

/// Detect with the default detector. See [`detect_encoding_with`].
pub fn detect_encoding(content: &[u8]) -> Result<DetectionResult> {
    detect_encoding_with(&ChardetngDetector, content)
}

/// Return the highest-confidence detection result.
pub fn detect_encoding_with(detector: &dyn Detector, content: &[u8]) -> Result<DetectionResult> {
    let mut results = detect_all_with(detector, content)?;
    if results.is_empty() {
        return Err(crate::error::Error::Unknown);
    }
    Ok(results.remove(0))
}

/// Detect with the default detector. See [`detect_and_convert_to_utf8_with`].
pub fn detect_and_convert_to_utf8(content: &[u8]) -> Result<(Cow<'_, [u8]>, DetectionResult)> {
    detect_and_convert_to_utf8_with(&ChardetngDetector, content)
}

/// Detect the encoding of `content` and convert it to UTF-8.
///
/// The input is returned unchanged when the top charset is unknown, already
/// UTF-8, or has no local decoder. When the top charset is in the GBK family
/// but the bytes break the GBK sequence rules — the common GBK-vs-UTF-16
/// confusion — the confidence is overridden to 20 and conversion proceeds
/// anyway; callers are expected to inspect the returned confidence.
/// Detection is not re-run after the override.
pub fn detect_and_convert_to_utf8_with<'a>(
    detector: &dyn Detector,
    content: &'a [u8],
) -> Result<(Cow<'a, [u8]>, DetectionResult)> {
    let mut result = detect_encoding_with(detector, content)?;
    match result.charset.to_ascii_lowercase().as_str() {
        "" | "unknown" | "utf-8" | "utf8" => return Ok((Cow::Borrowed(content), result)),
        "gb18030" | "gb-18030" | "gb 18030" | "gbk" | "gb2312" => {
            if !is_valid_gbk(content) {
                // low, do not trust
                result.confidence = 20;
            }
        }
        _ => {}
    }
    if !result.convertible {
        return Ok((Cow::Borrowed(content), result));
    }
    let converted = transcode(result.decoder.as_mut(), content)?;
    Ok((Cow::Owned(converted), result))
}
