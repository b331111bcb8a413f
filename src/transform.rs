//! The streaming byte-transformer abstraction and the transcoding pump.

use crate::error::{Error, Result};

/// Outcome of one [`ByteTransformer::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    /// Every input byte was consumed and its output written.
    Ok,
    /// The destination slice filled up before the input was exhausted; call
    /// again with a larger destination.
    ShortDst,
    /// The input ends in the middle of a multi-byte sequence and more bytes
    /// are required before progress can be made. Only meaningful when
    /// `at_eof` is false.
    ShortSrc,
    /// The input cannot be decoded by this transformer.
    Malformed,
}

/// A streaming byte transformer: the decoder abstraction.
///
/// A decoder consumes bytes of some source encoding and produces UTF-8.
/// Implementations must be deterministic and must not retain references to
/// the slices after returning. A single instance carries per-stream state and
/// is not shareable mid-stream; callers that parallelize construct one
/// decoder per worker.
pub trait ByteTransformer {
    /// Consume bytes from `src`, write UTF-8 to `dst`, and report
    /// `(bytes_consumed, bytes_produced, status)`. `at_eof` marks the final
    /// chunk of the stream.
    fn transform(&mut self, src: &[u8], dst: &mut [u8], at_eof: bool) -> (usize, usize, TransformStatus);
}

/// The identity transformer: bytes pass through untouched.
///
/// Bound to detection results whose charset has no local decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ByteTransformer for Passthrough {
    fn transform(&mut self, src: &[u8], dst: &mut [u8], _at_eof: bool) -> (usize, usize, TransformStatus) {
        let n = src.len().min(dst.len());
        dst[..n].copy_from_slice(&src[..n]);
        if n < src.len() {
            (n, n, TransformStatus::ShortDst)
        } else {
            (n, n, TransformStatus::Ok)
        }
    }
}

/// A decoder delegated to the registry's streaming machinery.
///
/// Wraps an [`encoding_rs::Decoder`] in replacement mode: malformed input
/// decodes to U+FFFD rather than failing, which is the registry decoders'
/// own contract. Byte-order marks are sniffed and stripped.
pub struct RegistryDecoder {
    inner: encoding_rs::Decoder,
}

impl RegistryDecoder {
    /// Construct a fresh decoder for `encoding`.
    pub fn new(encoding: &'static encoding_rs::Encoding) -> Self {
        Self {
            inner: encoding.new_decoder(),
        }
    }
}

impl ByteTransformer for RegistryDecoder {
    fn transform(&mut self, src: &[u8], dst: &mut [u8], at_eof: bool) -> (usize, usize, TransformStatus) {
        let (result, n_src, n_dst, _) = self.inner.decode_to_utf8(src, dst, at_eof);
        let status = match result {
            encoding_rs::CoderResult::InputEmpty => TransformStatus::Ok,
            encoding_rs::CoderResult::OutputFull => TransformStatus::ShortDst,
        };
        (n_src, n_dst, status)
    }
}

/// Pump the whole of `content` through `decoder` into a fresh UTF-8 buffer.
///
/// The output grows geometrically, so allocation stays amortized-linear in
/// the input size. Any unrecoverable decoder fault, including a sequence
/// still open at end of input, collapses to [`Error::WrongDecoder`].
pub fn transcode(decoder: &mut dyn ByteTransformer, content: &[u8]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; content.len() + 16];
    let mut n_src = 0;
    let mut n_dst = 0;
    loop {
        let (read, written, status) = decoder.transform(&content[n_src..], &mut out[n_dst..], true);
        n_src += read;
        n_dst += written;
        match status {
            TransformStatus::Ok => {
                out.truncate(n_dst);
                return Ok(out);
            }
            TransformStatus::ShortDst => {
                let grown = out.len() * 2;
                out.resize(grown, 0);
            }
            TransformStatus::ShortSrc | TransformStatus::Malformed => {
                return Err(Error::WrongDecoder);
            }
        }
    }
}
