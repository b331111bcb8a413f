//! Hand-rolled UTF-32 decoders.
//!
//! Neither charset registry carries UTF-32, so the name resolver binds these
//! transformers directly. The byte-order mark is not treated specially: a
//! leading U+FEFF decodes as a character like any other.

use crate::scalar::encode_utf8_lossy;
use crate::transform::{ByteTransformer, TransformStatus};

/// Byte order of a UTF-32 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Streaming UTF-32 to UTF-8 decoder.
///
/// Code units that are not Unicode scalar values decode to U+FFFD. A code
/// unit truncated by end of input is malformed.
#[derive(Debug, Clone, Copy)]
pub struct Utf32Decoder {
    order: ByteOrder,
}

impl Utf32Decoder {
    pub const fn new(order: ByteOrder) -> Self {
        Self { order }
    }

    pub const fn big_endian() -> Self {
        Self::new(ByteOrder::Big)
    }

    pub const fn little_endian() -> Self {
        Self::new(ByteOrder::Little)
    }
}

impl ByteTransformer for Utf32Decoder {
    fn transform(&mut self, src: &[u8], dst: &mut [u8], at_eof: bool) -> (usize, usize, TransformStatus) {
        let mut n_src = 0;
        let mut n_dst = 0;
        while src.len() - n_src >= 4 {
            let unit = [src[n_src], src[n_src + 1], src[n_src + 2], src[n_src + 3]];
            let scalar = match self.order {
                ByteOrder::Big => u32::from_be_bytes(unit),
                ByteOrder::Little => u32::from_le_bytes(unit),
            };
            let mut encoded = [0u8; 4];
            let n = encode_utf8_lossy(scalar, &mut encoded);
            if n_dst + n > dst.len() {
                return (n_src, n_dst, TransformStatus::ShortDst);
            }
            dst[n_dst..n_dst + n].copy_from_slice(&encoded[..n]);
            n_dst += n;
            n_src += 4;
        }
        if n_src < src.len() {
            let status = if at_eof {
                TransformStatus::Malformed
            } else {
                TransformStatus::ShortSrc
            };
            return (n_src, n_dst, status);
        }
        (n_src, n_dst, TransformStatus::Ok)
    }
}
