//! Hand-rolled single-byte codepage decoders.
//!
//! These decoders are not reached through the name resolver; callers that
//! want one pass the instance to the transcoder explicitly. The registry
//! covers the same labels with its own machinery.

pub mod tables;

use crate::scalar::encode_utf8_lossy;
use crate::transform::{ByteTransformer, TransformStatus};

/// A streaming decoder for a single-byte codepage.
///
/// Bytes at or below 0x7F are copied verbatim; bytes at or above 0x80 are
/// mapped through a 128-entry table of Unicode scalar values and re-encoded
/// as UTF-8. Positions the codepage leaves undefined decode to U+FFFD.
///
/// The decoder is stateless, so one instance may be reused across inputs.
#[derive(Debug, Clone, Copy)]
pub struct CodepageDecoder {
    table: &'static [char; 128],
}

impl CodepageDecoder {
    /// Build a decoder over a 128-entry table indexed by byte − 0x80.
    pub const fn new(table: &'static [char; 128]) -> Self {
        Self { table }
    }

    pub const fn iso_8859_1() -> Self {
        Self::new(&tables::ISO_8859_1)
    }

    pub const fn iso_8859_2() -> Self {
        Self::new(&tables::ISO_8859_2)
    }

    pub const fn iso_8859_3() -> Self {
        Self::new(&tables::ISO_8859_3)
    }

    pub const fn iso_8859_5() -> Self {
        Self::new(&tables::ISO_8859_5)
    }

    pub const fn iso_8859_6() -> Self {
        Self::new(&tables::ISO_8859_6)
    }

    pub const fn iso_8859_7() -> Self {
        Self::new(&tables::ISO_8859_7)
    }

    pub const fn iso_8859_9() -> Self {
        Self::new(&tables::ISO_8859_9)
    }

    pub const fn windows_1250() -> Self {
        Self::new(&tables::WINDOWS_1250)
    }

    pub const fn windows_1251() -> Self {
        Self::new(&tables::WINDOWS_1251)
    }

    pub const fn windows_1252() -> Self {
        Self::new(&tables::WINDOWS_1252)
    }

    pub const fn windows_1254() -> Self {
        Self::new(&tables::WINDOWS_1254)
    }

    pub const fn windows_1255() -> Self {
        Self::new(&tables::WINDOWS_1255)
    }

    pub const fn windows_1256() -> Self {
        Self::new(&tables::WINDOWS_1256)
    }

    pub const fn koi8_r() -> Self {
        Self::new(&tables::KOI8_R)
    }
}

impl ByteTransformer for CodepageDecoder {
    fn transform(&mut self, src: &[u8], dst: &mut [u8], _at_eof: bool) -> (usize, usize, TransformStatus) {
        let mut n_src = 0;
        let mut n_dst = 0;
        for &b in src {
            if b < 0x80 {
                if n_dst >= dst.len() {
                    return (n_src, n_dst, TransformStatus::ShortDst);
                }
                dst[n_dst] = b;
                n_dst += 1;
            } else {
                let scalar = self.table[(b - 0x80) as usize];
                let mut encoded = [0u8; 4];
                let n = encode_utf8_lossy(u32::from(scalar), &mut encoded);
                if n_dst + n > dst.len() {
                    return (n_src, n_dst, TransformStatus::ShortDst);
                }
                dst[n_dst..n_dst + n].copy_from_slice(&encoded[..n]);
                n_dst += n;
            }
            n_src += 1;
        }
        (n_src, n_dst, TransformStatus::Ok)
    }
}
