//! Buffer-in / buffer-out conversion to UTF-8.

use crate::error::Result;
use crate::resolve::{decoder_from_charset_name, Encoding};
use crate::transform::{transcode, ByteTransformer};

/// Convert `content` to UTF-8 with the given [`Encoding`].
pub fn to_utf8_with_encoding(content: &[u8], encoding: &Encoding) -> Result<Vec<u8>> {
    let mut decoder = encoding.new_decoder();
    transcode(decoder.as_mut(), content)
}

/// Convert `content` to UTF-8 with the given decoder.
///
/// The whole input is read to completion. Fails with
/// [`Error::WrongDecoder`](crate::Error::WrongDecoder) if the decoder cannot
/// make sense of the bytes; no partial output escapes.
pub fn to_utf8_with_decoder(content: &[u8], decoder: &mut dyn ByteTransformer) -> Result<Vec<u8>> {
    transcode(decoder, content)
}

/// Convert `content` to UTF-8 by charset name (case-insensitive).
///
/// Fails with [`Error::InvalidName`](crate::Error::InvalidName) if the name
/// resolves through neither registry, or
/// [`Error::WrongDecoder`](crate::Error::WrongDecoder) if the content cannot
/// be decoded under the named charset.
pub fn to_utf8_with_charset_name(content: &[u8], charset_name: &str) -> Result<Vec<u8>> {
    let mut decoder = decoder_from_charset_name(charset_name)?;
    transcode(decoder.as_mut(), content)
}
