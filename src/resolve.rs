//! Charset-name resolution: label → encoding → decoder, and back.
//!
//! Resolution consults the WHATWG label index first and a small IANA alias
//! table second; neither registry's contents are replicated here. UTF-32 and
//! the GB18030 spelling variants are canonicalized up front because the
//! registries either miss them or know only one spelling.

use crate::error::{Error, Result};
use crate::transform::{ByteTransformer, RegistryDecoder};
use crate::utf32::{ByteOrder, Utf32Decoder};

/// An immutable handle binding a charset to its decoder factory.
///
/// Constructed through [`encoding_from_charset_name`]; shared program-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// An encoding carried by the WHATWG registry.
    Registry(&'static encoding_rs::Encoding),
    /// UTF-32, which the registries do not carry. The byte-order mark is
    /// not consumed: a leading U+FEFF decodes as a character.
    Utf32(ByteOrder),
}

impl Encoding {
    /// Construct a fresh streaming decoder producing UTF-8.
    pub fn new_decoder(&self) -> Box<dyn ByteTransformer> {
        match self {
            Encoding::Registry(encoding) => Box::new(RegistryDecoder::new(encoding)),
            Encoding::Utf32(order) => Box::new(Utf32Decoder::new(*order)),
        }
    }
}

/// Resolve a charset label (case-insensitive, surrounding whitespace
/// ignored) to an [`Encoding`].
///
/// Label references:
/// <https://encoding.spec.whatwg.org/#names-and-labels> and
/// <https://www.iana.org/assignments/character-sets/character-sets.xhtml>.
pub fn encoding_from_charset_name(name: &str) -> Result<Encoding> {
    let name = name.trim().to_ascii_lowercase();
    let label = match name.as_str() {
        // only "gb18030" is a valid label in the registries
        "gb-18030" | "gb_18030" | "gb 18030" => "gb18030",

        // UTF-32 is listed in neither registry, so the hand-rolled decoders
        // are bound directly
        "utf-32-le" | "utf_32_le" | "utf-32_le" | "utf_32-le" | "utf32le" | "utf-32le"
        | "utf32-le" | "utf_32le" | "utf32_le" => {
            return Ok(Encoding::Utf32(ByteOrder::Little));
        }

        "utf-32-be" | "utf_32_be" | "utf-32_be" | "utf_32-be" | "utf32be" | "utf-32be"
        | "utf32-be" | "utf_32be" | "utf32_be" => {
            return Ok(Encoding::Utf32(ByteOrder::Big));
        }

        other => other,
    };
    if let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes()) {
        return Ok(Encoding::Registry(encoding));
    }
    match iana_alias(label) {
        Some(encoding) => Ok(Encoding::Registry(encoding)),
        None => Err(Error::InvalidName),
    }
}

/// Resolve a charset label to a decoder producing UTF-8.
pub fn decoder_from_charset_name(name: &str) -> Result<Box<dyn ByteTransformer>> {
    Ok(encoding_from_charset_name(name)?.new_decoder())
}

/// Report the canonical name of `encoding`: the IANA preferred name where one
/// exists, otherwise the WHATWG name.
///
/// Fails with [`Error::Unsupported`] when the registries carry the encoding
/// but refuse it a public name (the replacement encoding), and
/// [`Error::Unknown`] when no name is associated at all.
pub fn charset_name_from_encoding(encoding: &Encoding) -> Result<&'static str> {
    match iana_name(encoding) {
        Ok(name) => Ok(name),
        Err(_) => match html_name(encoding) {
            Ok(name) => Ok(name),
            Err(miss) => Err(classify(miss)),
        },
    }
}

/// IANA labels the WHATWG index does not know, mapped onto registry
/// encodings. Deliberately a handful, not a registry replica.
fn iana_alias(label: &str) -> Option<&'static encoding_rs::Encoding> {
    match label {
        "cp936" | "ms936" => Some(encoding_rs::GBK),
        "cp950" => Some(encoding_rs::BIG5),
        "iso-ir-6" | "iso646-us" | "us" | "ibm367" | "cp367" => Some(encoding_rs::WINDOWS_1252),
        _ => None,
    }
}

/// A registry's refusal to name an encoding, with its underlying message.
struct RegistryMiss(&'static str);

fn classify(miss: RegistryMiss) -> Error {
    if miss.0.contains("not supported") {
        Error::Unsupported
    } else {
        Error::Unknown
    }
}

/// IANA preferred name. For the delegated set the WHATWG name already equals
/// the IANA preferred spelling, with gb18030 the one divergent case.
fn iana_name(encoding: &Encoding) -> std::result::Result<&'static str, RegistryMiss> {
    match encoding {
        Encoding::Utf32(ByteOrder::Big) => Ok("UTF-32BE"),
        Encoding::Utf32(ByteOrder::Little) => Ok("UTF-32LE"),
        Encoding::Registry(e) => match e.name() {
            "gb18030" => Ok("GB18030"),
            "replacement" => Err(RegistryMiss(
                "the replacement encoding is not supported by the IANA registry",
            )),
            "x-user-defined" => Err(RegistryMiss("no IANA name for x-user-defined")),
            name => Ok(name),
        },
    }
}

fn html_name(encoding: &Encoding) -> std::result::Result<&'static str, RegistryMiss> {
    match encoding {
        Encoding::Utf32(_) => Err(RegistryMiss("utf-32 has no WHATWG name")),
        Encoding::Registry(e) => match e.name() {
            // a label that maps here names no real charset; reporting it as
            // canonical would mislead callers
            "replacement" => Err(RegistryMiss(
                "the replacement encoding is not supported as a charset name",
            )),
            "x-user-defined" => Err(RegistryMiss("x-user-defined names no charset")),
            name => Ok(name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_labels() {
        let cases = [
            ("utf-8", encoding_rs::UTF_8),
            ("UTF-8", encoding_rs::UTF_8),
            ("  utf-8  ", encoding_rs::UTF_8),
            ("utf-16be", encoding_rs::UTF_16BE),
            ("utf-16le", encoding_rs::UTF_16LE),
            ("gbk", encoding_rs::GBK),
            ("gb2312", encoding_rs::GBK),
            ("gb18030", encoding_rs::GB18030),
            ("big5", encoding_rs::BIG5),
            ("euc-jp", encoding_rs::EUC_JP),
            ("shift_jis", encoding_rs::SHIFT_JIS),
            ("iso-2022-jp", encoding_rs::ISO_2022_JP),
            ("euc-kr", encoding_rs::EUC_KR),
            ("iso-8859-2", encoding_rs::ISO_8859_2),
            ("iso-8859-5", encoding_rs::ISO_8859_5),
            ("windows-1251", encoding_rs::WINDOWS_1251),
            ("koi8-r", encoding_rs::KOI8_R),
        ];
        for (label, expected) in cases {
            match encoding_from_charset_name(label) {
                Ok(Encoding::Registry(e)) => assert_eq!(e, expected, "label {label:?}"),
                other => panic!("label {label:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn gb18030_spellings() {
        for label in ["gb-18030", "gb_18030", "gb 18030", "GB-18030"] {
            assert_eq!(
                encoding_from_charset_name(label).unwrap(),
                Encoding::Registry(encoding_rs::GB18030),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn utf32_spellings() {
        let le = [
            "utf-32-le", "utf_32_le", "utf-32_le", "utf_32-le", "utf32le", "utf-32le", "utf32-le",
            "utf_32le", "utf32_le",
        ];
        for label in le {
            assert_eq!(
                encoding_from_charset_name(label).unwrap(),
                Encoding::Utf32(ByteOrder::Little),
                "label {label:?}"
            );
        }
        let be = [
            "utf-32-be", "utf_32_be", "utf-32_be", "utf_32-be", "utf32be", "utf-32be", "utf32-be",
            "utf_32be", "utf32_be",
        ];
        for label in be {
            assert_eq!(
                encoding_from_charset_name(label).unwrap(),
                Encoding::Utf32(ByteOrder::Big),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn iana_only_labels() {
        assert_eq!(
            encoding_from_charset_name("cp936").unwrap(),
            Encoding::Registry(encoding_rs::GBK)
        );
        assert_eq!(
            encoding_from_charset_name("cp950").unwrap(),
            Encoding::Registry(encoding_rs::BIG5)
        );
    }

    #[test]
    fn bad_labels_are_invalid_name() {
        for label in ["", "utf-9", "no-such-charset", "utf-32"] {
            assert!(
                matches!(encoding_from_charset_name(label), Err(Error::InvalidName)),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn canonical_name_round_trip() {
        for name in ["UTF-32BE", "UTF-32LE", "GBK", "GB18030", "Big5", "EUC-KR"] {
            let encoding = encoding_from_charset_name(name).unwrap();
            assert_eq!(charset_name_from_encoding(&encoding).unwrap(), name);
        }
    }

    #[test]
    fn replacement_label_is_unsupported_in_reverse() {
        // iso-2022-kr resolves (to the registry's replacement machinery) but
        // has no reportable canonical name
        let encoding = encoding_from_charset_name("iso-2022-kr").unwrap();
        assert!(matches!(
            charset_name_from_encoding(&encoding),
            Err(Error::Unsupported)
        ));
    }

    #[test]
    fn x_user_defined_is_unknown_in_reverse() {
        let encoding = Encoding::Registry(encoding_rs::X_USER_DEFINED);
        assert!(matches!(
            charset_name_from_encoding(&encoding),
            Err(Error::Unknown)
        ));
    }
}
