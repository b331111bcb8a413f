//! Pure byte-sequence validators for the principal legacy multi-byte
//! encodings.
//!
//! Each validator drives a small state machine with an `n_byte` counter
//! tracking the position inside the current multi-byte character. A buffer is
//! well-formed only if the scan consumes every byte and ends outside a
//! character (`n_byte == 1`). The validators are pure: no allocation, no
//! shared state.

use simdutf8::basic::from_utf8;

/// Check whether `content` is valid UTF-8.
///
/// Uses SIMD-accelerated validation; the contract is strict (modified UTF-8
/// and CESU-8 are rejected).
pub fn is_valid_utf8(content: &[u8]) -> bool {
    from_utf8(content).is_ok()
}

/// Check whether `content` is well-formed GBK.
///
/// GBK characters are one byte (ASCII) or two bytes: a lead in
/// `[0x81, 0xFE]` followed by a trail in `[0x40, 0xFE]` other than 0x7F.
pub fn is_valid_gbk(content: &[u8]) -> bool {
    // bytes used by the current character, at most 2 in GBK
    let mut n_byte = 1;
    for &b in content {
        match n_byte {
            1 => {
                if b <= 0x7F {
                    continue;
                }
                if (0x81..=0xFE).contains(&b) {
                    n_byte = 2;
                } else {
                    return false;
                }
            }
            _ => {
                n_byte = 1;
                if !(0x40..=0xFE).contains(&b) || b == 0x7F {
                    return false;
                }
            }
        }
    }
    n_byte == 1
}

/// Check whether `content` is well-formed GB18030.
///
/// On top of the GBK forms, GB18030 adds four-byte characters:
/// lead `[0x81, 0xFE]`, digit `[0x30, 0x39]`, lead `[0x81, 0xFE]`,
/// digit `[0x30, 0x39]`.
pub fn is_valid_gb18030(content: &[u8]) -> bool {
    // bytes used by the current character, at most 4 in GB18030
    let mut n_byte = 1;
    for &b in content {
        match n_byte {
            1 => {
                if b <= 0x7F {
                    continue;
                }
                if (0x81..=0xFE).contains(&b) {
                    n_byte = 2;
                } else {
                    return false;
                }
            }
            2 => {
                if (0x40..=0xFE).contains(&b) && b != 0x7F {
                    // two-byte character closed
                    n_byte = 1;
                } else if b.is_ascii_digit() {
                    // second byte of a four-byte character
                    n_byte = 3;
                } else {
                    return false;
                }
            }
            3 => {
                if (0x81..=0xFE).contains(&b) {
                    n_byte = 4;
                } else {
                    return false;
                }
            }
            _ => {
                n_byte = 1;
                if !b.is_ascii_digit() {
                    return false;
                }
            }
        }
    }
    n_byte == 1
}

/// Check whether `content` is well-formed Big5.
///
/// Big5 characters are one byte (ASCII) or two bytes: a lead in
/// `[0x81, 0xFE]` followed by a trail in `[0x40, 0x7E]` or `[0xA1, 0xFE]`.
pub fn is_valid_big5(content: &[u8]) -> bool {
    let mut n_byte = 1;
    for &b in content {
        match n_byte {
            1 => {
                if b <= 0x7F {
                    continue;
                }
                if (0x81..=0xFE).contains(&b) {
                    n_byte = 2;
                } else {
                    return false;
                }
            }
            _ => {
                n_byte = 1;
                if !((0x40..=0x7E).contains(&b) || (0xA1..=0xFE).contains(&b)) {
                    return false;
                }
            }
        }
    }
    n_byte == 1
}

/// Check whether `content` is valid UTF-16 in either byte order.
///
/// Returns `(is_utf16, be, le)` where `be` and `le` report validity under the
/// respective byte order.
pub fn is_valid_utf16(content: &[u8]) -> (bool, bool, bool) {
    let be = is_valid_utf16be(content);
    let le = is_valid_utf16le(content);
    (be || le, be, le)
}

/// Check whether `content` is valid UTF-16 big-endian.
///
/// Empty and odd-length buffers are rejected. A leading U+FEFF byte-order
/// mark accepts the buffer for this byte order without scanning further.
/// Otherwise every code unit is scanned: a high surrogate must be followed by
/// a low surrogate, and a low surrogate must not appear on its own.
pub fn is_valid_utf16be(content: &[u8]) -> bool {
    validate_utf16(content, |unit| u16::from_be_bytes([unit[0], unit[1]]))
}

/// Check whether `content` is valid UTF-16 little-endian.
///
/// Same rules as [`is_valid_utf16be`] with the byte order swapped.
pub fn is_valid_utf16le(content: &[u8]) -> bool {
    validate_utf16(content, |unit| u16::from_le_bytes([unit[0], unit[1]]))
}

fn validate_utf16(content: &[u8], read_unit: impl Fn(&[u8]) -> u16) -> bool {
    if content.is_empty() || content.len() & 0x1 != 0 {
        return false;
    }
    if read_unit(&content[..2]) == 0xFEFF {
        // BOM fast path
        return true;
    }
    let mut expecting_low_surrogate = false;
    for unit in content.chunks_exact(2) {
        let c = read_unit(unit);
        if expecting_low_surrogate {
            expecting_low_surrogate = false;
            if !(0xDC00..=0xDFFF).contains(&c) {
                return false;
            }
        } else if (0xD800..=0xDBFF).contains(&c) {
            expecting_low_surrogate = true;
        } else if (0xDC00..=0xDFFF).contains(&c) {
            // low surrogate with no preceding high surrogate
            return false;
        }
    }
    !expecting_low_surrogate
}
