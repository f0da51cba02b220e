use std::str::FromStr;

use crate::pad::pad_left;

pub const WORD_WIDTH: usize = 32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hexadecimal word")]
pub struct ParseHexWordError;

/// One machine word as printed by the assembler: unprefixed hex, any length.
///
/// The digits are kept as text so words wider than any native integer still
/// convert exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexWord {
    digits: String,
}

impl FromStr for HexWord {
    type Err = ParseHexWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHexWordError);
        }
        let digits = s.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        Ok(HexWord { digits: digits.to_ascii_uppercase() })
    }
}

impl HexWord {
    /// Minimal unsigned base-2 rendering, `"0"` for zero.
    pub fn to_bits(&self) -> String {
        let mut bits = String::with_capacity(self.digits.len() * 4);
        for c in self.digits.chars() {
            // digits were validated in from_str
            let nibble = c.to_digit(16).unwrap_or(0);
            bits.push_str(&format!("{nibble:04b}"));
        }
        let trimmed = bits.trim_start_matches('0');
        if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() }
    }

    /// Base-2 rendering zero-padded to at least `width` bits, never truncated.
    pub fn to_binary(&self, width: usize) -> String {
        pad_left(&self.to_bits(), width, '0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(s: &str) -> String {
        s.parse::<HexWord>().unwrap().to_binary(WORD_WIDTH)
    }

    #[test]
    fn pads_to_word_width() {
        assert_eq!(bin("0005"), "00000000000000000000000000000101");
        assert_eq!(bin("FFFF"), "00000000000000001111111111111111");
        assert_eq!(bin("ffffffff"), "1".repeat(32));
        assert_eq!(bin("0"), "0".repeat(32));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(bin(" 20000000\n"), format!("001{}", "0".repeat(29)));
    }

    #[test]
    fn wide_words_are_not_truncated() {
        let b = bin("1FFFFFFFF");
        assert_eq!(b.len(), 33);
        assert_eq!(b, "1".repeat(33));
    }

    #[test]
    fn rejects_non_hex() {
        assert!("ZZZZ".parse::<HexWord>().is_err());
        assert!("".parse::<HexWord>().is_err());
        assert!("0x10".parse::<HexWord>().is_err());
        assert!("-1".parse::<HexWord>().is_err());
    }

    #[test]
    fn binary_reads_back_as_same_value() {
        for hex in ["0", "1", "5", "a5", "DEADBEEF", "0000ffff", "123456789abcdef0"] {
            let v = u128::from_str_radix(hex, 16).unwrap();
            let b = bin(hex);
            assert!(b.len() >= WORD_WIDTH);
            assert_eq!(u128::from_str_radix(&b, 2).unwrap(), v, "{hex}");
        }
    }
}
