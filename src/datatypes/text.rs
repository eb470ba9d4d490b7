//! Fixed-width text values
//!
//! A [`FixedText`] always occupies exactly its width. Short content is
//! right-padded with [`TEXT_PAD_BYTE`], long content is truncated, so an
//! encoded text column never drifts from the width its schema declares.

use std::borrow::Cow;
use std::fmt;

/// Byte used to right-pad short text content
pub const TEXT_PAD_BYTE: u8 = b' ';

/// Immutable text of a fixed byte width
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedText {
    bytes: Box<[u8]>,
}

impl FixedText {
    /// Creates text of exactly `width` bytes from `content`.
    ///
    /// Content longer than `width` is cut to fit, then the remainder is
    /// padded with spaces. UTF-8 content is cut on a char boundary so no
    /// character is split; other bytes are cut at `width`.
    pub fn new(content: impl AsRef<[u8]>, width: usize) -> Self {
        let content = content.as_ref();
        let mut end = content.len().min(width);
        if let Ok(text) = std::str::from_utf8(content) {
            while !text.is_char_boundary(end) {
                end -= 1;
            }
        }

        let mut bytes = Vec::with_capacity(width);
        bytes.extend_from_slice(&content[..end]);
        bytes.resize(width, TEXT_PAD_BYTE);
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Wraps bytes verbatim. The width is the byte length.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Returns the raw bytes, padding included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the width in bytes
    pub fn width(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the full content as a string, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Returns the content without trailing pad bytes
    pub fn trimmed(&self) -> Cow<'_, str> {
        let end = self
            .bytes
            .iter()
            .rposition(|b| *b != TEXT_PAD_BYTE)
            .map_or(0, |i| i + 1);
        String::from_utf8_lossy(&self.bytes[..end])
    }
}

impl fmt::Display for FixedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_width_kept() {
        let text = FixedText::new("abc", 3);
        assert_eq!(text.as_bytes(), b"abc");
        assert_eq!(text.width(), 3);
    }

    #[test]
    fn test_short_content_padded() {
        let text = FixedText::new("ab", 3);
        assert_eq!(text.as_bytes(), b"ab ");
        assert_eq!(text.width(), 3);
        assert_eq!(text.trimmed(), "ab");
    }

    #[test]
    fn test_long_content_truncated() {
        let text = FixedText::new("abcdef", 4);
        assert_eq!(text.as_bytes(), b"abcd");
        assert_eq!(text.width(), 4);
    }

    #[test]
    fn test_truncation_keeps_whole_chars() {
        // "é" is two bytes
        let text = FixedText::new("é", 1);
        assert_eq!(text.as_bytes(), b" ");
        assert_eq!(text.width(), 1);

        let text = FixedText::new("aéb", 2);
        assert_eq!(text.as_bytes(), b"a ");

        let text = FixedText::new("aéb", 3);
        assert_eq!(text.as_bytes(), "aé".as_bytes());
        assert_eq!(text.trimmed(), "aé");
    }

    #[test]
    fn test_non_utf8_truncated_at_width() {
        let text = FixedText::new([0xFF, 0xFE, 0xFD], 2);
        assert_eq!(text.as_bytes(), &[0xFF, 0xFE]);
    }

    #[test]
    fn test_from_bytes_is_verbatim() {
        let text = FixedText::from_bytes(b"ab".to_vec());
        assert_eq!(text.width(), 2);
        assert_eq!(text.as_bytes(), b"ab");
    }

    #[test]
    fn test_trimmed_all_padding() {
        let text = FixedText::new("", 5);
        assert_eq!(text.as_bytes(), b"     ");
        assert_eq!(text.trimmed(), "");
    }

    #[test]
    fn test_lossy_on_invalid_utf8() {
        let text = FixedText::from_bytes(vec![0xFF, b'a']);
        assert_eq!(text.width(), 2);
        assert!(text.to_string_lossy().ends_with('a'));
    }
}
