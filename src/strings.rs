//! Character-class string constants.
//!
//! These mirror the constants of the scripting language's `string` module.
//! They are plain data; no methods are attached to `str`.

/// The lowercase letters `'abcdefghijklmnopqrstuvwxyz'`.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The uppercase letters `'ABCDEFGHIJKLMNOPQRSTUVWXYZ'`.
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The concatenation of [`ASCII_LOWERCASE`] and [`ASCII_UPPERCASE`].
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The string `'0123456789'`.
pub const DIGITS: &str = "0123456789";

/// The string `'0123456789abcdefABCDEF'`.
pub const HEXDIGITS: &str = "0123456789abcdefABCDEF";

/// The string `'01234567'`.
pub const OCTDIGITS: &str = "01234567";

/// ASCII punctuation characters in the C locale.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The whitespace characters space, tab, newline, return, vertical tab and form feed.
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Digits, letters, punctuation and whitespace.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_letters_is_lower_then_upper() {
        assert_eq!(ASCII_LETTERS, format!("{ASCII_LOWERCASE}{ASCII_UPPERCASE}"));
    }

    #[rstest]
    fn test_printable_is_composed_of_other_classes() {
        let expected = format!("{DIGITS}{ASCII_LETTERS}{PUNCTUATION}{WHITESPACE}");
        assert_eq!(PRINTABLE, expected);
    }

    #[rstest]
    fn test_hexdigits_contains_every_digit() {
        assert!(DIGITS.chars().all(|character| HEXDIGITS.contains(character)));
        assert!(OCTDIGITS.chars().all(|character| DIGITS.contains(character)));
    }

    #[rstest]
    fn test_whitespace_matches_ascii_whitespace() {
        assert!(WHITESPACE.chars().all(|character| character.is_whitespace()));
        assert_eq!(WHITESPACE.len(), 6);
    }
}
