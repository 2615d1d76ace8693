//! Lenient percent-decoding for shorten targets.

/// Decodes `%XX` escapes and `+` in a captured shorten target.
///
/// The transform is deliberately lenient: a `%` followed by two hex digits
/// becomes the corresponding byte, `+` becomes a space, and anything else -
/// including malformed escapes such as a trailing `%` or `%zz` - is copied
/// through unchanged rather than rejected. Decoded bytes that do not form
/// valid UTF-8 are replaced lossily.
pub fn percent_decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
        {
            decoded.push(hi << 4 | lo);
            i += 3;
        } else if b == b'+' {
            decoded.push(b' ');
            i += 1;
        } else {
            decoded.push(b);
            i += 1;
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_hex_escape() {
        assert_eq!(percent_decode("a%20b"), "a b");
    }

    #[test]
    fn test_decodes_plus_as_space() {
        assert_eq!(percent_decode("a+b"), "a b");
    }

    #[test]
    fn test_trailing_percent_passes_through() {
        assert_eq!(percent_decode("100%"), "100%");
    }

    #[test]
    fn test_incomplete_escape_passes_through() {
        assert_eq!(percent_decode("a%2"), "a%2");
    }

    #[test]
    fn test_non_hex_escape_passes_through() {
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
    }

    #[test]
    fn test_decodes_full_url() {
        assert_eq!(
            percent_decode("http%3A%2F%2Fexample.com%2Fpath%3Fq%3D1"),
            "http://example.com/path?q=1"
        );
    }

    #[test]
    fn test_uppercase_and_lowercase_hex() {
        assert_eq!(percent_decode("%2f%2F"), "//");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(percent_decode("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(percent_decode(""), "");
    }
}
