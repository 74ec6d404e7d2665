use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that must be percent-encoded per RFC 5849 section 3.6.
///
/// Only the unreserved set (`A-Z a-z 0-9 - _ . ~`) passes through; everything
/// else is encoded, space included.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `value` the way RFC 5849 requires for signatures.
///
/// Note that the hex digits are uppercase (`%2F`, not `%2f`). Most generic
/// URL encoders emit lowercase, which breaks signature verification on the
/// provider side, so this crate never delegates to them.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_passes_through() {
        let unreserved = "ABCXYZabcxyz0189-_.~";
        assert_eq!(percent_encode(unreserved), unreserved);
    }

    #[test]
    fn reserved_is_encoded_uppercase() {
        assert_eq!(percent_encode(" "), "%20");
        assert_eq!(percent_encode("/"), "%2F");
        assert_eq!(percent_encode("="), "%3D");
        assert_eq!(percent_encode("&"), "%26");
        assert_eq!(
            percent_encode("http://example.com/a b"),
            "http%3A%2F%2Fexample.com%2Fa%20b"
        );
    }

    #[test]
    fn empty_encodes_to_empty() {
        assert_eq!(percent_encode(""), "");
    }

    #[test]
    fn idempotent_on_unreserved_only_text() {
        let text = "already-safe_text.~";
        assert_eq!(percent_encode(&percent_encode(text)), percent_encode(text));
    }

    #[test]
    fn multibyte_encodes_each_byte() {
        // UTF-8 bytes, one %XX per byte
        assert_eq!(percent_encode("é"), "%C3%A9");
    }
}
