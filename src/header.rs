//! `Authorization` header rendering (RFC 5849 section 3.5.1).

use crate::encode::percent_encode;
use crate::request::ParameterSet;
use crate::{HEADER_SECRET_SUFFIX, OAUTH_KEY_PREFIX, REALM_KEY};

/// Renders the `OAuth ...` authorization header from a signed parameter set.
///
/// Entries whose key ends in `secret` or whose value is empty are excluded.
/// The remaining entries are sorted by key and rendered as
/// `oauth_{key}="{enc(value)}"`, comma-space joined. A supplied realm is
/// emitted first, unprefixed and unsorted per the RFC.
pub fn authorization_header(parameters: &ParameterSet, realm: Option<&str>) -> String {
    let mut header = match realm {
        Some(realm) => format!("OAuth {}=\"{}\", ", REALM_KEY, realm),
        None => "OAuth ".to_owned(),
    };

    let rendered = parameters
        .iter()
        .filter(|(key, value)| !key.ends_with(HEADER_SECRET_SUFFIX) && !value.is_empty())
        .map(|(key, value)| {
            format!(
                "{}{}=\"{}\"",
                OAUTH_KEY_PREFIX,
                key,
                percent_encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    header.push_str(&rendered);
    header.trim_end_matches(' ').trim_end_matches(',').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSUMER_KEY: &str = "91863bdb010b7e0d2e4a25bb3f24dcf1";

    fn parameters(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn prefixes_keys_and_sorts() {
        let params = parameters(&[("token", "testtoken"), ("consumer_key", CONSUMER_KEY)]);
        assert_eq!(
            authorization_header(&params, None),
            format!(
                "OAuth oauth_consumer_key=\"{}\", oauth_token=\"testtoken\"",
                CONSUMER_KEY
            )
        );
    }

    #[test]
    fn excludes_secrets() {
        let params = parameters(&[
            ("consumer_key", "K"),
            ("token", "T"),
            ("token_secret", "S"),
            ("consumer_secret", "S2"),
        ]);
        assert_eq!(
            authorization_header(&params, None),
            "OAuth oauth_consumer_key=\"K\", oauth_token=\"T\""
        );
    }

    #[test]
    fn excludes_empty_values() {
        let params = parameters(&[("consumer_key", "K"), ("token", "")]);
        assert_eq!(
            authorization_header(&params, None),
            "OAuth oauth_consumer_key=\"K\""
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = parameters(&[("callback", "http://printer.example.com/ready")]);
        assert_eq!(
            authorization_header(&params, None),
            "OAuth oauth_callback=\"http%3A%2F%2Fprinter.example.com%2Fready\""
        );
    }

    #[test]
    fn realm_comes_first_unprefixed() {
        let params = parameters(&[("consumer_key", "K")]);
        assert_eq!(
            authorization_header(&params, Some("photos")),
            "OAuth realm=\"photos\", oauth_consumer_key=\"K\""
        );
    }

    #[test]
    fn empty_set_trims_trailing_separator() {
        let params = ParameterSet::new();
        assert_eq!(authorization_header(&params, None), "OAuth");
        assert_eq!(
            authorization_header(&params, Some("photos")),
            "OAuth realm=\"photos\""
        );
    }
}
