//! Canonical string building for request signatures.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that should NOT be percent-encoded (RFC 3986 unreserved set).
const UNRESERVED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a key or value, leaving only unreserved characters as is.
pub fn raw_url_encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED_SET).to_string()
}

/// Encode `key=value` pairs and join them with `&`, keeping the given order.
pub fn encode_pairs<'a, I, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", raw_url_encode(key), raw_url_encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_url_encode() {
        assert_eq!(raw_url_encode("abc-_.~XYZ019"), "abc-_.~XYZ019");
        assert_eq!(raw_url_encode("a b"), "a%20b");
        assert_eq!(raw_url_encode("a+b"), "a%2Bb");
        assert_eq!(raw_url_encode("user@example.com"), "user%40example.com");
        assert_eq!(raw_url_encode("[1,2]"), "%5B1%2C2%5D");
        assert_eq!(raw_url_encode("ñ"), "%C3%B1");
    }

    #[test]
    fn test_encode_pairs() {
        let encoded = encode_pairs(vec![("Action", "GetOrder"), ("Search", "red shoes")]);
        assert_eq!(encoded, "Action=GetOrder&Search=red%20shoes");
        assert_eq!(encode_pairs(Vec::<(&str, &str)>::new()), "");
    }
}
