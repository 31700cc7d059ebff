//! Paths served by the golinks service that the editor talks to.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::Result;

pub const SAVE_PATH: &str = "/apiz/save";
pub const EDIT_PREFIX: &str = "/edit/";

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_UNESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

pub fn encode_item(item: &str) -> String {
    utf8_percent_encode(item, URI_UNESCAPED).to_string()
}

pub fn save_url(origin: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{origin}{SAVE_PATH}"))?)
}

pub fn edit_url(origin: &str, item: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{origin}{EDIT_PREFIX}{}", encode_item(item)))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri() {
        assert_eq!(encode_item("a b"), "a%20b");
        assert_eq!(encode_item("foo/bar?x=1&y=(2)"), "foo/bar?x=1&y=(2)");
        assert_eq!(encode_item("ü%"), "%C3%BC%25");
    }

    #[test]
    fn builds_edit_url_under_origin() {
        let url = edit_url("http://go.internal:8080", "a b").unwrap();
        assert_eq!(url.as_str(), "http://go.internal:8080/edit/a%20b");
    }

    #[test]
    fn builds_save_url() {
        let url = save_url("https://go.example.com").unwrap();
        assert_eq!(url.as_str(), "https://go.example.com/apiz/save");
    }
}
