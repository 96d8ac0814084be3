//! Anchor id encoding for link lookup.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
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
    .remove(b'#');

/// Percent-encode an anchor id the way the browser's `encodeURI` does.
///
/// Rendered TOC links carry encoded hrefs, so non-ASCII heading ids only
/// match once encoded.
pub fn encode_uri(id: &str) -> String {
    utf8_percent_encode(id, URI).to_string()
}

/// Selector for the link whose href contains the encoded anchor id.
pub fn link_selector(id: &str) -> String {
    format!("a[href*=\"{}\"]", encode_uri(id))
}
