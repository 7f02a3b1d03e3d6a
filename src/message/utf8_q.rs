//! "Q" encoded-words for header values ([RFC 2047](https://tools.ietf.org/html/rfc2047#section-4.2))

use crate::message::{ascii::is_printable_ascii, ascii::is_printable_ascii_str, encoder};

const PREFIX: &str = "=?UTF-8?Q?";
const SUFFIX: &str = "?=";

/// Longest encoded-word allowed by RFC 2047
pub const MAX_ENCODED_WORD_LEN: usize = 76;

/// Encodes a header value using the "Q" encoding, when necessary
///
/// Values made only of printable ASCII are returned unchanged, anything else
/// becomes a single `=?UTF-8?Q?...?=` encoded-word.
///
/// The encoded-word is never split. When it is longer than
/// [`MAX_ENCODED_WORD_LEN`] a warning is logged and it is returned anyway.
///
/// ```
/// use mailmime::message::utf8_q;
///
/// assert_eq!(utf8_q::encode("Hello World"), "Hello World");
/// assert_eq!(utf8_q::encode("Grüße"), "=?UTF-8?Q?Gr=C3=BC=C3=9Fe?=");
/// ```
pub fn encode(s: &str) -> String {
    if is_printable_ascii_str(s) {
        return s.into();
    }

    let mut buf = Vec::with_capacity(PREFIX.len() + s.len() * 3 + SUFFIX.len());
    buf.extend_from_slice(PREFIX.as_bytes());
    for b in s.bytes() {
        match b {
            b' ' => buf.push(b'_'),
            b'_' | b'=' | b'?' => encoder::push_hex_escape(&mut buf, b),
            b if is_printable_ascii(b) => buf.push(b),
            b => encoder::push_hex_escape(&mut buf, b),
        }
    }
    buf.extend_from_slice(SUFFIX.as_bytes());

    if buf.len() > MAX_ENCODED_WORD_LEN {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            len = buf.len(),
            max = MAX_ENCODED_WORD_LEN,
            "encoded-word is too long"
        );
    }

    // only ASCII was pushed
    buf.into_iter().map(char::from).collect()
}
