//! Body encoders for `quoted-printable`, `base64` and `7bit` text

use std::mem;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::message::ascii::is_printable_ascii;

pub(crate) const CRLF: &[u8] = b"\r\n";

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Length of every `base64` body line, excluding the line break
pub const BASE64_LINE_LEN: usize = 76;

/// Once a quoted-printable line holds more than this many characters
/// the next character goes on a new line.
///
/// An escape adds at most 3 characters and the soft break adds one more,
/// which keeps every line within 76 columns.
pub const QP_SOFT_BREAK_AFTER: usize = 70;

/// Appends `=XX`, the uppercase hex escape of `b`
#[inline]
pub(crate) fn push_hex_escape(out: &mut Vec<u8>, b: u8) {
    out.push(b'=');
    out.push(HEX_CHARS[usize::from(b >> 4)]);
    out.push(HEX_CHARS[usize::from(b & 0x0F)]);
}

/// Encodes `input` as quoted-printable ([RFC 2045, section 6.7](https://tools.ietf.org/html/rfc2045#section-6.7))
///
/// `\n` becomes a hard `CRLF` line break, printable ASCII other than `=` is
/// kept as is and every other byte, `\r` included, is escaped as `=XX`.
/// Long lines are split with `=` `CRLF` soft breaks.
///
/// ```
/// use mailmime::message::encoder::quoted_printable;
///
/// assert_eq!(quoted_printable("café\n1+1=2"), b"caf=C3=A9\r\n1+1=3D2");
/// ```
pub fn quoted_printable<B: AsRef<[u8]>>(input: B) -> Vec<u8> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len() + input.len() / 2);
    let mut line_len = 0;

    for &b in input {
        if line_len > QP_SOFT_BREAK_AFTER {
            line_len = 0;
            out.push(b'=');
            out.extend_from_slice(CRLF);
        }

        if b == b'\n' {
            line_len = 0;
            out.extend_from_slice(CRLF);
        } else if is_printable_ascii(b) && b != b'=' {
            line_len += 1;
            out.push(b);
        } else {
            line_len += 3;
            push_hex_escape(&mut out, b);
        }
    }

    out
}

/// Encodes `input` as `base64`, wrapped at [`BASE64_LINE_LEN`] characters
///
/// Every line, the last one included, ends with `CRLF`.
pub fn base64<B: AsRef<[u8]>>(input: B) -> Vec<u8> {
    let encoded = STANDARD.encode(input);
    let lines = encoded.len() / BASE64_LINE_LEN + 1;

    let mut out = Vec::with_capacity(encoded.len() + lines * CRLF.len());
    let mut rest = encoded.as_bytes();
    while rest.len() > BASE64_LINE_LEN {
        let (line, tail) = rest.split_at(BASE64_LINE_LEN);
        out.extend_from_slice(line);
        out.extend_from_slice(CRLF);
        rest = tail;
    }
    out.extend_from_slice(rest);
    out.extend_from_slice(CRLF);

    out
}

/// Converts bare `\n` line endings of `string` to `CRLF`
///
/// Existing `CRLF` pairs are left alone.
pub fn crlf_line_endings(mut string: String) -> String {
    let indices = find_all_lf_char_indices(&string);

    for i in indices {
        // this relies on `indices` being in reverse order
        string.insert(i, '\r');
    }

    string
}

/// Find indices to all places where `\r` should be inserted
/// in order to make `s` have CRLF line endings
///
/// The list is reversed, which is more efficient.
fn find_all_lf_char_indices(s: &str) -> Vec<usize> {
    let mut indices = Vec::new();

    let mut found_lf = false;
    for (i, c) in s.char_indices().rev() {
        if mem::take(&mut found_lf) && c != '\r' {
            // the previous character was `\n`, but this isn't a `\r`
            indices.push(i + c.len_utf8());
        }

        found_lf = c == '\n';
    }

    if found_lf {
        // the first character is `\n`
        indices.push(0);
    }

    indices
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quoted_printable_ascii_is_untouched() {
        assert_eq!(quoted_printable("Hello, world!"), b"Hello, world!");
    }

    #[test]
    fn quoted_printable_escapes() {
        assert_eq!(quoted_printable("a=b"), b"a=3Db");
        assert_eq!(quoted_printable("tab\there"), b"tab=09here");
        assert_eq!(quoted_printable("café"), b"caf=C3=A9");
        assert_eq!(
            quoted_printable("Привет, мир!"),
            b"=D0=9F=D1=80=D0=B8=D0=B2=D0=B5=D1=82, =D0=BC=D0=B8=D1=80!".as_slice()
        );
    }

    #[test]
    fn quoted_printable_line_endings() {
        assert_eq!(quoted_printable("one\ntwo\n"), b"one\r\ntwo\r\n");
        assert_eq!(quoted_printable("one\r\ntwo"), b"one=0D\r\ntwo");
    }

    #[test]
    fn quoted_printable_soft_breaks() {
        let encoded = String::from_utf8(quoted_printable("x".repeat(150))).unwrap();
        let line = "x".repeat(71);

        assert_eq!(encoded, format!("{line}=\r\n{line}=\r\nxxxxxxxx"));
    }

    #[test]
    fn quoted_printable_escape_near_break() {
        let input = format!("{}ééé", "x".repeat(69));
        let encoded = String::from_utf8(quoted_printable(input)).unwrap();

        // the break may land inside a multibyte character
        assert_eq!(
            encoded,
            format!("{}=C3=\r\n=A9=C3=A9=C3=A9", "x".repeat(69))
        );
    }

    #[test]
    fn quoted_printable_hard_break_resets_line() {
        let input = format!("{}\n{}", "x".repeat(70), "y".repeat(70));

        assert_eq!(
            String::from_utf8(quoted_printable(input)).unwrap(),
            format!("{}\r\n{}", "x".repeat(70), "y".repeat(70))
        );
    }

    #[test]
    fn base64_short() {
        assert_eq!(base64("Hello World!"), b"SGVsbG8gV29ybGQh\r\n");
    }

    #[test]
    fn base64_empty() {
        assert_eq!(base64(""), b"\r\n");
    }

    #[test]
    fn base64_wrapping() {
        assert_eq!(
            String::from_utf8(base64(vec![0; 80])).unwrap(),
            concat!(
                "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\r\n",
                "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=\r\n"
            )
        );

        assert_eq!(
            String::from_utf8(base64(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9].repeat(20))).unwrap(),
            concat!(
                "AAECAwQFBgcICQABAgMEBQYHCAkAAQIDBAUGBwgJAAECAwQFBgcICQABAgMEBQYHCAkAAQIDBAUG\r\n",
                "BwgJAAECAwQFBgcICQABAgMEBQYHCAkAAQIDBAUGBwgJAAECAwQFBgcICQABAgMEBQYHCAkAAQID\r\n",
                "BAUGBwgJAAECAwQFBgcICQABAgMEBQYHCAkAAQIDBAUGBwgJAAECAwQFBgcICQABAgMEBQYHCAkA\r\n",
                "AQIDBAUGBwgJAAECAwQFBgcICQABAgMEBQYHCAk=\r\n"
            )
        );
    }

    #[test]
    fn base64_exact_line() {
        // 57 bytes encode to exactly one 76 character line
        let encoded = base64(vec![0xFF; 57]);

        assert_eq!(encoded.len(), BASE64_LINE_LEN + 2);
        assert!(encoded.ends_with(b"/\r\n"));
    }

    #[test]
    fn crlf() {
        assert_eq!(
            crlf_line_endings(String::from("Send me a ✉️\nwith\nmail!\n😀")),
            "Send me a ✉️\r\nwith\r\nmail!\r\n😀"
        );
    }

    #[test]
    fn harsh_crlf() {
        assert_eq!(
            crlf_line_endings(String::from("\n\nSend me a ✉️\r\n\nwith\n\nmail!\n\r\n😀")),
            "\r\n\r\nSend me a ✉️\r\n\r\nwith\r\n\r\nmail!\r\n\r\n😀"
        );
    }

    #[test]
    fn crlf_noop() {
        let s = String::from("\r\nalready\r\nfine\r\n");

        assert_eq!(crlf_line_endings(s.clone()), s);
    }
}
