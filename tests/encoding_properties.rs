use base64::{engine::general_purpose::STANDARD, Engine as _};
use mailmime::message::{
    ascii::is_printable_ascii_str,
    encoder::{self, quoted_printable, BASE64_LINE_LEN},
    utf8_q, BoundaryGenerator, Part, BOUNDARY_LEN, BOUNDARY_PREFIX,
};
use proptest::prelude::*;

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("not an uppercase hex digit: {digit}"),
    }
}

/// Replaces `=XX` escapes, and `_` when `underscore_is_space`
fn unescape(encoded: &[u8], underscore_is_space: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len());
    let mut i = 0;
    while i < encoded.len() {
        match encoded[i] {
            b'=' => {
                out.push(hex_value(encoded[i + 1]) << 4 | hex_value(encoded[i + 2]));
                i += 3;
            }
            b'_' if underscore_is_space => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

fn decode_q(word: &str) -> Vec<u8> {
    let payload = word
        .strip_prefix("=?UTF-8?Q?")
        .and_then(|w| w.strip_suffix("?="))
        .unwrap();
    unescape(payload.as_bytes(), true)
}

fn decode_quoted_printable(encoded: &[u8]) -> Vec<u8> {
    let text = String::from_utf8(encoded.to_vec()).unwrap();
    let text = text.replace("=\r\n", "").replace("\r\n", "\n");
    unescape(text.as_bytes(), false)
}

fn lines(encoded: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = encoded;
    while let Some(pos) = rest.windows(2).position(|w| w == b"\r\n") {
        lines.push(&rest[..pos]);
        rest = &rest[pos + 2..];
    }
    lines.push(rest);
    lines
}

proptest! {
    #[test]
    fn q_encoding_round_trips(s in any::<String>()) {
        let encoded = utf8_q::encode(&s);

        prop_assert!(is_printable_ascii_str(&encoded));
        if is_printable_ascii_str(&s) {
            prop_assert_eq!(encoded, s);
        } else {
            prop_assert_eq!(decode_q(&encoded), s.as_bytes());
        }
    }

    #[test]
    fn q_encoding_keeps_printable_ascii(s in "[ -~]*") {
        prop_assert_eq!(utf8_q::encode(&s), s);
    }

    #[test]
    fn quoted_printable_lines_fit(input in any::<Vec<u8>>()) {
        let encoded = quoted_printable(&input);

        for line in lines(&encoded) {
            prop_assert!(line.len() <= 76, "line of {} characters", line.len());
            prop_assert!(line.iter().all(|&b| (32..=126).contains(&b)));
        }
    }

    #[test]
    fn quoted_printable_round_trips(input in any::<Vec<u8>>()) {
        prop_assert_eq!(decode_quoted_printable(&quoted_printable(&input)), input);
    }

    #[test]
    fn quoted_printable_text_round_trips(input in "[a-z =\n\r\t]*") {
        prop_assert_eq!(
            decode_quoted_printable(&quoted_printable(&input)),
            input.as_bytes()
        );
    }

    #[test]
    fn base64_lines(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let encoded = encoder::base64(&input);
        prop_assert!(encoded.ends_with(b"\r\n"));

        let lines = lines(&encoded[..encoded.len() - 2]);
        let (last, full) = lines.split_last().unwrap();
        prop_assert!(full.iter().all(|line| line.len() == BASE64_LINE_LEN));
        prop_assert!(last.len() <= BASE64_LINE_LEN);

        let joined: Vec<u8> = lines.concat();
        prop_assert_eq!(STANDARD.decode(joined).unwrap(), input);
    }

    #[test]
    fn printable_ascii_classifier(s in any::<String>()) {
        prop_assert_eq!(
            is_printable_ascii_str(&s),
            s.bytes().all(|b| (32..=126).contains(&b))
        );
    }

    #[test]
    fn generated_boundaries(seed in any::<u64>()) {
        let boundary = BoundaryGenerator::with_seed(seed).generate();

        prop_assert_eq!(boundary.as_str().len(), BOUNDARY_LEN);
        prop_assert!(boundary.as_str().starts_with(BOUNDARY_PREFIX));
        prop_assert!(boundary.as_str().parse::<mailmime::message::Boundary>().is_ok());
    }

    #[test]
    fn text_parts_are_ascii_and_stable(s in any::<String>()) {
        let part = Part::plain(s);
        let formatted = part.formatted().unwrap();

        prop_assert!(formatted.is_ascii());
        prop_assert!(formatted.ends_with(b"\r\n\r\n"));
        prop_assert_eq!(formatted, part.formatted().unwrap());
    }
}
