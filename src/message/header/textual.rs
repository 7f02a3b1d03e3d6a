use super::{Header, HeaderName};
use crate::message::utf8_q;

macro_rules! text_header {
    ($(#[$attr:meta])* Header($type: ident, $name: expr, $display: expr)) => {
        #[derive(Debug, Clone, PartialEq)]
        $(#[$attr])*
        pub struct $type(String);

        impl Header for $type {
            fn name() -> HeaderName {
                HeaderName::new_from_ascii_static($name)
            }

            fn display(&self) -> String {
                $display(self.0.as_str())
            }
        }

        impl From<String> for $type {
            #[inline]
            fn from(text: String) -> Self {
                Self(text)
            }
        }

        impl AsRef<str> for $type {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

text_header!(
    /// `Subject` of the message, defined in [RFC5322](https://tools.ietf.org/html/rfc5322#section-3.6.5)
    ///
    /// Non-ASCII subjects are written as a "Q" encoded-word.
    Header(Subject, "Subject", utf8_q::encode)
);
text_header! {
    /// `Content-ID` header, defined in [RFC2045](https://tools.ietf.org/html/rfc2045#section-7)
    ///
    /// The value is wrapped in angle brackets.
    Header(ContentId, "Content-ID", |id: &str| format!("<{id}>"))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{ContentId, Subject};
    use crate::message::header::Headers;

    #[test]
    fn format_ascii() {
        let mut headers = Headers::new();
        headers.set(Subject::from(String::from("Sample subject")));

        assert_eq!(headers.to_string(), "Subject: Sample subject\r\n");
    }

    #[test]
    fn format_utf8() {
        let mut headers = Headers::new();
        headers.set(Subject::from(String::from("Тема")));

        assert_eq!(
            headers.to_string(),
            "Subject: =?UTF-8?Q?=D0=A2=D0=B5=D0=BC=D0=B0?=\r\n"
        );
    }

    #[test]
    fn format_content_id() {
        let mut headers = Headers::new();
        headers.set(ContentId::from(String::from("Smiley.jpg")));

        assert_eq!(headers.to_string(), "Content-ID: <Smiley.jpg>\r\n");
    }
}
