use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter as FmtFormatter, Result as FmtResult, Write},
    str::FromStr,
};

use mime::Mime;

use super::{Header, HeaderName};
use crate::message::ascii::is_printable_ascii_str;

/// `Content-Type` of a part, as supplied by the caller
///
/// ```
/// use mailmime::message::header::ContentType;
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let content_type = ContentType::parse("image/png")?;
/// assert_eq!(content_type.to_string(), "image/png");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType(Mime);

impl ContentType {
    /// Parses a MIME type, with optional parameters
    pub fn parse(s: &str) -> Result<Self, ContentTypeErr> {
        s.parse().map(Self).map_err(ContentTypeErr)
    }

    /// Wraps an already parsed MIME type
    pub fn from_mime(mime: Mime) -> Self {
        Self(mime)
    }

    /// The underlying MIME type
    pub fn as_mime(&self) -> &Mime {
        &self.0
    }
}

impl Header for ContentType {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_static("Content-Type")
    }

    fn display(&self) -> String {
        self.0.to_string()
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ContentType {
    type Err = ContentTypeErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for ContentType {
    type Error = ContentTypeErr;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Mime> for ContentType {
    fn from(mime: Mime) -> Self {
        Self::from_mime(mime)
    }
}

/// An error occurred while trying to parse a [`ContentType`]
#[derive(Debug)]
pub struct ContentTypeErr(mime::FromStrError);

impl StdError for ContentTypeErr {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

impl Display for ContentTypeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// `Content-Transfer-Encoding` of a body
///
/// Parts choose it themselves from their content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContentTransferEncoding {
    /// Printable ASCII text with `CRLF` line breaks
    SevenBit,
    /// Text with `=XX` escapes, [RFC 2045, section 6.7](https://tools.ietf.org/html/rfc2045#section-6.7)
    QuotedPrintable,
    /// Binary data, [RFC 2045, section 6.8](https://tools.ietf.org/html/rfc2045#section-6.8)
    Base64,
}

impl ContentTransferEncoding {
    /// The header value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SevenBit => "7bit",
            Self::QuotedPrintable => "quoted-printable",
            Self::Base64 => "base64",
        }
    }
}

impl Display for ContentTransferEncoding {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Header for ContentTransferEncoding {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_static("Content-Transfer-Encoding")
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

/// `Content-Disposition` header, defined in [RFC 2183](https://tools.ietf.org/html/rfc2183)
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDisposition {
    disposition: DispositionType,
    file_name: Option<String>,
}

/// How the recipient's client should present a part
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DispositionType {
    /// Shown as part of the message
    Inline,
    /// Offered as a separate file
    Attachment,
}

impl ContentDisposition {
    /// An inline part without file name
    pub fn inline() -> Self {
        Self {
            disposition: DispositionType::Inline,
            file_name: None,
        }
    }

    /// An inline part with a file name
    pub fn inline_with_name(file_name: &str) -> Self {
        Self {
            disposition: DispositionType::Inline,
            file_name: Some(file_name.into()),
        }
    }

    /// An attachment with a file name
    pub fn attachment(file_name: &str) -> Self {
        Self {
            disposition: DispositionType::Attachment,
            file_name: Some(file_name.into()),
        }
    }

    /// The disposition type
    pub fn disposition(&self) -> DispositionType {
        self.disposition
    }

    /// The file name, if any
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

impl Header for ContentDisposition {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_static("Content-Disposition")
    }

    fn display(&self) -> String {
        let type_str = match self.disposition {
            DispositionType::Inline => "inline",
            DispositionType::Attachment => "attachment",
        };

        match &self.file_name {
            Some(file_name) if is_printable_ascii_str(file_name) => {
                let file_name = file_name.replace('\\', "\\\\").replace('"', "\\\"");
                format!("{type_str}; filename=\"{file_name}\"")
            }
            Some(file_name) => format!("{type_str}; filename*={}", ext_value(file_name)),
            None => type_str.to_owned(),
        }
    }
}

/// Writes `value` as an RFC 2231 extended parameter value, `utf-8''` followed
/// by the percent-encoded bytes
// https://tools.ietf.org/html/rfc2231#section-4
fn ext_value(value: &str) -> String {
    let mut out = String::from("utf-8''");
    for b in value.bytes() {
        if is_attribute_char(b) {
            out.push(char::from(b));
        } else {
            // writing to a String never fails
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

const fn is_attribute_char(b: u8) -> bool {
    matches!(
        b,
        b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
    )
}
