use crate::{
    message::{
        ascii::is_printable_ascii_crlf_str,
        boundary::{Boundary, BoundaryGenerator},
        encoder::{self, CRLF},
        header::{ContentTransferEncoding, ContentType, Header, HeaderName, Headers},
    },
    Error,
};

/// First line of every multipart body, shown by clients without MIME support
pub const MULTIPART_PREAMBLE: &str = "This is a message with multiple parts in MIME format.";

static NO_HEADERS: Headers = Headers::new();

/// MIME part variants
///
/// Leaves are [`Part::Plain`], [`Part::Html`] and [`Part::Binary`];
/// [`Part::Multi`] holds an ordered list of child parts.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// `text/plain` body
    Plain(String),

    /// `text/html` body
    Html(String),

    /// Binary content, always sent as `base64`
    Binary(BinaryPart),

    /// Multiple parts of content
    Multi(MultiPart),
}

impl Part {
    /// Creates a `text/plain` part
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Part::Plain(text.into())
    }

    /// Creates a `text/html` part
    pub fn html<S: Into<String>>(html: S) -> Self {
        Part::Html(html.into())
    }

    /// Value of the `Content-Type` header
    ///
    /// Text parts use the `us-ascii` charset when they only hold printable
    /// ASCII and line breaks, `utf-8` otherwise. `None` means the header is
    /// left out.
    ///
    /// Fails with [`Error::MissingBoundary`] for a multipart without boundary.
    pub fn content_type(&self) -> Result<Option<String>, Error> {
        match self {
            Part::Plain(text) => Ok(Some(text_content_type("text/plain", text))),
            Part::Html(html) => Ok(Some(text_content_type("text/html", html))),
            Part::Binary(part) => Ok(part.content_type().map(ToString::to_string)),
            Part::Multi(part) => part.content_type().map(Some),
        }
    }

    /// Value of the `Content-Transfer-Encoding` header, `None` for multiparts
    pub fn transfer_encoding(&self) -> Option<ContentTransferEncoding> {
        match self {
            Part::Plain(text) | Part::Html(text) => Some(text_transfer_encoding(text)),
            Part::Binary(_) => Some(ContentTransferEncoding::Base64),
            Part::Multi(_) => None,
        }
    }

    /// The body, encoded and ready to be written after the headers
    ///
    /// For a multipart this is the complete serialization of its children.
    pub fn encoded_body(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.write_body(&mut out)?;
        Ok(out)
    }

    /// Headers written after `Content-Type` and `Content-Transfer-Encoding`
    ///
    /// Extra headers with either of those two names are not written, the
    /// values derived from the part always win.
    pub fn headers(&self) -> &Headers {
        match self {
            Part::Plain(_) | Part::Html(_) => &NO_HEADERS,
            Part::Binary(part) => part.headers(),
            Part::Multi(part) => part.headers(),
        }
    }

    /// Appends the part, headers and body, to `out`
    ///
    /// On error `out` may hold the beginning of the part.
    pub fn format(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        if let Some(content_type) = self.content_type()? {
            write_header(out, &ContentType::name(), &content_type);
        }
        if let Some(encoding) = self.transfer_encoding() {
            write_header(out, &ContentTransferEncoding::name(), encoding.as_str());
        }
        for (name, value) in self.headers().iter() {
            if is_computed_header(name) {
                continue;
            }
            write_header(out, name, value);
        }
        out.extend_from_slice(CRLF);

        self.write_body(out)?;

        // the next delimiter must start on its own line
        out.extend_from_slice(CRLF);
        out.extend_from_slice(CRLF);

        Ok(())
    }

    /// Get part content formatted for sending
    pub fn formatted(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.format(&mut out)?;
        Ok(out)
    }

    fn write_body(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            Part::Plain(text) | Part::Html(text) => out.extend_from_slice(&encode_text(text)),
            Part::Binary(part) => out.extend_from_slice(&encoder::base64(part.body())),
            Part::Multi(part) => part.write_body(out)?,
        }

        Ok(())
    }
}

fn text_content_type(essence: &str, text: &str) -> String {
    let charset = if is_printable_ascii_crlf_str(text) {
        "us-ascii"
    } else {
        "utf-8"
    };

    format!("{essence}; charset=\"{charset}\"")
}

fn text_transfer_encoding(text: &str) -> ContentTransferEncoding {
    if is_printable_ascii_crlf_str(text) {
        ContentTransferEncoding::SevenBit
    } else {
        ContentTransferEncoding::QuotedPrintable
    }
}

fn encode_text(text: &str) -> Vec<u8> {
    match text_transfer_encoding(text) {
        ContentTransferEncoding::SevenBit => encoder::crlf_line_endings(text.to_owned()).into(),
        _ => encoder::quoted_printable(text),
    }
}

fn is_computed_header(name: &str) -> bool {
    name.eq_ignore_ascii_case(&ContentType::name())
        || name.eq_ignore_ascii_case(&ContentTransferEncoding::name())
}

fn write_header(out: &mut Vec<u8>, name: &str, value: &str) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(CRLF);
}

impl From<BinaryPart> for Part {
    fn from(part: BinaryPart) -> Self {
        Part::Binary(part)
    }
}

impl From<MultiPart> for Part {
    fn from(part: MultiPart) -> Self {
        Part::Multi(part)
    }
}

/// Binary content with a caller supplied type
///
/// # Example
///
/// ```
/// use mailmime::message::{header::ContentType, BinaryPart, Part};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let part = Part::from(BinaryPart::new(
///     Some(ContentType::parse("application/octet-stream")?),
///     vec![0, 1, 2, 3],
/// ));
/// assert_eq!(
///     part.formatted()?,
///     b"Content-Type: application/octet-stream\r\nContent-Transfer-Encoding: base64\r\n\r\nAAECAw==\r\n\r\n\r\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPart {
    content_type: Option<ContentType>,
    body: Vec<u8>,
    headers: Headers,
}

impl BinaryPart {
    /// Creates a binary part, `content_type` of `None` leaves the header out
    pub fn new<B: Into<Vec<u8>>>(content_type: Option<ContentType>, body: B) -> Self {
        Self {
            content_type,
            body: body.into(),
            headers: Headers::new(),
        }
    }

    /// Set an extra header
    ///
    /// `Content-Type` and `Content-Transfer-Encoding` are ignored when the
    /// part is written.
    pub fn header<H: Header>(mut self, header: H) -> Self {
        self.headers.set(header);
        self
    }

    /// Set an extra header by name
    pub fn raw_header(mut self, name: HeaderName, value: String) -> Self {
        self.headers.set_raw(name, value);
        self
    }

    /// The declared content type
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// The raw, not yet encoded, content
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The extra headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// The kind of multipart
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MultiPartKind {
    /// Mixed kind to combine unrelated content parts
    ///
    /// For example this kind can be used to mix email message and attachments.
    Mixed,

    /// Alternative kind to join several variants of same email contents.
    ///
    /// Parts go from the least to the most faithful version, usually
    /// plain text first and HTML last.
    Alternative,

    /// Related kind to mix content and related resources.
    ///
    /// For example, you can include images into HTML content using that.
    Related,
}

impl MultiPartKind {
    /// The `multipart` subtype
    pub const fn subtype(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Alternative => "alternative",
            Self::Related => "related",
        }
    }
}

/// Multipart builder
///
/// Collects the boundary, headers and parts, then [`build`](Self::build)
/// turns it into an immutable [`MultiPart`].
#[derive(Debug, Clone)]
pub struct MultiPartBuilder {
    kind: MultiPartKind,
    boundary: Option<Boundary>,
    headers: Headers,
    parts: Vec<Part>,
}

impl MultiPartBuilder {
    /// Creates a multipart builder without boundary or parts
    pub fn new(kind: MultiPartKind) -> Self {
        Self {
            kind,
            boundary: None,
            headers: Headers::new(),
            parts: Vec::new(),
        }
    }

    /// Set custom boundary
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Generate the boundary using `generator`
    ///
    /// Does nothing if a boundary was already set.
    pub fn init_boundary(mut self, generator: &mut BoundaryGenerator) -> Self {
        if self.boundary.is_none() {
            self.boundary = Some(generator.generate());
        }
        self
    }

    /// Set a header
    ///
    /// `Content-Type` and `Content-Transfer-Encoding` are ignored when the
    /// part is written.
    pub fn header<H: Header>(mut self, header: H) -> Self {
        self.headers.set(header);
        self
    }

    /// Set a header by name
    pub fn raw_header(mut self, name: HeaderName, value: String) -> Self {
        self.headers.set_raw(name, value);
        self
    }

    /// Add a part after the previous ones
    pub fn part<P: Into<Part>>(mut self, part: P) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Add a `text/plain` part
    pub fn plain<S: Into<String>>(self, text: S) -> Self {
        self.part(Part::plain(text))
    }

    /// Add a `text/html` part
    pub fn html<S: Into<String>>(self, html: S) -> Self {
        self.part(Part::html(html))
    }

    /// Creates the multipart
    pub fn build(self) -> MultiPart {
        MultiPart {
            kind: self.kind,
            boundary: self.boundary,
            headers: self.headers,
            parts: self.parts,
        }
    }
}

impl From<MultiPartBuilder> for Part {
    fn from(builder: MultiPartBuilder) -> Self {
        Part::Multi(builder.build())
    }
}

/// Multipart variant with parts
///
/// # Example
///
/// ```
/// use mailmime::message::{BoundaryGenerator, MultiPart, Part};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut boundaries = BoundaryGenerator::new();
///
/// let body = MultiPart::alternative()
///     .init_boundary(&mut boundaries)
///     .plain("Hello, world!")
///     .html("<p>Hello, <b>world</b>!</p>")
///     .build();
///
/// let formatted = Part::from(body).formatted()?;
/// assert!(formatted.starts_with(b"Content-Type: multipart/alternative; boundary=GO-"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPart {
    kind: MultiPartKind,
    boundary: Option<Boundary>,
    headers: Headers,
    parts: Vec<Part>,
}

impl MultiPart {
    /// Creates multipart builder
    pub fn builder(kind: MultiPartKind) -> MultiPartBuilder {
        MultiPartBuilder::new(kind)
    }

    /// Creates mixed multipart builder
    ///
    /// Shortcut for `MultiPart::builder(MultiPartKind::Mixed)`
    pub fn mixed() -> MultiPartBuilder {
        MultiPart::builder(MultiPartKind::Mixed)
    }

    /// Creates alternative multipart builder
    ///
    /// Shortcut for `MultiPart::builder(MultiPartKind::Alternative)`
    pub fn alternative() -> MultiPartBuilder {
        MultiPart::builder(MultiPartKind::Alternative)
    }

    /// Creates related multipart builder
    ///
    /// Shortcut for `MultiPart::builder(MultiPartKind::Related)`
    pub fn related() -> MultiPartBuilder {
        MultiPart::builder(MultiPartKind::Related)
    }

    /// The kind of multipart
    pub fn kind(&self) -> MultiPartKind {
        self.kind
    }

    /// Get the boundary of multipart contents
    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    /// Get the headers from the multipart
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get the parts from the multipart
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Value of the `Content-Type` header
    pub fn content_type(&self) -> Result<String, Error> {
        let boundary = self.boundary.as_ref().ok_or(Error::MissingBoundary)?;

        Ok(format!(
            "multipart/{}; boundary={}",
            self.kind.subtype(),
            boundary
        ))
    }

    /// The preamble followed by every part between boundary delimiters
    pub fn encoded_body(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.write_body(&mut out)?;
        Ok(out)
    }

    fn write_body(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        let boundary = self.boundary.as_ref().ok_or(Error::MissingBoundary)?;

        out.extend_from_slice(MULTIPART_PREAMBLE.as_bytes());
        out.extend_from_slice(CRLF);

        for part in &self.parts {
            out.extend_from_slice(b"--");
            out.extend_from_slice(boundary.as_str().as_bytes());
            out.extend_from_slice(CRLF);
            part.format(out)?;
        }

        out.extend_from_slice(b"--");
        out.extend_from_slice(boundary.as_str().as_bytes());
        out.extend_from_slice(b"--");
        out.extend_from_slice(CRLF);

        Ok(())
    }
}
