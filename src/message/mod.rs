//! Provides a strongly typed way to build MIME bodies and messages
//!
//! ## Usage
//!
//! ### Plain body
//!
//! The easiest way of creating a message, which uses a plain text body.
//!
//! ```rust
//! use mailmime::message::{Message, Part};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let m = Message::builder()
//!     .from("NoBody <nobody@domain.tld>".parse()?)
//!     .to("Hei <hei@domain.tld>".parse()?)
//!     .subject("Happy new year")
//!     .body(Part::plain("Be happy!"))?;
//!
//! let formatted = m.formatted()?;
//! # Ok(())
//! # }
//! ```
//!
//! Which produces:
//!
//! ```sh
//! From: NoBody <nobody@domain.tld>
//! To: Hei <hei@domain.tld>
//! Subject: Happy new year
//! Date: Sat, 12 Dec 2020 16:33:19 -0000
//! MIME-Version: 1.0
//! Content-Type: text/plain; charset="us-ascii"
//! Content-Transfer-Encoding: 7bit
//!
//! Be happy!
//!
//! ```
//!
//! Non-ASCII header data is written as "Q" encoded-words, see [`utf8_q`].
//!
//! The `Content-Transfer-Encoding` of text is `7bit` when the text is
//! printable ASCII and `quoted-printable` otherwise. Binary parts always
//! use `base64`.
//!
//! ### Plain and HTML body with an inline image and an attachment
//!
//! Every multipart needs a boundary before it can be written out. Take
//! them all from one [`BoundaryGenerator`].
//!
//! ```rust
//! use mailmime::message::{
//!     header::ContentType, Attachment, BoundaryGenerator, Message, MultiPart,
//! };
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut boundaries = BoundaryGenerator::new();
//! let image = vec![0xFF, 0xD8, 0xFF, 0xE0];
//!
//! let body = MultiPart::mixed()
//!     .init_boundary(&mut boundaries)
//!     .part(
//!         MultiPart::alternative()
//!             .init_boundary(&mut boundaries)
//!             .plain("Hello, world! :)")
//!             .part(
//!                 MultiPart::related()
//!                     .init_boundary(&mut boundaries)
//!                     .html("<p>Hello, <b>world</b>! <img src=\"cid:smiley\"></p>")
//!                     .part(
//!                         Attachment::new_inline(String::from("smiley"))
//!                             .filename(String::from("Smiley.jpg"))
//!                             .body(ContentType::parse("image/jpeg")?, image),
//!                     ),
//!             ),
//!     )
//!     .part(
//!         Attachment::new(String::from("notes.txt"))
//!             .body(ContentType::parse("text/plain")?, "Some notes"),
//!     )
//!     .build();
//!
//! let m = Message::builder()
//!     .from("NoBody <nobody@domain.tld>".parse()?)
//!     .to("Hei <hei@domain.tld>".parse()?)
//!     .subject("Hello")
//!     .body(body.into())?;
//!
//! let formatted = m.formatted()?;
//! # Ok(())
//! # }
//! ```

use std::time::SystemTime;

pub use self::{
    attachment::Attachment,
    boundary::{Boundary, BoundaryGenerator, BOUNDARY_LEN, BOUNDARY_PREFIX, MAX_BOUNDARY_LEN},
    mailbox::{Mailbox, Mailboxes},
    mimebody::{
        BinaryPart, MultiPart, MultiPartBuilder, MultiPartKind, Part, MULTIPART_PREAMBLE,
    },
};
use crate::{
    address::Address,
    message::header::{Date, Header, HeaderName, Headers, Subject},
    Error,
};

pub mod ascii;
mod attachment;
mod boundary;
pub mod encoder;
pub mod header;
mod mailbox;
mod mimebody;
pub mod utf8_q;

/// A builder for messages
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    from: Mailboxes,
    to: Mailboxes,
    cc: Mailboxes,
    bcc: Mailboxes,
    subject: Option<String>,
    date: Option<SystemTime>,
    headers: Headers,
}

impl MessageBuilder {
    /// Creates a new default message builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mailbox to the `From` header
    pub fn from(mut self, mbox: Mailbox) -> Self {
        self.from.push(mbox);
        self
    }

    /// Add a mailbox to the `To` header
    pub fn to(mut self, mbox: Mailbox) -> Self {
        self.to.push(mbox);
        self
    }

    /// Add a mailbox to the `Cc` header
    pub fn cc(mut self, mbox: Mailbox) -> Self {
        self.cc.push(mbox);
        self
    }

    /// Add a mailbox to the `Bcc` header
    pub fn bcc(mut self, mbox: Mailbox) -> Self {
        self.bcc.push(mbox);
        self
    }

    /// Set the `Subject` header, "Q" encoded when it isn't printable ASCII
    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the `Date` header
    ///
    /// When unset the date the message is built is used.
    pub fn date(mut self, date: SystemTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Set custom header to message
    ///
    /// Written after the `Date` header, in the order they were added.
    pub fn header<H: Header>(mut self, header: H) -> Self {
        self.headers.set(header);
        self
    }

    /// Set custom header to message, by name
    ///
    /// See [`Headers::set_raw`] for how line breaks in `value` are written.
    pub fn raw_header(mut self, name: HeaderName, value: String) -> Self {
        self.headers.set_raw(name, value);
        self
    }

    /// Create [`Message`] with `body` as its root part
    ///
    /// Fails without a `From` mailbox, or without any `To`, `Cc` or `Bcc`
    /// mailbox.
    pub fn body(self, body: Part) -> Result<Message, Error> {
        // https://tools.ietf.org/html/rfc5322#section-3.6
        if self.from.is_empty() {
            return Err(Error::MissingFrom);
        }
        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(Error::MissingTo);
        }

        let mut headers = Headers::new();
        headers.set(header::From(self.from));
        if !self.to.is_empty() {
            headers.set(header::To(self.to.clone()));
        }
        if !self.cc.is_empty() {
            headers.set(header::Cc(self.cc.clone()));
        }
        if !self.bcc.is_empty() {
            headers.set(header::Bcc(self.bcc.clone()));
        }
        if let Some(subject) = self.subject {
            headers.set(Subject::from(subject));
        }
        headers.set(Date::new(self.date.unwrap_or_else(SystemTime::now)));
        for (name, value) in self.headers.iter() {
            headers.set_value(name.clone(), value.to_owned());
        }
        headers.set(header::MIME_VERSION_1_0);

        let recipients = self
            .to
            .into_iter()
            .chain(self.cc)
            .chain(self.bcc)
            .map(|mbox| mbox.email)
            .collect();

        Ok(Message {
            headers,
            body,
            recipients,
        })
    }
}

/// Email message which can be formatted
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    headers: Headers,
    body: Part,
    recipients: Vec<Address>,
}

impl Message {
    /// Create a new message builder without headers
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Get the headers from the Message, `MIME-Version` included
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get the root part
    pub fn body(&self) -> &Part {
        &self.body
    }

    /// Every `To`, `Cc` and `Bcc` address, in that order
    pub fn recipients(&self) -> &[Address] {
        &self.recipients
    }

    /// Get message content formatted for sending
    pub fn formatted(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        out.extend_from_slice(self.headers.to_string().as_bytes());
        self.body.format(&mut out)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = out.len(),
            recipients = self.recipients.len(),
            "formatted message"
        );

        Ok(out)
    }
}
