//! Mailmime is a MIME body composer.
//!
//! It builds the body of an email message as a tree of parts and writes it
//! out as bytes ready to be sent:
//!
//! * `text/plain` and `text/html` parts, sent as `7bit` when they are plain
//!   ASCII and as `quoted-printable` otherwise
//! * binary parts and attachments, sent as `base64`
//! * `multipart/mixed`, `multipart/alternative` and `multipart/related`
//!   containers, nested as deeply as needed
//! * "Q" encoded-words for non-ASCII header values
//!
//! Delivery is left to an SMTP library.
//!
//! ## Features
//!
//! * **tracing** (enabled by default): logs boundary generation, message
//!   formatting and over-long encoded-words with the `tracing` crate
//!
//! ## Example
//!
//! ```rust
//! use mailmime::message::{BoundaryGenerator, Message, MultiPart};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut boundaries = BoundaryGenerator::new();
//!
//! let email = Message::builder()
//!     .from("NoBody <nobody@domain.tld>".parse()?)
//!     .to("Hei <hei@domain.tld>".parse()?)
//!     .subject("Happy new year")
//!     .body(
//!         MultiPart::alternative()
//!             .init_boundary(&mut boundaries)
//!             .plain("Be happy!")
//!             .html("<p>Be <b>happy</b>!</p>")
//!             .into(),
//!     )?;
//!
//! let bytes = email.formatted()?;
//! # assert!(bytes.ends_with(b"--\r\n\r\n\r\n"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod address;
pub mod error;
pub mod message;

pub use crate::{
    address::{Address, AddressError},
    error::Error,
    message::Message,
};
