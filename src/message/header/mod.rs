//! Headers used in MIME parts and email messages
// https://tools.ietf.org/html/rfc5322#section-2.2

use std::{
    borrow::Cow,
    fmt::{self, Display},
    ops::Deref,
    slice::Iter,
};

use crate::{message::utf8_q, Error};

mod content;
mod date;
mod mailbox;
mod special;
mod textual;

pub use self::{content::*, date::*, mailbox::*, special::*, textual::*};

/// A typed header
pub trait Header: Clone {
    /// Field name of the header
    fn name() -> HeaderName;

    /// Field value, as it is written out
    fn display(&self) -> String;
}

/// Ordered list of headers
///
/// Headers are written out in insertion order, so formatting the same
/// list twice always gives the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    headers: Vec<(HeaderName, String)>,
}

impl Headers {
    /// Creates an empty list of headers
    #[inline]
    pub const fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Sets the typed header `header`, replacing any previous value
    pub fn set<H: Header>(&mut self, header: H) {
        self.set_value(H::name(), header.display());
    }

    /// Returns `true` if the header `H` is present
    pub fn has<H: Header>(&self) -> bool {
        self.get_raw(&H::name()).is_some()
    }

    /// Returns the raw value of the header called `name`
    ///
    /// Header names are compared case-insensitively.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.find_header(name).map(|(_name, value)| value)
    }

    /// Appends `value` to the header called `name`, or adds it if missing
    ///
    /// A value containing `\r` or `\n` is written as a "Q" encoded-word.
    pub fn insert_raw(&mut self, name: HeaderName, value: String) {
        let value = single_line(value);
        match self.find_header_mut(&name) {
            Some(prev_value) => {
                prev_value.push_str(", ");
                prev_value.push_str(&value);
            }
            None => self.headers.push((name, value)),
        }
    }

    /// Sets the header called `name` to `value`, replacing any previous value
    ///
    /// A value containing `\r` or `\n` is written as a "Q" encoded-word.
    pub fn set_raw(&mut self, name: HeaderName, value: String) {
        self.set_value(name, single_line(value));
    }

    /// Sets a value that is already known to be a valid field body
    pub(crate) fn set_value(&mut self, name: HeaderName, value: String) {
        match self.find_header_mut(&name) {
            Some(current_value) => {
                *current_value = value;
            }
            None => {
                self.headers.push((name, value));
            }
        }
    }

    /// Removes the header called `name`
    pub fn remove_raw(&mut self, name: &str) -> Option<(HeaderName, String)> {
        self.find_header_index(name).map(|i| self.headers.remove(i))
    }

    /// Iterates over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &str)> {
        HeadersIter {
            inner: self.headers.iter(),
        }
    }

    /// Number of headers
    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if there are no headers
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn find_header(&self, name: &str) -> Option<(&HeaderName, &str)> {
        self.headers
            .iter()
            .find(|(name_, _value)| name.eq_ignore_ascii_case(name_))
            .map(|t| (&t.0, t.1.as_str()))
    }

    fn find_header_mut(&mut self, name: &str) -> Option<&mut String> {
        self.headers
            .iter_mut()
            .find(|(name_, _value)| name.eq_ignore_ascii_case(name_))
            .map(|t| &mut t.1)
    }

    fn find_header_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|(name_, _value)| name.eq_ignore_ascii_case(name_))
    }
}

/// Keeps a raw value from starting new header lines
fn single_line(value: String) -> String {
    if value.contains(|c: char| c == '\r' || c == '\n') {
        utf8_q::encode(&value)
    } else {
        value
    }
}

struct HeadersIter<'a> {
    inner: Iter<'a, (HeaderName, String)>,
}

impl<'a> Iterator for HeadersIter<'a> {
    type Item = (&'a HeaderName, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name, value.as_str()))
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.headers {
            f.write_str(name)?;
            f.write_str(": ")?;
            f.write_str(value)?;
            f.write_str("\r\n")?;
        }

        Ok(())
    }
}

/// A valid header name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderName(Cow<'static, str>);

impl HeaderName {
    /// Creates a new header name
    ///
    /// The name must be printable ASCII, without spaces or `:`.
    pub fn new_from_ascii(ascii: String) -> Result<Self, Error> {
        if is_valid_name(&ascii) {
            Ok(Self(Cow::Owned(ascii)))
        } else {
            Err(Error::InvalidHeaderName(ascii))
        }
    }

    /// Creates a new header name from a well-known name
    pub(crate) fn new_from_ascii_static(ascii: &'static str) -> Self {
        debug_assert!(is_valid_name(ascii), "invalid header name {ascii:?}");

        Self(Cow::Borrowed(ascii))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| matches!(b, 33..=126) && b != b':')
}

impl Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Deref for HeaderName {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for HeaderName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}
