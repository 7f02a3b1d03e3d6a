use std::time::SystemTime;

use httpdate::HttpDate;

use super::{Header, HeaderName};

/// Message `Date` header
///
/// Defined in [RFC5322](https://tools.ietf.org/html/rfc5322#section-3.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(HttpDate);

impl Date {
    /// Build a `Date` from [`SystemTime`]
    pub fn new(st: SystemTime) -> Self {
        Self(st.into())
    }
}

impl Header for Date {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_static("Date")
    }

    fn display(&self) -> String {
        let mut s = self.0.to_string();
        if s.ends_with(" GMT") {
            // `GMT` is obsolete zone syntax in RFC 5322, section 4.3
            s.truncate(s.len() - "GMT".len());
            s.push_str("-0000");
        }
        s
    }
}

impl From<SystemTime> for Date {
    fn from(st: SystemTime) -> Self {
        Self::new(st)
    }
}
