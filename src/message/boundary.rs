//! Multipart boundaries

use std::{
    fmt::{self, Display},
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::Error;

/// Marker at the start of every generated boundary
pub const BOUNDARY_PREFIX: &str = "GO-";

/// Length of a generated boundary
pub const BOUNDARY_LEN: usize = 32;

/// Longest boundary allowed by [RFC 2046](https://tools.ietf.org/html/rfc2046#section-5.1.1)
pub const MAX_BOUNDARY_LEN: usize = 70;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Delimiter between the parts of a multipart body
///
/// Only characters which can appear unquoted in the `boundary` parameter
/// of a `Content-Type` header are accepted.
///
/// ```
/// use mailmime::message::Boundary;
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let boundary: Boundary = "GO-0123456789ABCDEF0123456789ABC".parse()?;
/// assert_eq!(boundary.as_str().len(), 32);
/// assert!("not a boundary".parse::<Boundary>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary(String);

impl Boundary {
    /// Validates `boundary`
    pub fn new<S: Into<String>>(boundary: S) -> Result<Self, Error> {
        let boundary = boundary.into();

        let valid = (1..=MAX_BOUNDARY_LEN).contains(&boundary.len())
            && boundary.bytes().all(is_boundary_char);
        if valid {
            Ok(Self(boundary))
        } else {
            Err(Error::InvalidBoundary(boundary))
        }
    }

    /// The boundary token
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_boundary_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'\'' | b'+' | b'_' | b'.' | b'-')
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Boundary {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of random multipart boundaries
///
/// Every container of a message should get its boundary from the same
/// generator. Generation needs `&mut self`: share a generator between
/// threads behind a `Mutex`, or give each thread its own.
#[derive(Debug, Clone)]
pub struct BoundaryGenerator {
    rng: fastrand::Rng,
}

impl BoundaryGenerator {
    /// Creates a generator seeded from the system clock
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        Self::with_seed(seed)
    }

    /// Creates a generator producing a reproducible sequence of boundaries
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Makes a new boundary: [`BOUNDARY_PREFIX`] followed by random uppercase hex digits
    pub fn generate(&mut self) -> Boundary {
        let mut boundary = String::with_capacity(BOUNDARY_LEN);
        boundary.push_str(BOUNDARY_PREFIX);
        boundary.extend(
            (BOUNDARY_PREFIX.len()..BOUNDARY_LEN)
                .map(|_| char::from(HEX_CHARS[self.rng.usize(..HEX_CHARS.len())])),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(%boundary, "generated multipart boundary");

        Boundary(boundary)
    }
}

impl Default for BoundaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
