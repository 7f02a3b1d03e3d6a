use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
    str::FromStr,
};

use crate::{
    address::{Address, AddressError},
    message::utf8_q,
};

/// Represents an email address with an optional name for the sender/recipient.
///
/// The name is "Q" encoded when it isn't printable ASCII.
///
/// # Examples
///
/// ```
/// use mailmime::{message::Mailbox, Address};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mailbox = Mailbox::new(Some("Jörg".into()), Address::new("joerg", "example.com")?);
/// assert_eq!(mailbox.to_string(), "=?UTF-8?Q?J=C3=B6rg?= <joerg@example.com>");
///
/// let mailbox: Mailbox = "You <you@example.com>".parse()?;
/// assert_eq!(mailbox.name.as_deref(), Some("You"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Mailbox {
    /// The name associated with the address.
    pub name: Option<String>,

    /// The email address itself.
    pub email: Address,
}

impl Mailbox {
    /// Creates a new `Mailbox` using an email address and the name of the recipient if there is one.
    pub fn new(name: Option<String>, email: Address) -> Self {
        Mailbox { name, email }
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                write!(f, "{} <{}>", utf8_q::encode(name), self.email)
            }
            _ => Display::fmt(&self.email, f),
        }
    }
}

impl From<Address> for Mailbox {
    fn from(email: Address) -> Self {
        Self::new(None, email)
    }
}

impl<S: Into<String>, T: Into<String>> TryFrom<(S, T)> for Mailbox {
    type Error = AddressError;

    fn try_from((name, address): (S, T)) -> Result<Self, Self::Error> {
        Ok(Mailbox::new(
            Some(name.into()),
            Address::try_from(address.into())?,
        ))
    }
}

/// Accepts `user@domain` and `Name <user@domain>`
impl FromStr for Mailbox {
    type Err = AddressError;

    fn from_str(src: &str) -> Result<Mailbox, Self::Err> {
        let src = src.trim();

        match src.strip_suffix('>').and_then(|s| s.rsplit_once('<')) {
            Some((name, address)) => {
                let name = name.trim().trim_matches('"').trim();
                let name = (!name.is_empty()).then(|| name.to_owned());

                Ok(Mailbox::new(name, address.trim().parse()?))
            }
            None => Ok(Mailbox::new(None, src.parse()?)),
        }
    }
}

/// List of [`Mailbox`]es
///
/// Displayed one per line, separated by `,` and folded with `CRLF` and a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mailboxes(Vec<Mailbox>);

impl Mailboxes {
    /// Creates an empty list
    pub fn new() -> Self {
        Mailboxes(Vec::new())
    }

    /// Adds a mailbox to the list
    pub fn with(mut self, mbox: Mailbox) -> Self {
        self.0.push(mbox);
        self
    }

    /// Adds a mailbox to the list
    pub fn push(&mut self, mbox: Mailbox) {
        self.0.push(mbox);
    }

    /// Iterates over the mailboxes
    pub fn iter(&self) -> Iter<'_, Mailbox> {
        self.0.iter()
    }

    /// Returns `true` if there are no mailboxes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Mailbox> for Mailboxes {
    fn from(mailbox: Mailbox) -> Self {
        Mailboxes(vec![mailbox])
    }
}

impl From<Vec<Mailbox>> for Mailboxes {
    fn from(vec: Vec<Mailbox>) -> Self {
        Mailboxes(vec)
    }
}

impl IntoIterator for Mailboxes {
    type Item = Mailbox;
    type IntoIter = std::vec::IntoIter<Mailbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mailboxes {
    type Item = &'a Mailbox;
    type IntoIter = Iter<'a, Mailbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Mailboxes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut iter = self.iter();

        if let Some(mbox) = iter.next() {
            Display::fmt(mbox, f)?;

            for mbox in iter {
                f.write_str(",\r\n ")?;
                Display::fmt(mbox, f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Mailbox, Mailboxes};
    use crate::address::AddressError;

    #[test]
    fn mailbox_format_address_only() {
        assert_eq!(
            format!(
                "{}",
                Mailbox::new(None, "kayo@example.com".parse().unwrap())
            ),
            "kayo@example.com"
        );
    }

    #[test]
    fn mailbox_format_address_with_name() {
        assert_eq!(
            format!(
                "{}",
                Mailbox::new(Some("K.".into()), "kayo@example.com".parse().unwrap())
            ),
            "K. <kayo@example.com>"
        );
    }

    #[test]
    fn mailbox_format_address_with_utf8_name() {
        assert_eq!(
            format!(
                "{}",
                Mailbox::new(Some("Кайо".into()), "kayo@example.com".parse().unwrap())
            ),
            "=?UTF-8?Q?=D0=9A=D0=B0=D0=B9=D0=BE?= <kayo@example.com>"
        );
    }

    #[test]
    fn mailbox_format_address_with_empty_name() {
        assert_eq!(
            format!(
                "{}",
                Mailbox::new(Some("  ".into()), "kayo@example.com".parse().unwrap())
            ),
            "kayo@example.com"
        );
    }

    #[test]
    fn parse_address_only() {
        assert_eq!(
            "kayo@example.com".parse(),
            Ok(Mailbox::new(None, "kayo@example.com".parse().unwrap()))
        );
    }

    #[test]
    fn parse_address_with_name() {
        assert_eq!(
            "K. <kayo@example.com>".parse(),
            Ok(Mailbox::new(
                Some("K.".into()),
                "kayo@example.com".parse().unwrap()
            ))
        );
        assert_eq!(
            "\"Kayo Doe\" <kayo@example.com>".parse(),
            Ok(Mailbox::new(
                Some("Kayo Doe".into()),
                "kayo@example.com".parse().unwrap()
            ))
        );
    }

    #[test]
    fn parse_address_in_brackets() {
        assert_eq!(
            "<kayo@example.com>".parse(),
            Ok(Mailbox::new(None, "kayo@example.com".parse().unwrap()))
        );
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "Kayo <kayo>".parse::<Mailbox>(),
            Err(AddressError::MissingParts)
        );
    }

    #[test]
    fn mailboxes_format() {
        let mailboxes = Mailboxes::new()
            .with("one@example.com".parse().unwrap())
            .with("Two <two@example.com>".parse().unwrap());

        assert_eq!(
            mailboxes.to_string(),
            "one@example.com,\r\n Two <two@example.com>"
        );
        assert_eq!(Mailboxes::new().to_string(), "");
    }
}
