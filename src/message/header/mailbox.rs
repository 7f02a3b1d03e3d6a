use super::{Header, HeaderName};
use crate::message::mailbox::{Mailbox, Mailboxes};

macro_rules! mailboxes_header {
    ($(#[$doc:meta])*($type_name: ident, $header_name: expr)) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $type_name(pub(crate) Mailboxes);

        impl Header for $type_name {
            fn name() -> HeaderName {
                HeaderName::new_from_ascii_static($header_name)
            }

            fn display(&self) -> String {
                self.0.to_string()
            }
        }

        impl std::convert::From<Mailboxes> for $type_name {
            #[inline]
            fn from(mailboxes: Mailboxes) -> Self {
                Self(mailboxes)
            }
        }

        impl std::convert::From<Mailbox> for $type_name {
            #[inline]
            fn from(mailbox: Mailbox) -> Self {
                Self(mailbox.into())
            }
        }

        impl std::convert::From<$type_name> for Mailboxes {
            #[inline]
            fn from(this: $type_name) -> Mailboxes {
                this.0
            }
        }

        impl AsRef<Mailboxes> for $type_name {
            #[inline]
            fn as_ref(&self) -> &Mailboxes {
                &self.0
            }
        }
    };
}

mailboxes_header! {
    /// `From` header, the author(s) of the message
    (From, "From")
}

mailboxes_header! {
    /// `To` header, the primary recipients
    (To, "To")
}

mailboxes_header! {
    /// `Cc` header, the carbon copy recipients
    (Cc, "Cc")
}

mailboxes_header! {
    /// `Bcc` header, the blind carbon copy recipients
    (Bcc, "Bcc")
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{From as FromHeader, To};
    use crate::message::{header::Headers, Mailboxes};

    #[test]
    fn format_single_without_name() {
        let from = Mailboxes::new().with("kayo@example.com".parse().unwrap());

        let mut headers = Headers::new();
        headers.set(FromHeader(from));

        assert_eq!(headers.to_string(), "From: kayo@example.com\r\n");
    }

    #[test]
    fn format_multi_with_name() {
        let to = Mailboxes::new()
            .with("Kayo <kayo@example.com>".parse().unwrap())
            .with("Pony P <pony@domain.tld>".parse().unwrap());

        let mut headers = Headers::new();
        headers.set(To::from(to));

        assert_eq!(
            headers.to_string(),
            "To: Kayo <kayo@example.com>,\r\n Pony P <pony@domain.tld>\r\n"
        );
    }
}
