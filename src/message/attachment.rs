use crate::message::{
    header::{ContentDisposition, ContentId, ContentType, DispositionType},
    BinaryPart, Part,
};

/// `Attachment` part builder
///
/// Sets the `Content-Disposition` header, and the `Content-ID` header of
/// inline parts, before the content is added with [`body`](Self::body).
///
/// ```
/// use mailmime::message::{header::ContentType, Attachment};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Attachment::new(String::from("report.csv"))
///     .body(ContentType::parse("text/csv")?, "a,b\n1,2\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Attachment {
    disposition: DispositionType,
    filename: Option<String>,
    content_id: Option<String>,
}

impl Attachment {
    /// Create a new attachment, offered as a file called `filename`
    pub fn new(filename: String) -> Self {
        Attachment {
            disposition: DispositionType::Attachment,
            filename: Some(filename),
            content_id: None,
        }
    }

    /// Create a new inline attachment
    ///
    /// HTML parts can refer to it with the `cid:` URL scheme and
    /// `content_id`, for example in `<img src="cid:logo">`. Usually placed
    /// in a [`MultiPartKind::Related`](crate::message::MultiPartKind::Related)
    /// next to the HTML.
    pub fn new_inline(content_id: String) -> Self {
        Attachment {
            disposition: DispositionType::Inline,
            filename: None,
            content_id: Some(content_id),
        }
    }

    /// Set the file name suggested to the recipient
    pub fn filename(mut self, filename: String) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Build the attachment into a [`Part`]
    pub fn body<B: Into<Vec<u8>>>(self, content_type: ContentType, content: B) -> Part {
        let disposition = match (self.disposition, self.filename.as_deref()) {
            (DispositionType::Attachment, Some(filename)) => {
                ContentDisposition::attachment(filename)
            }
            (_, Some(filename)) => ContentDisposition::inline_with_name(filename),
            (_, None) => ContentDisposition::inline(),
        };

        let mut part = BinaryPart::new(Some(content_type), content).header(disposition);
        if let Some(content_id) = self.content_id {
            part = part.header(ContentId::from(content_id));
        }

        Part::Binary(part)
    }
}
