use crate::domain::address::Address;
use crate::domain::header::{Header, Headers};

pub const DISPOSITION_ATTACHMENT: &str = "attachment";
pub const DISPOSITION_INLINE: &str = "inline";

/// A file carried by a message, either downloadable or embedded in the HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    body: Vec<u8>,
    filename: Option<String>,
    content_type: String,
    disposition: String,
}

impl Attachment {
    pub fn new(
        body: impl Into<Vec<u8>>,
        filename: Option<String>,
        content_type: impl Into<String>,
        disposition: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            filename,
            content_type: content_type.into(),
            disposition: disposition.into(),
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn disposition(&self) -> &str {
        &self.disposition
    }
}

/// A message as composed by the sending application.
///
/// Built fluently:
///
/// ```rust
/// use zepto_mailer::domain::{Address, Email};
///
/// let email = Email::new()
///     .from(Address::parse("fabpot@symfony.com").unwrap())
///     .to(Address::named("saif.gmati@symfony.com", "Saif Eddin").unwrap())
///     .subject("Hello!")
///     .text("Hello There!");
/// assert_eq!(email.subject_line(), Some("Hello!"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Email {
    from: Vec<Address>,
    sender: Option<Address>,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    reply_to: Vec<Address>,
    subject: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    attachments: Vec<Attachment>,
    headers: Headers,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, address: Address) -> Self {
        self.from.push(address);
        self
    }

    pub fn sender(mut self, address: Address) -> Self {
        self.sender = Some(address);
        self
    }

    pub fn to(mut self, address: Address) -> Self {
        self.to.push(address);
        self
    }

    pub fn cc(mut self, address: Address) -> Self {
        self.cc.push(address);
        self
    }

    pub fn bcc(mut self, address: Address) -> Self {
        self.bcc.push(address);
        self
    }

    pub fn reply_to(mut self, address: Address) -> Self {
        self.reply_to.push(address);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Adds a downloadable attachment.
    pub fn attach(
        self,
        body: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        self.attachment(Attachment::new(
            body,
            Some(filename.into()),
            content_type,
            DISPOSITION_ATTACHMENT,
        ))
    }

    /// Embeds a file meant to be referenced from the HTML body as `cid:<name>`.
    pub fn embed(
        self,
        body: impl Into<Vec<u8>>,
        name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        self.attachment(Attachment::new(
            body,
            Some(name.into()),
            content_type,
            DISPOSITION_INLINE,
        ))
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn header(mut self, header: Header) -> Self {
        self.headers.add(header);
        self
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn from_addresses(&self) -> &[Address] {
        &self.from
    }

    pub fn sender_address(&self) -> Option<&Address> {
        self.sender.as_ref()
    }

    pub fn to_addresses(&self) -> &[Address] {
        &self.to
    }

    pub fn cc_addresses(&self) -> &[Address] {
        &self.cc
    }

    pub fn bcc_addresses(&self) -> &[Address] {
        &self.bcc
    }

    pub fn reply_to_addresses(&self) -> &[Address] {
        &self.reply_to
    }

    pub fn subject_line(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn text_body(&self) -> Option<&str> {
        self.text_body.as_deref()
    }

    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Custom headers only, as added by the caller.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The full header collection: the standard address and subject headers
    /// first, then the custom headers in insertion order.
    pub fn prepared_headers(&self) -> Headers {
        let mut headers = Headers::new();

        let address_headers = [
            ("From", self.from.as_slice()),
            ("Sender", self.sender.as_ref().map_or(&[][..], std::slice::from_ref)),
            ("To", self.to.as_slice()),
            ("Cc", self.cc.as_slice()),
            ("Bcc", self.bcc.as_slice()),
            ("Reply-To", self.reply_to.as_slice()),
        ];
        for (name, addresses) in address_headers {
            if !addresses.is_empty() {
                headers.add_text(name, join_addresses(addresses));
            }
        }
        if let Some(subject) = &self.subject {
            headers.add_text("Subject", subject.as_str());
        }

        headers.extend(self.headers.iter().cloned());
        headers
    }
}

fn join_addresses(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
