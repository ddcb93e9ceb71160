use std::collections::BTreeMap;

use crate::domain::{Address, Email, Envelope};

pub mod attachments;
pub mod headers;

pub use attachments::{classify_attachments, AttachmentRequest, InlineImageRequest};
pub use headers::{custom_headers, is_bypassed};

/// Open and click tracking flags, fixed per transport instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingOptions {
    pub clicks: bool,
    pub opens: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct EmailAddressRequest<'a> {
    address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> EmailAddressRequest<'a> {
    pub fn new(address: &'a Address) -> Self {
        Self {
            address: address.email(),
            name: address.name().filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct RecipientRequest<'a> {
    email_address: EmailAddressRequest<'a>,
}

impl<'a> RecipientRequest<'a> {
    pub fn new(address: &'a Address) -> Self {
        Self {
            email_address: EmailAddressRequest::new(address),
        }
    }
}

/// Body of a `POST /v1.1/email` call.
#[derive(Debug, serde::Serialize)]
pub struct SendEmailRequest<'a> {
    pub from: EmailAddressRequest<'a>,
    pub to: Vec<RecipientRequest<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailAddressRequest<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailAddressRequest<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<EmailAddressRequest<'a>>,
    pub subject: Option<&'a str>,
    pub textbody: Option<&'a str>,
    pub htmlbody: Option<&'a str>,
    pub attachments: Vec<AttachmentRequest<'a>>,
    pub inline_images: Vec<InlineImageRequest<'a>>,
    pub mime_headers: BTreeMap<String, String>,
    pub track_clicks: bool,
    pub track_opens: bool,
}

impl<'a> SendEmailRequest<'a> {
    /// Maps a message and its envelope onto the ZeptoMail payload.
    ///
    /// The sender always comes from the envelope, never from the `From` header.
    /// Envelope recipients that also appear in Cc or Bcc are only sent there.
    pub fn build(email: &'a Email, envelope: &'a Envelope, tracking: TrackingOptions) -> Self {
        let copied = |address: &Address| {
            email.cc_addresses().contains(address) || email.bcc_addresses().contains(address)
        };
        let to = envelope
            .recipients()
            .iter()
            .filter(|a| !copied(*a))
            .map(RecipientRequest::new)
            .collect();

        let (attachments, inline_images) = classify_attachments(email.attachments());

        Self {
            from: EmailAddressRequest::new(envelope.sender()),
            to,
            cc: stringify(email.cc_addresses()),
            bcc: stringify(email.bcc_addresses()),
            reply_to: stringify(email.reply_to_addresses()),
            subject: email.subject_line(),
            textbody: email.text_body(),
            htmlbody: email.html_body(),
            attachments,
            inline_images,
            mime_headers: custom_headers(&email.prepared_headers()),
            track_clicks: tracking.clicks,
            track_opens: tracking.opens,
        }
    }
}

fn stringify(addresses: &[Address]) -> Vec<EmailAddressRequest<'_>> {
    addresses.iter().map(EmailAddressRequest::new).collect()
}
