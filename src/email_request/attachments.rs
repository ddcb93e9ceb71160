use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::email::DISPOSITION_INLINE;
use crate::domain::Attachment;

/// A downloadable attachment. The service caps a whole request,
/// attachments included, at 10 MB.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct AttachmentRequest<'a> {
    pub name: Option<&'a str>,
    pub content: String,
    pub mime_type: &'a str,
}

impl<'a> AttachmentRequest<'a> {
    fn new(attachment: &'a Attachment) -> Self {
        Self {
            name: attachment.filename(),
            content: STANDARD.encode(attachment.body()),
            mime_type: attachment.content_type(),
        }
    }
}

/// An image referenced from the HTML body; its filename doubles as content id.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct InlineImageRequest<'a> {
    #[serde(flatten)]
    pub attachment: AttachmentRequest<'a>,
    pub cid: Option<&'a str>,
}

/// Splits attachments into regular attachments and inline images, keeping
/// their relative order. Inline attachments that are not images are dropped.
pub fn classify_attachments(
    attachments: &[Attachment],
) -> (Vec<AttachmentRequest<'_>>, Vec<InlineImageRequest<'_>>) {
    let mut regular = Vec::new();
    let mut inline_images = Vec::new();

    for attachment in attachments {
        if attachment.disposition() != DISPOSITION_INLINE {
            regular.push(AttachmentRequest::new(attachment));
        } else if is_image(attachment.content_type()) {
            inline_images.push(InlineImageRequest {
                attachment: AttachmentRequest::new(attachment),
                cid: attachment.filename(),
            });
        }
    }

    (regular, inline_images)
}

fn is_image(content_type: &str) -> bool {
    content_type
        .get(..6)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("image/"))
}
