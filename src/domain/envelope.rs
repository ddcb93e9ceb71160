use crate::domain::address::Address;
use crate::domain::email::Email;
use crate::error::MessageError;

/// The SMTP-level sender and recipients. These are authoritative for delivery
/// and may differ from the addresses declared in the message headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    sender: Address,
    recipients: Vec<Address>,
}

impl Envelope {
    pub fn new(sender: Address, recipients: Vec<Address>) -> Result<Self, MessageError> {
        if recipients.is_empty() {
            return Err(MessageError::NoRecipients);
        }
        Ok(Self { sender, recipients })
    }

    /// Derives the envelope from the message itself: the `Sender` address when
    /// set, otherwise the first `From` address; every To, Cc and Bcc address
    /// as recipient.
    pub fn from_email(email: &Email) -> Result<Self, MessageError> {
        let sender = email
            .sender_address()
            .or_else(|| email.from_addresses().first())
            .cloned()
            .ok_or(MessageError::MissingSender)?;

        let recipients = email
            .to_addresses()
            .iter()
            .chain(email.cc_addresses())
            .chain(email.bcc_addresses())
            .cloned()
            .collect();

        Self::new(sender, recipients)
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    pub fn recipients(&self) -> &[Address] {
        &self.recipients
    }
}
