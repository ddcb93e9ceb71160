use std::fmt::Display;

use crate::domain::{Email, Envelope};
use crate::error::TransportError;

/// A message accepted by a transport.
#[derive(Debug, Clone)]
pub struct SentMessage {
    message_id: String,
    envelope: Envelope,
}

impl SentMessage {
    pub fn new(message_id: String, envelope: Envelope) -> Self {
        Self { message_id, envelope }
    }

    /// Identifier assigned by the provider.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// A mail delivery backend.
///
/// `Display` renders the backend as a DSN-like string without credentials.
#[async_trait::async_trait]
pub trait Transport: Display + Send + Sync {
    /// Sends `email` once. Without an explicit envelope one is derived
    /// from the message addresses.
    async fn send(
        &self,
        email: &Email,
        envelope: Option<&Envelope>,
    ) -> Result<SentMessage, TransportError>;
}
