use std::fmt::{Debug, Formatter};

/// Raised while turning a DSN into a transport.
#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("The \"{scheme}\" scheme is not supported; supported schemes for mailer \"{mailer}\" are: {supported}.")]
    UnsupportedScheme {
        scheme: String,
        mailer: &'static str,
        supported: String,
    },
    #[error("Invalid mailer DSN: {0} is not set.")]
    IncompleteDsn(&'static str),
    #[error("The mailer DSN is invalid.")]
    InvalidDsn(#[source] anyhow::Error),
}

impl ConfigurationError {
    pub fn unsupported_scheme(scheme: &str, mailer: &'static str, supported: &[&str]) -> Self {
        let supported = supported
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedScheme {
            scheme: scheme.to_owned(),
            mailer,
            supported,
        }
    }
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The message cannot be delivered as composed.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    #[error("Cannot send message without a sender address.")]
    MissingSender,
    #[error("An envelope must have at least one recipient.")]
    NoRecipients,
}

/// Failure of a single send call.
#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Could not reach the remote ZeptoMail server.")]
    Unreachable(#[source] reqwest::Error),
    #[error("Unable to send an email ({code}): {detail}")]
    Rejected {
        status: u16,
        code: String,
        detail: String,
    },
    #[error("Unable to send an email: {body} (code {status}).")]
    RejectedOpaque { status: u16, body: String },
    #[error("ZeptoMail accepted the email but the response carries no request id: {body}")]
    UnexpectedResponse { body: String },
    #[error(transparent)]
    InvalidMessage(#[from] MessageError),
}

impl TransportError {
    /// HTTP status returned by the API, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::RejectedOpaque { status, .. } => Some(*status),
            Self::UnexpectedResponse { .. } => Some(202),
            Self::Unreachable(_) | Self::InvalidMessage(_) => None,
        }
    }
}

impl Debug for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(e: &impl std::error::Error, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
