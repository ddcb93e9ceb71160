use serde::Deserialize;

use crate::error::TransportError;

const ACCEPTED: u16 = 202;

/// What became of a single call to the send endpoint.
#[derive(Debug)]
pub enum SendOutcome {
    Accepted { message_id: String },
    Rejected { status: u16, code: String, detail: String },
    RejectedOpaque { status: u16, body: String },
    /// 202 whose body lacks `Data.message.request_id`.
    Malformed { body: String },
    Unreachable(reqwest::Error),
}

#[derive(Deserialize)]
struct AcceptedBody {
    #[serde(rename = "Data")]
    data: AcceptedData,
}

#[derive(Deserialize)]
struct AcceptedData {
    message: AcceptedMessage,
}

#[derive(Deserialize)]
struct AcceptedMessage {
    request_id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    code: serde_json::Value,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl SendOutcome {
    /// Reads an HTTP status and body returned by the API.
    pub fn interpret(status: u16, body: &str) -> Self {
        if status == ACCEPTED {
            return match serde_json::from_str::<AcceptedBody>(body) {
                Ok(accepted) => Self::Accepted {
                    message_id: accepted.data.message.request_id,
                },
                Err(_) => Self::Malformed { body: body.to_owned() },
            };
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => Self::Rejected {
                status,
                code: match error.code {
                    serde_json::Value::String(code) => code,
                    other => other.to_string(),
                },
                // Only the first detail is reported; an empty list reports none.
                detail: error
                    .details
                    .into_iter()
                    .next()
                    .map(|d| d.message)
                    .unwrap_or_default(),
            },
            Err(_) => Self::RejectedOpaque {
                status,
                body: body.to_owned(),
            },
        }
    }

    pub fn into_result(self) -> Result<String, TransportError> {
        match self {
            Self::Accepted { message_id } => Ok(message_id),
            Self::Rejected { status, code, detail } => {
                Err(TransportError::Rejected { status, code, detail })
            }
            Self::RejectedOpaque { status, body } => {
                Err(TransportError::RejectedOpaque { status, body })
            }
            Self::Malformed { body } => Err(TransportError::UnexpectedResponse { body }),
            Self::Unreachable(e) => Err(TransportError::Unreachable(e)),
        }
    }
}
