use std::fmt::{Display, Formatter};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::{Email, Envelope};
use crate::email_request::{SendEmailRequest, TrackingOptions};
use crate::error::TransportError;
use crate::transport::{SentMessage, Transport};

pub mod response;

pub use response::SendOutcome;

const API_VERSION: &str = "v1.1";
const AUTHORIZATION_SCHEME: &str = "Zoho-enczapikey";

/// Sends email through the ZeptoMail REST API.
#[derive(Debug)]
pub struct ZeptoApiTransport {
    http_client: Client,
    api_key: Secret<String>,
    tld: String,
    host: Option<String>,
    url_scheme: &'static str,
    tracking: TrackingOptions,
}

impl ZeptoApiTransport {
    /// `tld` selects the regional API host (`com`, `eu`, `in`, ...);
    /// leading dots are stripped.
    pub fn new(
        http_client: Client,
        api_key: Secret<String>,
        tld: &str,
        tracking: TrackingOptions,
    ) -> Self {
        Self {
            http_client,
            api_key,
            tld: tld.trim_start_matches('.').to_owned(),
            host: None,
            url_scheme: "https",
            tracking,
        }
    }

    /// Overrides the computed endpoint; the value is used verbatim as
    /// authority and path.
    pub fn set_host(&mut self, host: Option<String>) -> &mut Self {
        self.host = host;
        self
    }

    /// Talks plain HTTP to the endpoint. Only meant for local relays and
    /// mock servers.
    pub fn with_insecure_http(mut self) -> Self {
        self.url_scheme = "http";
        self
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn tracking(&self) -> TrackingOptions {
        self.tracking
    }

    pub fn endpoint(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("api.zeptomail.{}/{}/email", self.tld, API_VERSION),
        }
    }

    pub fn build_request<'a>(&self, email: &'a Email, envelope: &'a Envelope) -> SendEmailRequest<'a> {
        SendEmailRequest::build(email, envelope, self.tracking)
    }

    async fn post(&self, request_body: &SendEmailRequest<'_>) -> SendOutcome {
        let url = format!("{}://{}", self.url_scheme, self.endpoint());
        let response = match self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(
                AUTHORIZATION,
                format!("{} {}", AUTHORIZATION_SCHEME, self.api_key.expose_secret()),
            )
            .json(request_body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SendOutcome::Unreachable(e),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => SendOutcome::interpret(status, &body),
            Err(e) => SendOutcome::Unreachable(e),
        }
    }
}

impl Display for ZeptoApiTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "zepto+api://{}", self.endpoint())
    }
}

#[async_trait::async_trait]
impl Transport for ZeptoApiTransport {
    #[tracing::instrument(
        name = "Send an email through ZeptoMail",
        skip(self, email, envelope),
        fields(endpoint = %self.endpoint(), message_id = tracing::field::Empty)
    )]
    async fn send(
        &self,
        email: &Email,
        envelope: Option<&Envelope>,
    ) -> Result<SentMessage, TransportError> {
        let envelope = match envelope {
            Some(envelope) => envelope.clone(),
            None => Envelope::from_email(email)?,
        };

        let request_body = self.build_request(email, &envelope);
        tracing::debug!(
            recipients = request_body.to.len(),
            attachments = request_body.attachments.len(),
            inline_images = request_body.inline_images.len(),
            mime_headers = request_body.mime_headers.len(),
            "Built ZeptoMail request"
        );

        let message_id = self.post(&request_body).await.into_result()?;
        tracing::Span::current().record("message_id", &tracing::field::display(&message_id));

        Ok(SentMessage::new(message_id, envelope))
    }
}
