use reqwest::Client;

use crate::dsn::Dsn;
use crate::email_client::ZeptoApiTransport;
use crate::email_request::TrackingOptions;
use crate::error::ConfigurationError;

const MAILER_NAME: &str = "zepto";
const SUPPORTED_SCHEMES: [&str; 2] = ["zepto", "zepto+api"];
const DEFAULT_HOST: &str = "default";

/// Builds [`ZeptoApiTransport`]s from DSNs such as
/// `zepto+api://<region>:<api-key>@default?track_opens=1`.
///
/// The DSN user is the region (`com`, `eu`, ...), the password is the API key.
pub struct ZeptoTransportFactory {
    http_client: Client,
}

impl ZeptoTransportFactory {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    pub fn supported_schemes(&self) -> &'static [&'static str] {
        &SUPPORTED_SCHEMES
    }

    pub fn supports(&self, dsn: &Dsn) -> bool {
        SUPPORTED_SCHEMES.contains(&dsn.scheme())
    }

    #[tracing::instrument(
        name = "Create a ZeptoMail transport",
        skip(self, dsn),
        fields(scheme = %dsn.scheme(), host = %dsn.host())
    )]
    pub fn create(&self, dsn: &Dsn) -> Result<ZeptoApiTransport, ConfigurationError> {
        if !self.supports(dsn) {
            return Err(ConfigurationError::unsupported_scheme(
                dsn.scheme(),
                MAILER_NAME,
                &SUPPORTED_SCHEMES,
            ));
        }

        let region = dsn.user().ok_or(ConfigurationError::IncompleteDsn("User"))?;
        let api_key = dsn
            .password()
            .cloned()
            .ok_or(ConfigurationError::IncompleteDsn("Password"))?;
        let host = match dsn.host() {
            DEFAULT_HOST => None,
            host => Some(match dsn.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_owned(),
            }),
        };
        let tracking = TrackingOptions {
            clicks: dsn.bool_option("track_clicks"),
            opens: dsn.bool_option("track_opens"),
        };

        let mut transport = ZeptoApiTransport::new(self.http_client.clone(), api_key, region, tracking);
        transport.set_host(host);
        Ok(transport)
    }
}

impl Default for ZeptoTransportFactory {
    fn default() -> Self {
        Self::new(Client::new())
    }
}
