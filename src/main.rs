use anyhow::Context;
use zepto_mailer::configuration::get_configuration;
use zepto_mailer::telemetry::{get_subscriber, init_subscriber};
use zepto_mailer::{Transport, ZeptoTransportFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("zepto_mailer".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;

    let http_client = configuration
        .zepto
        .http_client()
        .context("Failed to build the HTTP client")?;
    let dsn = configuration.zepto.dsn()?;
    let transport = ZeptoTransportFactory::new(http_client).create(&dsn)?;

    let email = configuration
        .message
        .email()
        .map_err(anyhow::Error::msg)
        .context("Invalid message in configuration")?;

    let sent = transport
        .send(&email, None)
        .await
        .with_context(|| format!("Failed to send the email through {}", transport))?;

    tracing::info!(
        message_id = %sent.message_id(),
        recipients = sent.envelope().recipients().len(),
        "Email accepted by {}",
        transport
    );
    Ok(())
}
