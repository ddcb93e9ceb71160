use once_cell::sync::Lazy;
use reqwest::Client;
use wiremock::MockServer;
use zepto_mailer::telemetry::{get_subscriber, init_subscriber};
use zepto_mailer::{Dsn, ZeptoApiTransport, ZeptoTransportFactory};

// Ensure that the `tracing` stack is only initialized once rather than for each test case
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_lvl = "info".into();
    let subscriber_name = "test".into();

    // The sink is part of the type returned by `get_subscriber`, hence the two branches
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_lvl, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_lvl, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const API_KEY: &str = "KEY";

pub struct TestApp {
    pub email_server: MockServer,
    pub transport: ZeptoApiTransport,
}

impl TestApp {
    /// JSON body of the last request received by the mock ZeptoMail server
    pub async fn last_request_body(&self) -> serde_json::Value {
        let request = self
            .email_server
            .received_requests()
            .await
            .unwrap()
            .pop()
            .expect("No request reached the mock ZeptoMail server");
        serde_json::from_slice(&request.body).unwrap()
    }
}

/// Build a transport through the factory, the way an application would,
/// and point it at a mock ZeptoMail server mimicking `/v1.1/email`.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let dsn: Dsn = format!("zepto+api://eu:{}@default", API_KEY)
        .parse()
        .expect("Failed to parse the DSN");
    let mut transport = ZeptoTransportFactory::new(Client::new())
        .create(&dsn)
        .expect("Failed to create the transport")
        .with_insecure_http();
    transport.set_host(Some(format!("{}/v1.1/email", email_server.address())));

    TestApp {
        email_server,
        transport,
    }
}
