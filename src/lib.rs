pub mod configuration;
pub mod domain;
pub mod dsn;
pub mod email_client;
pub mod email_request;
pub mod error;
pub mod factory;
pub mod telemetry;
pub mod transport;

pub use dsn::Dsn;
pub use email_client::ZeptoApiTransport;
pub use error::{ConfigurationError, MessageError, TransportError};
pub use factory::ZeptoTransportFactory;
pub use transport::{SentMessage, Transport};
