pub mod address;
pub mod email;
pub mod envelope;
pub mod header;

pub use address::Address;
pub use email::{Attachment, Email};
pub use envelope::Envelope;
pub use header::{Header, Headers};
