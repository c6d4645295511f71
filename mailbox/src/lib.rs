pub mod attachment;
pub mod imap_client;
pub mod mock;
pub mod staging;

pub use attachment::{Attachment, extract_attachment};
pub use imap_client::{ImapConnector, ImapMailbox};
pub use staging::Staging;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("login rejected: {0}")]
    Authentication(String),
    #[error("folder `{0}` has no messages")]
    EmptyMailbox(String),
    #[error("message {0} disappeared before it could be fetched")]
    MessageVanished(u32),
    #[error("IMAP error: {0}")]
    Imap(#[from] imap::Error),
    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),
    #[error("could not parse message: {0}")]
    Parse(#[from] mailparse::MailParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An authenticated session on the account the modem mails into.
pub trait Mailbox {
    /// Raw RFC 822 bytes of the newest message.
    fn fetch_newest(&mut self) -> Result<Vec<u8>, MailError>;

    /// Ends the session.
    fn logout(&mut self) -> Result<(), MailError>;
}

/// Opens [`Mailbox`] sessions.
pub trait Connector {
    /// # Errors
    /// Returns [`MailError::Authentication`] when the server rejects the
    /// credentials.
    fn login(&self, user: &str, secret: &str) -> Result<Box<dyn Mailbox>, MailError>;
}
