use mailbox::MailError;
use map::MapError;
use telemetry::{FixError, RecordError};
use thiserror::Error;
use uplink::UplinkError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not log in: {0}")]
    Authentication(MailError),
    #[error("no mailbox session is open")]
    NotLoggedIn,
    #[error("email fetch failed: {0}")]
    Mail(#[from] MailError),
    #[error("could not stage attachment: {0}")]
    Staging(std::io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("could not compute fix: {0}")]
    Fix(#[from] FixError),
    #[error("map rendering failed: {0}")]
    Map(#[from] MapError),
    #[error("uplink failed: {0}")]
    Uplink(#[from] UplinkError),
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the session cannot go on after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SessionError::Authentication(_) | SessionError::Console(_)
        )
    }
}
