pub mod command;
pub mod mock;
pub mod rockblock;

pub use command::{UplinkCommand, encode_ftu_cut, encode_payload_message};
pub use rockblock::{Credentials, RockBlockClient, UplinkOutcome, UplinkResponse};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UplinkError {
    #[error("uplink request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("could not read uplink response: {0}")]
    Io(#[from] std::io::Error),
}

/// Something able to deliver a hex encoded message to the payload.
pub trait UplinkTransport {
    /// Sends `hex_payload` and returns whatever the service answered.
    fn send(&mut self, hex_payload: &str) -> Result<UplinkResponse, UplinkError>;
}
