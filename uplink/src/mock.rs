use crate::{UplinkError, UplinkResponse, UplinkTransport};

/// Records every payload instead of sending it.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<String>,
    pub fail: bool,
}

impl UplinkTransport for MockTransport {
    fn send(&mut self, hex_payload: &str) -> Result<UplinkResponse, UplinkError> {
        if self.fail {
            return Err(UplinkError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock uplink unavailable",
            )));
        }

        self.sent.push(hex_payload.to_string());
        println!("UPLINK data={}", hex_payload);

        Ok(UplinkResponse {
            status: 200,
            body: format!("OK,{}", self.sent.len()),
        })
    }
}
