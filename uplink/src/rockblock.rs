use crate::{UplinkError, UplinkTransport};
use std::fmt;
use ureq::Agent;

pub const DEFAULT_ENDPOINT: &str = "https://rockblock.rock7.com/rockblock/MT";

/// Account details for the RockBLOCK mobile-terminated endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub imei: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("imei", &self.imei)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the messaging service answered, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UplinkResponse {
    pub status: u16,
    pub body: String,
}

/// How the service classified a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UplinkOutcome {
    Accepted { message_id: String },
    Rejected { code: String, reason: String },
    Unrecognized,
}

impl UplinkResponse {
    /// Classifies `OK,<id>` and `FAILED,<code>,<reason>` bodies.
    pub fn outcome(&self) -> UplinkOutcome {
        let mut parts = self.body.trim().splitn(3, ',');

        match (parts.next(), parts.next(), parts.next()) {
            (Some("OK"), Some(id), None) => UplinkOutcome::Accepted {
                message_id: id.to_string(),
            },
            (Some("FAILED"), Some(code), reason) => UplinkOutcome::Rejected {
                code: code.to_string(),
                reason: reason.unwrap_or_default().to_string(),
            },
            _ => UplinkOutcome::Unrecognized,
        }
    }
}

/// Blocking HTTP client for the RockBLOCK web service.
pub struct RockBlockClient {
    agent: Agent,
    endpoint: String,
    credentials: Credentials,
}

impl RockBlockClient {
    pub fn new(endpoint: &str, credentials: Credentials) -> Self {
        Self {
            agent: ureq::agent(),
            endpoint: endpoint.to_string(),
            credentials,
        }
    }
}

impl UplinkTransport for RockBlockClient {
    fn send(&mut self, hex_payload: &str) -> Result<UplinkResponse, UplinkError> {
        let result = self
            .agent
            .post(&self.endpoint)
            .query("imei", &self.credentials.imei)
            .query("username", &self.credentials.username)
            .query("password", &self.credentials.password)
            .query("data", hex_payload)
            .call();

        // The service reports its own failures in the body, so a non-2xx
        // status is surfaced like any other answer.
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(err.into()),
        };

        let status = response.status();
        let body = response.into_string()?;

        log::info!(
            "Uplink of {} bytes to {} answered {}: {}",
            hex_payload.len() / 2,
            self.credentials.imei,
            status,
            body.trim()
        );

        Ok(UplinkResponse { status, body })
    }
}
