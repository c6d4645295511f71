/// Literal the flight termination unit reacts to.
pub const FTU_CUT: &str = "FTUPLZ";

/// Length the payload expects a composed message to have. Not enforced.
pub const MESSAGE_LEN: usize = 6;

/// A command sent from the ground station to the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UplinkCommand {
    /// Fire the flight termination unit.
    CutFtu,
    /// Relay `message` to the payload identified by `payload_id`.
    PayloadMessage { payload_id: String, message: String },
}

impl UplinkCommand {
    /// The exact bytes the payload receives.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            UplinkCommand::CutFtu => FTU_CUT.as_bytes().to_vec(),
            UplinkCommand::PayloadMessage {
                payload_id,
                message,
            } => {
                let mut buf = Vec::with_capacity(payload_id.len() + message.len() + 1);
                buf.extend_from_slice(payload_id.as_bytes());
                buf.extend_from_slice(message.as_bytes());
                buf.push(b'\n');
                buf
            }
        }
    }

    /// Lowercase hex of [`to_bytes`](UplinkCommand::to_bytes), as the
    /// messaging service expects it.
    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Whether a composed message has the length the payload expects.
    pub fn has_expected_length(&self) -> bool {
        match self {
            UplinkCommand::CutFtu => true,
            UplinkCommand::PayloadMessage { message, .. } => {
                message.chars().count() == MESSAGE_LEN
            }
        }
    }
}

pub fn encode_ftu_cut() -> String {
    UplinkCommand::CutFtu.encode()
}

pub fn encode_payload_message(payload_id: &str, message: &str) -> String {
    UplinkCommand::PayloadMessage {
        payload_id: payload_id.to_string(),
        message: message.to_string(),
    }
    .encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(encoded: &str) -> String {
        String::from_utf8(hex::decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_ftu_cut_is_constant() {
        assert_eq!(encode_ftu_cut(), "465455504c5a");
        assert_eq!(encode_ftu_cut(), encode_ftu_cut());
    }

    #[test]
    fn test_payload_message_decodes_to_id_message_newline() {
        let encoded = encode_payload_message("AB1234", "HELLO!");

        assert_eq!(decode(&encoded), "AB1234HELLO!\n");
        assert_eq!(encoded, "41423132333448454c4c4f210a");
    }

    #[test]
    fn test_payload_message_length_not_enforced() {
        assert_eq!(decode(&encode_payload_message("", "")), "\n");
        assert_eq!(
            decode(&encode_payload_message("7", "much too long")),
            "7much too long\n"
        );
    }

    #[test]
    fn test_payload_message_keeps_utf8() {
        assert_eq!(decode(&encode_payload_message("id", "héllo!")), "idhéllo!\n");
    }

    #[test]
    fn test_expected_length() {
        let command = |message: &str| UplinkCommand::PayloadMessage {
            payload_id: "AB1234".to_string(),
            message: message.to_string(),
        };

        assert!(command("HELLO!").has_expected_length());
        assert!(!command("HI").has_expected_length());
        assert!(UplinkCommand::CutFtu.has_expected_length());
    }
}
