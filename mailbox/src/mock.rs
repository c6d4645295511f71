use crate::{Connector, MailError, Mailbox};
use std::collections::VecDeque;

/// Accepts one user/secret pair and serves canned messages newest first.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    pub user: String,
    pub secret: String,
    pub messages: VecDeque<Vec<u8>>,
}

impl Connector for MockConnector {
    fn login(&self, user: &str, secret: &str) -> Result<Box<dyn Mailbox>, MailError> {
        if user != self.user || secret != self.secret {
            return Err(MailError::Authentication(
                "[AUTHENTICATIONFAILED] Invalid credentials".to_string(),
            ));
        }

        Ok(Box::new(MockMailbox {
            messages: self.messages.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct MockMailbox {
    messages: VecDeque<Vec<u8>>,
}

impl Mailbox for MockMailbox {
    fn fetch_newest(&mut self) -> Result<Vec<u8>, MailError> {
        self.messages
            .pop_front()
            .ok_or_else(|| MailError::EmptyMailbox("INBOX".to_string()))
    }

    fn logout(&mut self) -> Result<(), MailError> {
        Ok(())
    }
}
