use crate::{Connector, MailError, Mailbox};
use native_tls::{TlsConnector, TlsStream};
use std::net::TcpStream;

/// Connects to an IMAP server over implicit TLS.
#[derive(Debug, Clone)]
pub struct ImapConnector {
    pub host: String,
    pub port: u16,
    pub folder: String,
}

impl ImapConnector {
    pub fn new(host: &str, port: u16, folder: &str) -> Self {
        Self {
            host: host.to_string(),
            port,
            folder: folder.to_string(),
        }
    }
}

impl Connector for ImapConnector {
    fn login(&self, user: &str, secret: &str) -> Result<Box<dyn Mailbox>, MailError> {
        let tls = TlsConnector::builder().build()?;
        let client = imap::connect((self.host.as_str(), self.port), &self.host, &tls)?;

        let session = client
            .login(user, secret)
            .map_err(|(err, _client)| MailError::Authentication(err.to_string()))?;

        log::info!("Logged in to {}:{} as {}", self.host, self.port, user);

        Ok(Box::new(ImapMailbox {
            session,
            folder: self.folder.clone(),
        }))
    }
}

pub struct ImapMailbox {
    session: imap::Session<TlsStream<TcpStream>>,
    folder: String,
}

impl Mailbox for ImapMailbox {
    fn fetch_newest(&mut self) -> Result<Vec<u8>, MailError> {
        self.session.select(&self.folder)?;

        let newest = self
            .session
            .uid_search("ALL")?
            .into_iter()
            .max()
            .ok_or_else(|| MailError::EmptyMailbox(self.folder.clone()))?;

        let messages = self.session.uid_fetch(newest.to_string(), "RFC822")?;
        let body = messages
            .iter()
            .find_map(|message| message.body())
            .ok_or(MailError::MessageVanished(newest))?;

        log::info!("Fetched message {} ({} bytes)", newest, body.len());

        Ok(body.to_vec())
    }

    fn logout(&mut self) -> Result<(), MailError> {
        self.session.logout()?;
        Ok(())
    }
}
