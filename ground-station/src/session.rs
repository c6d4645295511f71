use crate::{
    console::Console,
    dispatch::{DispatchTable, Entry},
    error::SessionError,
};
use mailbox::{Connector, Mailbox, Staging, extract_attachment};
use map::{MapRenderer, Viewer};
use std::path::PathBuf;
use telemetry::{GeoPosition, TelemetryRecord, compute_fix, report};
use uplink::{UplinkCommand, UplinkTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingCommand,
    Fetching,
    Composing,
    Terminated,
}

/// Builds the command to uplink, or `None` when input ran out.
pub type ComposeHandler<C> =
    fn(&mut Session<'_, C>) -> Result<Option<UplinkCommand>, SessionError>;

pub fn main_menu() -> DispatchTable<SessionState> {
    DispatchTable::new(vec![
        Entry {
            token: "g",
            description: "get and process most recent data",
            action: SessionState::Fetching,
        },
        Entry {
            token: "s",
            description: "send a message to the RockBLOCK",
            action: SessionState::Composing,
        },
        Entry {
            token: "q",
            description: "quit the program",
            action: SessionState::Terminated,
        },
    ])
}

pub fn send_menu<C: Console>() -> DispatchTable<ComposeHandler<C>> {
    DispatchTable::new(vec![
        Entry {
            token: "f",
            description: "cut ftu",
            action: cut_ftu::<C> as ComposeHandler<C>,
        },
        Entry {
            token: "p",
            description: "talk to other payload",
            action: payload_message::<C> as ComposeHandler<C>,
        },
    ])
}

fn cut_ftu<C: Console>(
    session: &mut Session<'_, C>,
) -> Result<Option<UplinkCommand>, SessionError> {
    session.console.say("Cutting FTU")?;
    Ok(Some(UplinkCommand::CutFtu))
}

fn payload_message<C: Console>(
    session: &mut Session<'_, C>,
) -> Result<Option<UplinkCommand>, SessionError> {
    session.console.say("Format your message: ")?;

    let Some(payload_id) = session.console.prompt("Payload ID: ")? else {
        return Ok(None);
    };
    let Some(message) = session
        .console
        .prompt("Input the 6 characters that comprise your message: ")?
    else {
        return Ok(None);
    };

    Ok(Some(UplinkCommand::PayloadMessage {
        payload_id,
        message,
    }))
}

/// The collaborators a session talks to.
pub struct Services<'a> {
    pub connector: &'a dyn Connector,
    pub uplink: &'a mut dyn UplinkTransport,
    pub renderer: &'a dyn MapRenderer,
    pub viewer: &'a dyn Viewer,
}

/// Drives the interactive loop: log in, then fetch telemetry or uplink
/// commands until the operator quits.
pub struct Session<'a, C: Console> {
    console: C,
    services: Services<'a>,
    staging: Staging,
    mailbox: Option<Box<dyn Mailbox>>,
    state: SessionState,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(console: C, services: Services<'a>, staging: Staging) -> Self {
        Self {
            console,
            services,
            staging,
            mailbox: None,
            state: SessionState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs until the operator quits or input ends.
    ///
    /// # Errors
    /// Only fatal errors are returned: a rejected login or a broken console.
    /// Anything else is shown to the operator and the loop carries on.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let next = match self.state {
                SessionState::Idle => self.login()?,
                SessionState::AwaitingCommand => self.await_command()?,
                SessionState::Fetching => {
                    let outcome = self.fetch();
                    self.settle(outcome)?
                }
                SessionState::Composing => {
                    let outcome = self.compose();
                    self.settle(outcome)?
                }
                SessionState::Terminated => {
                    self.logout();
                    return Ok(());
                }
            };

            log::trace!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn login(&mut self) -> Result<SessionState, SessionError> {
        self.console.clear()?;

        let Some(user) = self.console.prompt("Email: ")? else {
            return Ok(SessionState::Terminated);
        };
        let Some(secret) = self.console.prompt_secret("Password: ")? else {
            return Ok(SessionState::Terminated);
        };

        let mailbox = self
            .services
            .connector
            .login(&user, &secret)
            .map_err(SessionError::Authentication)?;
        self.mailbox = Some(mailbox);

        self.console.clear()?;
        self.console.say("Successfully logged in!")?;

        Ok(SessionState::AwaitingCommand)
    }

    fn await_command(&mut self) -> Result<SessionState, SessionError> {
        let menu = main_menu();
        self.console.say(&menu.menu())?;

        let Some(command) = self.console.prompt("What would you like to do: ")? else {
            return Ok(SessionState::Terminated);
        };

        match menu.lookup(&command) {
            Some(next) => Ok(*next),
            None => {
                self.console.say(&format!("Unknown command: {}", command))?;
                Ok(SessionState::AwaitingCommand)
            }
        }
    }

    fn fetch(&mut self) -> Result<SessionState, SessionError> {
        self.console.clear()?;
        self.console.say("Acquiring Email:")?;

        let raw = self
            .mailbox
            .as_mut()
            .ok_or(SessionError::NotLoggedIn)?
            .fetch_newest()?;

        let Some(attachment) = extract_attachment(&raw)? else {
            self.console
                .say("The newest message has no attachment, nothing to process")?;
            return Ok(SessionState::AwaitingCommand);
        };

        self.staging
            .store_attachment(&attachment.data)
            .map_err(SessionError::Staging)?;
        let staged = self
            .staging
            .read_attachment()
            .map_err(SessionError::Staging)?;

        let record = TelemetryRecord::from_attachment(&staged)?;
        let fix = match compute_fix(&record) {
            Ok(fix) => fix,
            Err(err) => {
                self.report(&err.into())?;
                None
            }
        };

        self.console.say(&report::gps_section(&record, fix.as_ref()))?;

        match fix {
            Some(position) => {
                if let Err(err) = self.plot(&position) {
                    self.report(&err)?;
                }
            }
            None => log::info!("Record from {} has no fix", attachment.filename),
        }

        self.console
            .say(&format!("\n{}", report::pressure_section(&record)))?;
        self.console
            .say(&format!("\n{}", report::humidity_section(&record)))?;

        Ok(SessionState::AwaitingCommand)
    }

    fn plot(&mut self, position: &GeoPosition) -> Result<PathBuf, SessionError> {
        let path = self
            .services
            .renderer
            .render(position, &self.staging.map_path())?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.console
            .say(&format!("Created a Google Maps plot called {}", name))?;

        self.services.viewer.open(&path)?;

        Ok(path)
    }

    fn compose(&mut self) -> Result<SessionState, SessionError> {
        let menu = send_menu::<C>();
        self.console.say(&menu.menu())?;

        let Some(choice) = self
            .console
            .prompt("Which message would you like to send: ")?
        else {
            return Ok(SessionState::Terminated);
        };
        self.console.clear()?;

        let Some(handler) = menu.lookup(&choice).copied() else {
            self.console.say(&format!("Unknown command: {}", choice))?;
            return Ok(SessionState::AwaitingCommand);
        };

        match handler(self)? {
            Some(command) => {
                self.send(&command)?;
                Ok(SessionState::AwaitingCommand)
            }
            None => Ok(SessionState::Terminated),
        }
    }

    fn send(&mut self, command: &UplinkCommand) -> Result<(), SessionError> {
        if !command.has_expected_length() {
            log::warn!(
                "Sending {:?} although the payload expects {} message characters",
                command,
                uplink::command::MESSAGE_LEN
            );
        }

        let response = self.services.uplink.send(&command.encode())?;
        log::info!("Uplink outcome: {:?}", response.outcome());

        self.console.say(&response.body)?;
        Ok(())
    }

    fn settle(
        &mut self,
        outcome: Result<SessionState, SessionError>,
    ) -> Result<SessionState, SessionError> {
        match outcome {
            Ok(next) => Ok(next),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                self.report(&err)?;
                Ok(SessionState::AwaitingCommand)
            }
        }
    }

    fn report(&mut self, err: &SessionError) -> Result<(), SessionError> {
        log::error!("{}", err);
        self.console.say(&format!("Error: {}", err))?;
        Ok(())
    }

    fn logout(&mut self) {
        if let Some(mut mailbox) = self.mailbox.take() {
            if let Err(err) = mailbox.logout() {
                log::warn!("Logout failed: {}", err);
            }
        }
    }
}
