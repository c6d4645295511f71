use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The operator's side of the session.
///
/// Prompts return `None` once input is exhausted.
pub trait Console {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn say(&mut self, text: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Console backed by the process's stdin and stdout.
pub struct Terminal;

impl Console for Terminal {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", text)
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(CLEAR_SCREEN.as_bytes())?;
        stdout.flush()
    }
}

#[cfg(test)]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned operator input and keeps everything shown.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        pub input: VecDeque<String>,
        pub output: String,
        pub secret_prompts: usize,
    }

    impl ScriptedConsole {
        pub fn new(input: &[&str]) -> Self {
            Self {
                input: input.iter().map(|line| line.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.output.push_str(prompt);
            let line = self.input.pop_front();
            if let Some(line) = &line {
                self.output.push_str(line);
            }
            self.output.push('\n');
            Ok(line)
        }

        fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.secret_prompts += 1;
            self.output.push_str(prompt);
            self.output.push('\n');
            Ok(self.input.pop_front())
        }

        fn say(&mut self, text: &str) -> io::Result<()> {
            self.output.push_str(text);
            self.output.push('\n');
            Ok(())
        }

        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
