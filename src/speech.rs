use std::process::{Command, Stdio};
use std::thread;

use crate::config::Config;

/// Pronounce control backed by an external text-to-speech program.
/// Failures are logged and otherwise ignored.
#[derive(Clone, Debug)]
pub struct Speech {
    command: String,
    args: Vec<String>,
}

impl Speech {
    pub fn new(command: &str, args: &[String]) -> Self {
        Self {
            command: command.trim().to_string(),
            args: args.to_vec(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.speech_command, &config.speech_args)
    }

    /// Full argument list for `text`, or `None` when there is nothing to run.
    pub fn command_line(&self, text: &str) -> Option<(String, Vec<String>)> {
        let text = text.trim();
        if self.command.is_empty() || text.is_empty() {
            return None;
        }
        let mut args = self.args.clone();
        if text.starts_with('-') {
            args.push("--".to_string());
        }
        args.push(text.to_string());
        Some((self.command.clone(), args))
    }

    pub fn pronounce(&self, text: &str) {
        let Some((program, args)) = self.command_line(text) else {
            return;
        };
        let spawned = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                // Reap in the background so the UI never waits on speech.
                thread::spawn(move || {
                    if let Err(err) = child.wait() {
                        log::debug!("speech process wait failed: {err}");
                    }
                });
            }
            Err(err) => log::debug!("could not run speech command {program:?}: {err}"),
        }
    }
}
