//! Optional text-to-speech capability
//!
//! Speech is delegated to whichever host synthesizer is installed. The host
//! is probed exactly once at startup; a machine without any synthesizer gets
//! the permanent no-op variant and the rest of the game is unaffected.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

/// Host synthesizers we know how to drive, in preference order.
/// `say` ships with macOS; the others are common Linux packages.
const SYNTHESIZERS: &[(&str, &[&str])] = &[
    ("say", &[]),
    ("espeak-ng", &[]),
    ("espeak", &[]),
    ("flite", &["-t"]),
];

/// A detected text-to-speech program
#[derive(Debug, Clone)]
pub struct SpeechEngine {
    program: PathBuf,
    args: &'static [&'static str],
}

/// Speech capability, selected once at startup
#[derive(Debug, Clone)]
pub enum Narrator {
    /// Wraps a synthesizer found on the host
    Engine(SpeechEngine),
    /// Permanent no-op for hosts without speech
    Silent,
}

impl Narrator {
    /// Probe the host for a usable synthesizer
    #[must_use]
    pub fn detect() -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        for &(program, args) in SYNTHESIZERS {
            if let Some(program) = find_in(program, &path) {
                debug!("speech engine: {}", program.display());
                return Self::Engine(SpeechEngine { program, args });
            }
        }
        debug!("no speech engine found, narration disabled");
        Self::Silent
    }

    /// Speak a word out loud, best effort
    ///
    /// Blocks while the host synthesizer plays. Failures are logged and
    /// otherwise ignored; the silent variant does nothing.
    pub fn speak(&self, word: &str) {
        let Self::Engine(engine) = self else {
            return;
        };

        let result = Command::new(&engine.program)
            .args(engine.args)
            .arg(word)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) if !status.success() => {
                debug!("speech engine exited with {status}");
            }
            Err(e) => debug!("speech engine failed to run: {e}"),
            Ok(_) => {}
        }
    }

    /// Whether narration is disabled
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
}

/// Look up a program in a PATH-style search string
fn find_in(program: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
