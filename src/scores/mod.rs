//! Score persistence and ranking
//!
//! Past results live in one JSON document that is loaded wholesale, appended
//! to, and rewritten on every save. A missing or unreadable document is
//! never an error to callers: the game starts a fresh history instead, and
//! an unreadable file is kept aside for inspection rather than overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default backing file for the ranking
pub const DEFAULT_SCORE_FILE: &str = "scores.json";

/// Timestamp format stored in each record
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One finished game session
///
/// Never mutated after creation. The `time` field is a fixed-format local
/// timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub mode: String,
    pub score: u32,
    pub time: String,
}

impl ScoreRecord {
    /// Create a record stamped with the current local time
    #[must_use]
    pub fn new(name: impl Into<String>, mode: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            mode: mode.into(),
            score,
            time: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// JSON-backed store of past results
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full history
    ///
    /// A missing file is an empty history. An unparseable file is also an
    /// empty history: the bad file is renamed aside to `<path>.corrupt` and
    /// a warning is logged, so the next save starts a fresh document without
    /// destroying the evidence.
    #[must_use]
    pub fn load(&self) -> Vec<ScoreRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("no score file at {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "score file {} is unreadable ({e}); starting a fresh history",
                    self.path.display()
                );
                self.set_aside_corrupt_file();
                Vec::new()
            }
        }
    }

    /// Append one record and rewrite the whole document
    ///
    /// Read-modify-write with no locking; the game is single-player and
    /// single-process. Write failures propagate so the caller can tell the
    /// player the score was not saved.
    pub fn append(&self, record: ScoreRecord) -> std::io::Result<()> {
        let mut records = self.load();
        records.push(record);

        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, content)
    }

    /// The `n` best records, highest score first
    ///
    /// The sort is stable: records with equal scores keep their insertion
    /// order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<ScoreRecord> {
        let mut records = self.load();
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(n);
        records
    }

    fn set_aside_corrupt_file(&self) {
        let mut aside = self.path.clone().into_os_string();
        aside.push(".corrupt");

        match fs::rename(&self.path, &aside) {
            Ok(()) => warn!("kept the unreadable file as {}", Path::new(&aside).display()),
            Err(e) => warn!("could not set the unreadable file aside: {e}"),
        }
    }
}
