//=========================================================================
// Progress Store
//=========================================================================
//
// Persists the highest unlocked level as a single decimal integer in a
// plain text file.
//
// Every failure path degrades to a safe value:
// - missing / unreadable / malformed file → level 1
// - out-of-range value (either direction) → clamped to [1, max_level]
// - write failure → logged, progress for this session is kept in memory
//
// `try_load` / `try_save` expose the underlying error for callers that
// care; `load` / `save` are what the coordinator uses.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

//=== Constants ===========================================================

/// Default location of the progress file, relative to the working directory.
pub const DEFAULT_PROGRESS_PATH: &str = "data/progress.log";

//=== ProgressError =======================================================

/// Why a progress file could not be read or written.
#[derive(Debug)]
pub enum ProgressError {
    /// Open, read, write or directory creation failed.
    Io(io::Error),

    /// File contents are not a decimal integer.
    Parse(String),
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "progress file I/O failed: {}", e),
            Self::Parse(content) => write!(f, "progress file is not a number: {:?}", content),
        }
    }
}

impl std::error::Error for ProgressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<io::Error> for ProgressError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

//=== Level Clamping ======================================================

/// Clamps any integer into the valid level range `[1, max_level]`.
pub fn clamp_level(value: i64, max_level: u32) -> u32 {
    let max = i64::from(max_level.max(1));
    // Lossless: the result is within [1, max_level].
    value.clamp(1, max) as u32
}

//=== ProgressStore =======================================================

/// File-backed store for the unlocked-level marker.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    max_level: u32,
}

impl ProgressStore {
    /// Creates a store for `path` with levels `1..=max_level`.
    ///
    /// # Panics
    ///
    /// Panics if `max_level == 0`.
    pub fn new(path: impl Into<PathBuf>, max_level: u32) -> Self {
        assert!(max_level > 0, "Max level must be positive");
        Self {
            path: path.into(),
            max_level,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    //--- Loading ----------------------------------------------------------

    /// Reads the unlocked level, clamped to `[1, max_level]`.
    ///
    /// Values that overflow 64 bits are clamped like any other
    /// out-of-range value.
    pub fn try_load(&self) -> Result<u32, ProgressError> {
        let content = fs::read_to_string(&self.path)?;
        let token = content.split_whitespace().next().unwrap_or("");

        let value = match token.parse::<i64>() {
            Ok(value) => value,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(ProgressError::Parse(content.clone())),
            },
        };

        Ok(clamp_level(value, self.max_level))
    }

    /// Reads the unlocked level, falling back to 1 on any failure.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(level) => {
                info!(target: "progress", "Reading progress: unlocked level {}", level);
                level
            }
            Err(e) => {
                warn!(
                    target: "progress",
                    "Error reading progress from {}: {}. Starting new game.",
                    self.path.display(),
                    e
                );
                1
            }
        }
    }

    //--- Saving -----------------------------------------------------------

    /// Clamps and writes `level`, replacing previous content.
    ///
    /// Creates the parent directory if needed. Returns the value written.
    pub fn try_save(&self, level: i64) -> Result<u32, ProgressError> {
        let level = clamp_level(level, self.max_level);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, level.to_string())?;
        Ok(level)
    }

    /// Clamps and writes `level`; failures are logged and discarded.
    pub fn save(&self, level: i64) {
        match self.try_save(level) {
            Ok(written) => {
                info!(target: "progress", "Saving progress: unlocked level {}", written)
            }
            Err(e) => warn!(
                target: "progress",
                "Error saving progress to {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
