//! Username ledger.
//!
//! A plain text file with one username per line. A shopper whose name is not
//! in the file yet is making a first purchase; registering them appends the
//! name so later sessions do not qualify again.

use crate::error::CommerceError;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default ledger file name.
pub const DEFAULT_USERNAMES_FILE: &str = "existing_usernames.txt";

/// Append-only record of usernames seen so far.
#[derive(Debug, Clone)]
pub struct UsernameLedger {
    path: PathBuf,
    known: HashSet<String>,
}

impl UsernameLedger {
    /// Open the ledger, creating an empty file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CommerceError> {
        let path = path.into();
        let known = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                CommerceError::PersistenceError(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            fs::File::create(&path).map_err(|e| {
                CommerceError::PersistenceError(format!(
                    "failed to create {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!(path = %path.display(), "created username ledger");
            HashSet::new()
        };

        debug!(path = %path.display(), count = known.len(), "username ledger loaded");
        Ok(Self { path, known })
    }

    /// Record a username.
    ///
    /// Returns `true` when the name was new, i.e. the shopper qualifies for
    /// the first-purchase discount.
    pub fn register(&mut self, username: &str) -> Result<bool, CommerceError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CommerceError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        if self.known.contains(username) {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                CommerceError::PersistenceError(format!(
                    "failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        writeln!(file, "{}", username).map_err(|e| {
            CommerceError::PersistenceError(format!(
                "failed to append to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        self.known.insert(username.to_string());
        info!(username, "new shopper registered");
        Ok(true)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.known.contains(username.trim())
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
