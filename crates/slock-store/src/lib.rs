//! Durable persistence for the slock lock record.
//!
//! The record is stored as a single JSON document and replaced wholesale on
//! every save. Saves are staged to a temporary file in the record's
//! directory, synced, then atomically renamed over the record, so a crash
//! mid-save leaves the previous record intact rather than a partially
//! written one. In-place overwrites are never performed.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use slock_core::LockRecord;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem-level read, write or rename failure.
    #[error("state file I/O failed at {}: {source}", path.display())]
    Io {
        /// Path of the record involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The record could not be serialized.
    #[error("could not encode lock record: {0}")]
    Encode(#[source] serde_json::Error),

    /// The on-disk record is malformed or missing fields.
    #[error("malformed lock record at {}: {source}", path.display())]
    Decode {
        /// Path of the record involved.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the durable lock record at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Bind a store to the record's path. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the durable record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole record.
    ///
    /// A missing or malformed record is an error. Callers should treat this
    /// as fatal at startup: operating on an assumed default state would
    /// desynchronize the lock from its durable record.
    pub fn load(&self) -> Result<LockRecord, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| self.io_error(source))?;

        serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Decode { path: self.path.clone(), source })
    }

    /// Save the whole record atomically.
    ///
    /// The encoded record is staged to a temporary file next to the target
    /// (same filesystem, so the rename is atomic), synced, then renamed over
    /// the record. The previous record stays valid until the rename commits.
    pub fn save(&self, record: &LockRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record).map_err(StoreError::Encode)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        staged.write_all(&bytes).map_err(|source| self.io_error(source))?;
        staged.as_file().sync_all().map_err(|source| self.io_error(source))?;

        staged.persist(&self.path).map_err(|err| self.io_error(err.error))?;

        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}
