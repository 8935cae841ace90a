// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Snapshot persistence as a single JSON file.
//!
//! The file is raw, untrusted input on the way in: it is read as an untyped
//! JSON value and handed to the engine for validation. On the way out it is
//! written to a temp file first and renamed over the old one, so a crash
//! never leaves a half-written snapshot behind.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};

use serde_json::Value;

use super::StoragePaths;
use crate::engine::Snapshot;

/// Error type for snapshot file operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations
    Io(io::Error),
    /// File contents are not JSON
    Json(serde_json::Error),
    /// No snapshot has been written yet
    NotFound(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Json(e) => write!(f, "JSON error: {e}"),
            StorageError::NotFound(path) => write!(f, "Not found: {path}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
            StorageError::NotFound(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(e.to_string())
        } else {
            StorageError::Io(e)
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The blog snapshot on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    paths: StoragePaths,
}

impl SnapshotFile {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Create the data directory. Safe to call multiple times.
    pub fn initialize(&self) -> StorageResult<()> {
        fs::create_dir_all(self.paths.root())?;
        Ok(())
    }

    /// Whether a snapshot entry is present.
    ///
    /// Only a missing entry counts as absent. An entry that exists but cannot
    /// be inspected is an error, never "no snapshot".
    pub fn exists(&self) -> StorageResult<bool> {
        match fs::symlink_metadata(self.paths.state_file()) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Read the snapshot as untyped JSON.
    pub fn read_raw(&self) -> StorageResult<Value> {
        let path = self.paths.state_file();
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Io(e),
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Write the snapshot (atomic write via rename).
    pub fn write(&self, snapshot: &Snapshot) -> StorageResult<()> {
        let path = self.paths.state_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, snapshot)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, &path)?;
        tracing::debug!(path = %path.display(), "Saved blog snapshot");
        Ok(())
    }
}
