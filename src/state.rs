// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::engine::{self, DefaultStateParams, EngineError, Session, State};
use crate::storage::{SnapshotFile, StorageError};

/// Why the service could not bring up the blog state.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Could not access snapshot: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not load snapshot: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub snapshots: SnapshotFile,
}

impl AppState {
    pub fn new(session: Session, snapshots: SnapshotFile) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            snapshots,
        }
    }

    /// Load the persisted blog, or mint and persist a new one on first run.
    ///
    /// A snapshot that exists but cannot be read or loaded is fatal; only a
    /// missing one is replaced.
    pub fn bootstrap(
        snapshots: SnapshotFile,
        blog_name: &str,
        defaults: DefaultStateParams,
    ) -> Result<Self, StartupError> {
        snapshots.initialize()?;

        let state = if snapshots.exists()? {
            engine::load(&snapshots.read_raw()?)?
        } else {
            let snapshot = engine::create_default(blog_name, Some(defaults));
            snapshots.write(&snapshot)?;
            info!(blog = blog_name, "Created new blog snapshot");
            State::from_snapshot(snapshot)?
        };

        Ok(Self::new(Session::new(state), snapshots))
    }

    /// Persist `session` to disk. Callers swap it in only after this succeeds.
    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.snapshots.write(&engine::save(session.state()))
    }

    /// Apply `change` to a copy of the session, persist it, then swap it in.
    ///
    /// If `change` or the write fails the live session is left as it was.
    pub async fn update<T, E>(
        &self,
        change: impl FnOnce(&mut Session) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let mut guard = self.session.write().await;
        let mut next = guard.clone();
        let output = change(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(output)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;

    #[tokio::test]
    async fn bootstrap_creates_then_reloads_same_identity() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StoragePaths::new(dir.path());

        let first = AppState::bootstrap(
            SnapshotFile::new(paths.clone()),
            "blog",
            DefaultStateParams::default(),
        )
        .unwrap();
        assert!(paths.state_file().exists());
        let address = first.session.read().await.state().identity().address();

        let second = AppState::bootstrap(
            SnapshotFile::new(paths),
            "blog",
            DefaultStateParams::default(),
        )
        .unwrap();
        assert_eq!(
            second.session.read().await.state().identity().address(),
            address
        );
    }

    #[tokio::test]
    async fn failed_update_keeps_live_session() {
        let (_dir, state) = testing::app_state(None);

        let result: Result<(), StorageError> = state
            .update(|session| {
                session.start_new_draft();
                Err(StorageError::NotFound("forced".into()))
            })
            .await;
        assert!(result.is_err());
        assert!(state.session.read().await.state().articles().is_empty());
    }

    #[tokio::test]
    async fn update_persists_before_swapping() {
        let (dir, state) = testing::app_state(None);
        let asset = crate::engine::Asset {
            name: "a.png".into(),
            content_type: "image/png".into(),
            reference: "ab".repeat(32),
        };

        state
            .update(|session| {
                session.register_asset(asset.clone());
                Ok::<_, StorageError>(())
            })
            .await
            .unwrap();

        let snapshots = SnapshotFile::new(StoragePaths::new(dir.path()));
        let reloaded = engine::load(&snapshots.read_raw().unwrap()).unwrap();
        assert_eq!(reloaded.assets(), &[asset]);
        assert_eq!(state.session.read().await.state().assets().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn bootstrap_refuses_unreadable_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StoragePaths::new(dir.path());
        let state_file = paths.state_file();
        // Self-referencing link: the entry exists but cannot be opened
        std::os::unix::fs::symlink(&state_file, &state_file).unwrap();

        let result = AppState::bootstrap(
            SnapshotFile::new(paths),
            "blog",
            DefaultStateParams::default(),
        );
        assert!(matches!(result, Err(StartupError::Storage(_))));
        assert!(std::fs::symlink_metadata(&state_file)
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[test]
    fn bootstrap_refuses_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StoragePaths::new(dir.path());
        std::fs::write(
            paths.state_file(),
            br#"{"beeApi":"http://localhost:1633","postageBatchId":"","privateKey":"0xnope"}"#,
        )
        .unwrap();

        let result = AppState::bootstrap(
            SnapshotFile::new(paths),
            "blog",
            DefaultStateParams::default(),
        );
        assert!(matches!(
            result,
            Err(StartupError::Engine(EngineError::Identity(_)))
        ));
    }
}
