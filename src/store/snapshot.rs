// src/store/snapshot.rs
//! Durable mirror of the persisted slice of a session

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::types::{BuilderStep, CvData, DeploymentState, WebsiteConfig};

/// Record name of the session mirror inside the state directory
pub const SNAPSHOT_RECORD: &str = "portfolio-builder-storage";
/// Sidecar record holding deployment progress next to the session mirror
pub const DEPLOYMENT_RECORD: &str = "portfolio-builder-deployment";

/// The persisted slice of a session. Absent keys fall back to defaults on rehydration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedSnapshot {
    pub user_id: Option<String>,
    pub cv_data: Option<CvData>,
    pub website_config: Option<WebsiteConfig>,
    pub current_step: Option<BuilderStep>,
}

/// A JSON file holding one [`PersistedSnapshot`]
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default record location inside `state_dir`
    pub fn in_dir(state_dir: &Path) -> Self {
        Self::new(state_dir.join(format!("{}.json", SNAPSHOT_RECORD)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the deployment sidecar, in the same directory as the snapshot
    pub fn deployment_path(&self) -> PathBuf {
        self.path
            .with_file_name(format!("{}.json", DEPLOYMENT_RECORD))
    }

    /// Read the record. A missing record is `Ok(None)`.
    pub fn read(&self) -> Result<Option<PersistedSnapshot>> {
        read_record(&self.path)
    }

    /// Read the record, treating an unreadable one like a missing one.
    pub fn load(&self) -> Option<PersistedSnapshot> {
        load_record(&self.path, "session snapshot")
    }

    pub fn write(&self, snapshot: &PersistedSnapshot) -> Result<()> {
        write_record(&self.path, snapshot)
    }

    pub fn read_deployment(&self) -> Result<Option<DeploymentState>> {
        read_record(&self.deployment_path())
    }

    pub fn load_deployment(&self) -> Option<DeploymentState> {
        load_record(&self.deployment_path(), "deployment record")
    }

    pub fn write_deployment(&self, deployment: &DeploymentState) -> Result<()> {
        write_record(&self.deployment_path(), deployment)
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let Some(content) = FsOps::read_optional(path)? else {
        return Ok(None);
    };

    let record = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(record))
}

fn load_record<T: DeserializeOwned>(path: &Path, what: &str) -> Option<T> {
    match read_record(path) {
        Ok(record) => record,
        Err(e) => {
            app_log!(warn, "Ignoring {}: {:#}", what, e);
            None
        }
    }
}

fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(record)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    FsOps::write_atomic(path, &content)
}
