// src/store/mod.rs
pub mod session;
pub mod snapshot;

pub use session::{SessionState, SessionStore, UploadedFile};
pub use snapshot::{PersistedSnapshot, SnapshotFile};
