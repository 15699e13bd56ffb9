//! Snapshot persistence
//!
//! Snapshots are pretty-printed JSON so a paused long run can be
//! inspected by eye. Validation happens in the engine on restore; the
//! store only gets the bytes on and off disk.

use primelaw_engine::LawSnapshot;
use std::path::Path;
use tracing::info;

use crate::errors::{StoreError, StoreResult};

/// Write a snapshot as pretty JSON.
pub fn save_snapshot(path: &Path, snapshot: &LawSnapshot) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| StoreError::io(path, e))?;
    info!(path = %path.display(), next_index = snapshot.next_index, "snapshot saved");
    Ok(())
}

/// Read a snapshot back. The caller restores it through
/// `PrimeLaw::restore`, which validates every label.
pub fn load_snapshot(path: &Path) -> StoreResult<LawSnapshot> {
    let text = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
