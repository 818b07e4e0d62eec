use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

/// Load a JSON state file and deserialize it.
///
/// A missing file maps to [`StoreError::NotFound`]; a file that exists but
/// does not parse maps to [`StoreError::Corrupt`].
pub async fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a JSON state file atomically: write to a sibling temp file, then
/// rename over the target. Readers never observe a partial write.
pub async fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(value)?;

    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, &body)
        .await
        .map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
