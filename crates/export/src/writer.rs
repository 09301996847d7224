//! Serialize designs and history items to pretty JSON files.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use planner::design::{HistoryItem, HouseDesign};

use crate::atomic_write::atomic_write;
use crate::export_error::ExportError;
use crate::file_names::{design_file_name, history_file_name, numbered_file_name};

/// Pretty JSON, two-space indent, camelCase keys.
pub fn design_to_json(design: &HouseDesign) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(design)?)
}

pub fn history_item_to_json(item: &HistoryItem) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// First of `name`, `name_2`, `name_3`, ... not yet present in `dir`, so a
/// repeated title or date never replaces an earlier export.
pub fn unused_path(dir: &Path, name: &str) -> PathBuf {
    (1..)
        .map(|n| dir.join(numbered_file_name(name, n)))
        .find(|path| !path.exists())
        .unwrap_or_else(|| dir.join(name))
}

/// Write `design` into `dir`. Returns the path written.
pub fn export_design(dir: &Path, design: &HouseDesign) -> Result<PathBuf, ExportError> {
    let json = design_to_json(design)?;
    let path = unused_path(dir, &design_file_name(&design.title));
    atomic_write(&path, json.as_bytes())?;
    info!("Exported design '{}' to {}", design.title, path.display());
    Ok(path)
}

/// Write a whole history entry (inputs and batch) into `dir`.
pub fn export_history_item(dir: &Path, item: &HistoryItem) -> Result<PathBuf, ExportError> {
    let json = history_item_to_json(item)?;
    let path = unused_path(dir, &history_file_name(item.created_at));
    atomic_write(&path, json.as_bytes())?;
    info!("Exported history item {} to {}", item.id, path.display());
    Ok(path)
}
