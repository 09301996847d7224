mod atomic_write;
mod export_error;
mod export_plugin;
mod file_names;
mod writer;


pub use export_error::ExportError;
pub use export_plugin::{ExportDir, ExportOutcome, ExportPlugin, ExportRequest, ExportStatus};
pub use file_names::{design_file_name, history_file_name, numbered_file_name};
pub use writer::{
    design_to_json, export_design, export_history_item, history_item_to_json, unused_path,
};

/// Used when no export directory is configured.
pub const DEFAULT_EXPORT_DIR: &str = "exports";
