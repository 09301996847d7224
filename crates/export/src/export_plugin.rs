use std::path::PathBuf;

use bevy::prelude::*;
use planner::history::{CurrentDesigns, DesignHistory};
use uuid::Uuid;

use crate::export_error::ExportError;
use crate::writer::{export_design, export_history_item};

/// Directory exports are written to. Relative paths resolve against the
/// working directory.
#[derive(Resource, Clone, Debug)]
pub struct ExportDir(pub PathBuf);

impl Default for ExportDir {
    fn default() -> Self {
        Self(PathBuf::from(crate::DEFAULT_EXPORT_DIR))
    }
}

/// Export one design (looked up in the current batch, then in history) or a
/// whole history entry.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportRequest {
    Design(Uuid),
    HistoryItem(Uuid),
}

/// Outcome of the most recent export, shown in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Failed(String),
}

#[derive(Resource, Default, Debug)]
pub struct ExportStatus {
    pub last: Option<ExportOutcome>,
}

pub fn handle_export_requests(
    mut requests: EventReader<ExportRequest>,
    dir: Res<ExportDir>,
    current: Res<CurrentDesigns>,
    history: Res<DesignHistory>,
    mut status: ResMut<ExportStatus>,
) {
    for request in requests.read() {
        let result = match *request {
            ExportRequest::Design(id) => current
                .0
                .iter()
                .chain(history.iter().flat_map(|item| item.designs.iter()))
                .find(|design| design.id == id)
                .ok_or(ExportError::NotFound(id))
                .and_then(|design| export_design(&dir.0, design)),
            ExportRequest::HistoryItem(id) => history
                .get(id)
                .ok_or(ExportError::NotFound(id))
                .and_then(|item| export_history_item(&dir.0, item)),
        };

        status.last = Some(match result {
            Ok(path) => ExportOutcome::Written(path),
            Err(e) => {
                warn!("Export failed: {}", e);
                ExportOutcome::Failed(e.to_string())
            }
        });
    }
}

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExportDir>()
            .init_resource::<ExportStatus>()
            .add_event::<ExportRequest>()
            .add_systems(Update, handle_export_requests);
    }
}
