//! Session history of generation requests and the batch on screen.

use std::collections::VecDeque;

use bevy::prelude::*;
use uuid::Uuid;

use crate::design::{HistoryItem, HouseDesign};
use crate::draft::{DesignDraft, PlannerStep};

/// Every completed request this session, most recent first. Append-only.
#[derive(Resource, Default, Debug)]
pub struct DesignHistory {
    items: VecDeque<HistoryItem>,
}

impl DesignHistory {
    pub fn push_front(&mut self, item: HistoryItem) {
        self.items.push_front(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }
}

/// The batch currently shown in the gallery.
#[derive(Resource, Default, Debug)]
pub struct CurrentDesigns(pub Vec<HouseDesign>);

/// Bring a past request back: its inputs into the draft, its batch on screen.
#[derive(Event, Clone, Copy, Debug)]
pub struct SelectHistoryItem(pub Uuid);

pub fn restore_history_item(
    mut events: EventReader<SelectHistoryItem>,
    history: Res<DesignHistory>,
    mut draft: ResMut<DesignDraft>,
    mut current: ResMut<CurrentDesigns>,
    mut step: ResMut<PlannerStep>,
) {
    for SelectHistoryItem(id) in events.read() {
        let Some(item) = history.get(*id) else {
            warn!("History item {} not found, ignoring selection", id);
            continue;
        };
        draft.restore(&item.land_measurement, &item.preferences);
        current.0 = item.designs.clone();
        *step = PlannerStep::Designs;
        info!("Restored history item {} ({})", id, item.headline());
    }
}
