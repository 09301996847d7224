use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};

/// Continuous-redraw lease held while the 3D plot is on screen.
///
/// The app idles in reactive low-power mode. Acquiring the lease switches the
/// window to continuous updates and remembers the previous modes; releasing it
/// puts them back. Both operations are idempotent, and work without a window
/// (headless apps have no `WinitSettings`).
#[derive(Resource, Default, Debug)]
pub struct RenderModeLease {
    held: bool,
    saved: Option<(UpdateMode, UpdateMode)>,
}

impl RenderModeLease {
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn acquire(&mut self, settings: Option<&mut WinitSettings>) {
        if self.held {
            return;
        }
        self.held = true;
        if let Some(settings) = settings {
            self.saved = Some((settings.focused_mode, settings.unfocused_mode));
            settings.focused_mode = UpdateMode::Continuous;
            settings.unfocused_mode = UpdateMode::Continuous;
        }
        info!("3D view active: continuous rendering");
    }

    pub fn release(&mut self, settings: Option<&mut WinitSettings>) {
        if !self.held {
            return;
        }
        self.held = false;
        if let (Some(settings), Some((focused, unfocused))) = (settings, self.saved.take()) {
            settings.focused_mode = focused;
            settings.unfocused_mode = unfocused;
        }
        info!("3D view released: back to reactive rendering");
    }
}
