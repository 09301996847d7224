//! Keeps camera input from firing through egui panels.

use bevy_egui::EguiContexts;

/// `true` when the cursor is over an egui panel or egui is handling a drag or
/// click. Camera systems skip their input while this holds.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
