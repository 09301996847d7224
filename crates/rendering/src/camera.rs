use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use planner::plot_geometry::PlotScene;

use crate::egui_input_guard::egui_wants_pointer;

const PAN_SPEED: f32 = 20.0;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 3.0;
const MAX_DISTANCE: f32 = 120.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// World units moved per dragged pixel at distance 100.
const DRAG_PAN_SCALE: f32 = 0.1;

/// Orbital camera model: the camera orbits around a focus point on the plot.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
    /// Half-size of the region the focus may pan within.
    pub bounds: Vec2,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.5,
            pitch: 40.0_f32.to_radians(),
            distance: 30.0,
            bounds: Vec2::splat(20.0),
        }
    }
}

impl OrbitCamera {
    /// Re-aim at a freshly built plot: centered, framed by its size.
    pub fn frame(&mut self, scene: &PlotScene) {
        self.focus = scene.camera_focus;
        self.distance = scene.camera_distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.bounds = scene.extent / 2.0;
    }

    fn clamp_focus(&mut self) {
        self.focus.x = self.focus.x.clamp(-self.bounds.x, self.bounds.x);
        self.focus.z = self.focus.z.clamp(-self.bounds.y, self.bounds.y);
    }

    /// Move the focus by a screen-space delta, relative to the current yaw.
    fn pan(&mut self, delta: Vec2) {
        let cos_yaw = self.yaw.cos();
        let sin_yaw = self.yaw.sin();
        self.focus.x += delta.x * cos_yaw + delta.y * sin_yaw;
        self.focus.z += -delta.x * sin_yaw + delta.y * cos_yaw;
        self.clamp_focus();
    }

    fn zoom(&mut self, lines: f32) {
        let factor = 1.0 - lines * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn orbit(&mut self, delta: Vec2) {
        self.yaw += delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }
}

/// Which mouse button is currently dragging the camera, and where it was last.
#[derive(Resource, Default)]
pub struct CameraDrag {
    pub button: Option<MouseButton>,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

pub(crate) fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    (orbit.focus + Vec3::new(x, y, z), orbit.focus)
}

/// System: apply OrbitCamera state to the camera Transform when it changes.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// WASD/Arrow keys: pan focus along the ground plane.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }

    if dir != Vec2::ZERO {
        let scale = orbit.distance / 30.0;
        let step = PAN_SPEED * scale * time.delta_secs();
        orbit.pan(dir.normalize() * step);
    }
}

/// Mouse drags: left/middle pan, right orbits.
pub fn camera_mouse_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if let Some(button) = drag.button {
        if buttons.just_released(button) {
            drag.button = None;
        }
    } else if !egui_wants_pointer(&mut contexts) {
        let pressed = [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
            .into_iter()
            .find(|b| buttons.just_pressed(*b));
        if let (Some(button), Some(pos)) = (pressed, window.cursor_position()) {
            drag.button = Some(button);
            drag.last_pos = pos;
        }
    }

    let (Some(button), Some(pos)) = (drag.button, window.cursor_position()) else {
        return;
    };
    let delta = pos - drag.last_pos;
    drag.last_pos = pos;
    if delta == Vec2::ZERO {
        return;
    }

    match button {
        MouseButton::Right => orbit.orbit(delta),
        _ => {
            let scale = orbit.distance / 100.0 * DRAG_PAN_SCALE;
            orbit.pan(-delta * scale);
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom(dy);
    }
}
