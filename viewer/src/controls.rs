use super::*;

/// Free-look rig, only active in the overview: yaw/pitch orbit around the
/// origin plus scroll zoom. While a body is followed the rig tracks the
/// camera instead, so free look resumes from wherever the follow left off.
#[derive(Resource)]
pub struct FreeLook {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    dirty: bool,
}

impl FreeLook {
    pub fn from_eye(eye: Vec3) -> Self {
        let mut rig = Self {
            distance: 1.0,
            pitch: 0.0,
            yaw: 0.0,
            dirty: false,
        };
        rig.sync_from(eye);
        rig
    }

    fn view_dir(&self) -> Vec3 {
        Vec3::new(
            self.pitch.sin() * self.yaw.sin(),
            self.pitch.cos(),
            self.pitch.sin() * self.yaw.cos(),
        )
    }

    fn eye(&self) -> Vec3 {
        self.view_dir() * self.distance
    }

    fn rotate_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.pitch += pitch / 100.0;
        self.yaw += yaw / 100.0;
        self.dirty = true;
    }

    fn zoom(&mut self, factor: f32) {
        self.distance *= factor;
        self.dirty = true;
    }

    fn sync_from(&mut self, eye: Vec3) {
        self.distance = eye.length().max(0.01);
        let dir = eye / self.distance;
        self.pitch = dir.y.clamp(-1.0, 1.0).acos();
        self.yaw = dir.x.atan2(dir.z);
        self.dirty = false;
    }
}

pub fn handle_mouse_drags(
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut rig: ResMut<FreeLook>,
    followed: Res<Followed>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion_events.read() {
        delta += event.delta;
    }

    if followed.0 != Focus::Overview {
        return;
    }

    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    if ctx.is_using_pointer() {
        return;
    }

    let sensitivity = Vec2::splat(2.0);

    if buttons.pressed(MouseButton::Left) || buttons.pressed(MouseButton::Right) {
        rig.rotate_yaw_pitch(
            -0.1 * delta.x * sensitivity.x,
            -0.1 * delta.y * sensitivity.y,
        );
    }
}

pub fn handle_mouse_scroll(
    mut mouse_wheel_events: EventReader<MouseWheel>,
    mut rig: ResMut<FreeLook>,
    followed: Res<Followed>,
) {
    for mouse_wheel_event in mouse_wheel_events.read() {
        if followed.0 != Focus::Overview {
            continue;
        }
        let factor = match mouse_wheel_event.unit {
            MouseScrollUnit::Line => 1.0,
            MouseScrollUnit::Pixel => 0.005,
        };
        rig.zoom(1.0 + mouse_wheel_event.y * -0.1 * factor);
    }
}

pub fn apply_free_look(
    followed: Res<Followed>,
    mut rig: ResMut<FreeLook>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    let mut transform = camera.single_mut();

    if followed.0 != Focus::Overview {
        rig.sync_from(transform.translation);
        return;
    }

    if !rig.dirty {
        // No input this frame; the camera holds its last pose.
        return;
    }
    rig.dirty = false;

    *transform = Transform::from_translation(rig.eye()).looking_at(Vec3::ZERO, Vec3::Y);
}
