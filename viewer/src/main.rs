use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, egui};
use bevy_polyline::prelude::*;
use orrery::{CircularOrbit, Focus, FollowCamera};

mod bodies;
mod controls;
mod paths;
mod setup;
mod ui;

use bodies::{
    FollowTarget, Orbiting, SatelliteOf, ShakenBody, Spin, advance_orbits, advance_satellites,
    apply_shake, spin_bodies,
};
use controls::{FreeLook, apply_free_look, handle_mouse_drags, handle_mouse_scroll};
use setup::setup;
use ui::update_ui;

/// Camera pose before anything is selected.
const INITIAL_CAMERA_POS: Vec3 = Vec3::new(8.0, 10.0, 20.0);

/// Current selection; drives both the follow camera and the info overlay.
/// Written only by the UI, read by everything else.
#[derive(Resource, Default)]
struct Followed(Focus);

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(0x06, 0x0a, 0x22)))
        .insert_resource(FreeLook::from_eye(INITIAL_CAMERA_POS))
        .init_resource::<Followed>()
        .add_plugins(DefaultPlugins)
        .add_plugins(PolylinePlugin)
        .add_plugins(EguiPlugin)
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                advance_orbits,
                advance_satellites.after(advance_orbits),
                spin_bodies,
                apply_shake,
                handle_mouse_drags.before(apply_free_look),
                handle_mouse_scroll.before(apply_free_look),
                apply_free_look,
                follow_camera
                    .after(advance_orbits)
                    .after(advance_satellites)
                    .after(apply_shake)
                    .after(apply_free_look),
                update_ui,
            ),
        )
        .run();
}

/// Eases the camera toward the pose for the current selection. The overview
/// writes nothing, so the camera simply stays wherever it was.
fn follow_camera(
    followed: Res<Followed>,
    targets: Query<(&FollowTarget, &GlobalTransform)>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    let focus = followed.0;
    let body_pos = if focus.follows_body() {
        match targets.iter().find(|(target, _)| target.0 == focus) {
            Some((_, global)) => global.translation(),
            None => return,
        }
    } else {
        Vec3::ZERO
    };

    let Some(pose) = focus.camera_pose(body_pos) else {
        return;
    };

    let mut transform = camera.single_mut();
    let mut follow = FollowCamera::new(transform.translation);
    follow.step(Some(pose.eye));
    transform.translation = follow.position;
    transform.look_at(pose.look_at, Vec3::Y);
}
