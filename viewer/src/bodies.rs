use super::*;
use orrery::shake;

/// Orbital state for one entity circling the origin. The angle advances by a
/// fixed per-frame increment and the translation is recomputed from
/// `(radius, angle)` alone.
#[derive(Component)]
pub struct Orbiting(pub CircularOrbit);

/// A body circling another body instead of the origin: the moon. The orbit
/// is primary-relative; the primary's own motion carries it along. Kept out
/// of the scene-graph hierarchy so the primary's self-rotation does not drag
/// the satellite around.
#[derive(Component)]
pub struct SatelliteOf {
    pub primary: Entity,
    pub orbit: CircularOrbit,
}

/// Per-frame self-rotation about +Y, radians.
#[derive(Component)]
pub struct Spin(pub f32);

/// Marks the entity the camera chases for a given selection.
#[derive(Component)]
pub struct FollowTarget(pub Focus);

/// Base position plus jitter intensity for the compact object. Its three
/// meshes are children of this entity, so offsetting the one transform moves
/// core, disk and glow in lockstep.
#[derive(Component)]
pub struct ShakenBody {
    pub base: Vec3,
    pub intensity: f32,
}

pub fn advance_orbits(mut query: Query<(&mut Orbiting, &mut Transform)>) {
    for (mut orbiting, mut transform) in query.iter_mut() {
        orbiting.0.advance();
        transform.translation = orbiting.0.position(transform.translation.y);
    }
}

pub fn advance_satellites(
    mut satellites: Query<(&mut SatelliteOf, &mut Transform), Without<Orbiting>>,
    primaries: Query<&Transform, With<Orbiting>>,
) {
    for (mut satellite, mut transform) in satellites.iter_mut() {
        let Ok(primary) = primaries.get(satellite.primary) else {
            continue;
        };
        satellite.orbit.advance();
        transform.translation = primary.translation + satellite.orbit.position(0.0);
    }
}

pub fn spin_bodies(mut query: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in query.iter_mut() {
        transform.rotate_y(spin.0);
    }
}

/// Recomputed from elapsed wall-clock time every frame, never integrated.
pub fn apply_shake(time: Res<Time>, mut query: Query<(&ShakenBody, &mut Transform)>) {
    for (shaken, mut transform) in query.iter_mut() {
        transform.translation =
            shaken.base + shake::shake_offset(time.elapsed_secs(), shaken.intensity);
    }
}
