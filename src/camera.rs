use glam::Vec3;

/// Interpolation factor applied once per frame while a target is followed.
pub const FOLLOW_LERP: f32 = 0.1;

/// Camera position eased toward the current follow target.
///
/// With no target the position holds its last value; the follow logic never
/// moves the camera on its own in that state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowCamera {
    pub position: Vec3,
}

impl FollowCamera {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// One frame of follow motion.
    pub fn step(&mut self, target: Option<Vec3>) {
        if let Some(target) = target {
            self.position = self.position.lerp(target, FOLLOW_LERP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_contracts_toward_target() {
        let target = Vec3::new(3.0, 1.0, 0.0);
        let mut camera = FollowCamera::new(Vec3::new(8.0, 10.0, 20.0));
        let before = camera.position.distance(target);
        camera.step(Some(target));
        assert!(camera.position.distance(target) < before);
    }

    #[test]
    fn step_at_target_stays_put() {
        let target = Vec3::new(20.0, 13.0, 0.0);
        let mut camera = FollowCamera::new(target);
        camera.step(Some(target));
        assert_eq!(camera.position, target);
    }

    #[test]
    fn sun_selection_converges_over_fifty_frames() {
        // Mirrors picking the sun from the overview pose: every frame gets
        // strictly closer to (3, 1, 0) until the remainder is negligible.
        let target = Vec3::new(3.0, 1.0, 0.0);
        let mut camera = FollowCamera::new(Vec3::new(8.0, 10.0, 20.0));
        let mut last = camera.position.distance(target);
        for _ in 0..50 {
            camera.step(Some(target));
            let now = camera.position.distance(target);
            assert!(now < last);
            last = now;
        }
        assert!(last < 0.15);
    }

    #[test]
    fn no_target_means_no_movement() {
        let mut camera = FollowCamera::new(Vec3::new(8.0, 10.0, 20.0));
        for _ in 0..50 {
            camera.step(None);
        }
        assert_eq!(camera.position, Vec3::new(8.0, 10.0, 20.0));
    }
}
