use glam::Vec3;
use std::f32::consts::TAU;

/// Circular orbit in the XZ plane, advanced by a fixed per-frame increment.
///
/// The position is fully determined by `(radius, angle)` — there is no
/// velocity state and nothing is integrated over variable time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularOrbit {
    pub radius: f32,
    /// Radians, kept in `[0, 2π)` by [`CircularOrbit::advance`].
    pub angle: f32,
    /// Radians per frame.
    pub speed: f32,
}

impl CircularOrbit {
    pub fn new(radius: f32, angle: f32, speed: f32) -> Self {
        Self {
            radius,
            angle,
            speed,
        }
    }

    /// Derives the orbit from a starting position: `radius` is the distance
    /// from the Y axis, `angle` the polar angle in the XZ plane. The y
    /// coordinate is ignored.
    pub fn from_position(pos: Vec3, speed: f32) -> Self {
        Self {
            radius: (pos.x * pos.x + pos.z * pos.z).sqrt(),
            angle: pos.z.atan2(pos.x),
            speed,
        }
    }

    /// One frame of orbital motion, wrapping mod 2π.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
    }

    /// Cartesian position for the current angle; `y` passes through
    /// unchanged.
    #[inline]
    pub fn position(&self, y: f32) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.cos(),
            y,
            self.radius * self.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_fixed_increments() {
        let mut orbit = CircularOrbit::new(5.0, 0.25, 0.01);
        for _ in 0..100 {
            orbit.advance();
        }
        assert!((orbit.angle - (0.25 + 100.0 * 0.01)).abs() < 1e-4);
    }

    #[test]
    fn advance_wraps_mod_tau() {
        let mut orbit = CircularOrbit::new(3.0, TAU - 0.005, 0.01);
        orbit.advance();
        assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
        assert!((orbit.angle - 0.005).abs() < 1e-5);
    }

    #[test]
    fn position_is_pure_in_radius_and_angle() {
        let orbit = CircularOrbit::new(8.0, 1.3, 0.002);
        assert_eq!(orbit.position(0.5), orbit.position(0.5));

        let expected = Vec3::new(8.0 * 1.3_f32.cos(), 0.5, 8.0 * 1.3_f32.sin());
        assert!(orbit.position(0.5).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn from_position_recovers_polar_parameters() {
        let start = Vec3::new(3.0, 0.0, 4.0);
        let orbit = CircularOrbit::from_position(start, 0.01);
        assert!((orbit.radius - 5.0).abs() < 1e-6);
        assert!((orbit.angle - (4.0_f32).atan2(3.0)).abs() < 1e-6);
        // Recomputing the position at the derived angle lands back on the
        // start (modulo the radius snap onto the circle).
        assert!(orbit.position(0.0).abs_diff_eq(start, 1e-5));
    }
}
