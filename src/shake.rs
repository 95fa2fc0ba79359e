use glam::Vec3;

/// Base frequency multiplier for the jitter sinusoids. Each axis runs at a
/// different multiple of this so the motion never looks periodic.
const FREQUENCY: f32 = 100.0;

/// Per-axis amplitude for a given shake intensity.
#[inline]
pub fn amplitude(intensity: f32) -> f32 {
    0.1 * intensity
}

/// Jitter offset for the compact object at `elapsed` seconds of wall-clock
/// time. Pure in `elapsed` — nothing is integrated, so the effect is
/// restartable from any point in time.
pub fn shake_offset(elapsed: f32, intensity: f32) -> Vec3 {
    let a = amplitude(intensity);
    Vec3::new(
        (elapsed * FREQUENCY).sin() * a,
        (elapsed * FREQUENCY * 1.2).cos() * a,
        (elapsed * FREQUENCY * 0.8).sin() * a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_at_time_zero_is_straight_up() {
        let intensity = 0.1;
        let offset = shake_offset(0.0, intensity);
        assert_eq!(offset, Vec3::new(0.0, amplitude(intensity), 0.0));
    }

    #[test]
    fn no_axis_ever_exceeds_the_amplitude() {
        let intensity = 0.35;
        let a = amplitude(intensity);
        for i in 0..10_000 {
            let offset = shake_offset(i as f32 * 0.0137, intensity);
            assert!(offset.x.abs() <= a + f32::EPSILON);
            assert!(offset.y.abs() <= a + f32::EPSILON);
            assert!(offset.z.abs() <= a + f32::EPSILON);
        }
    }

    #[test]
    fn offset_is_a_pure_function_of_time() {
        assert_eq!(shake_offset(3.7, 0.1), shake_offset(3.7, 0.1));
    }
}
