use crate::orbit::CircularOrbit;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

pub const ASTEROID_COUNT: usize = 100;
pub const ORBIT_RADIUS_RANGE: Range<f32> = 17.0..23.0;
pub const ORBIT_SPEED_RANGE: Range<f32> = 0.001..0.003;
pub const BODY_SIZE_RANGE: Range<f32> = 0.1..0.2;

/// Parameters for one asteroid. Belt members never interact; each one
/// evolves its own `(radius, angle)` independently.
#[derive(Clone, Copy, Debug)]
pub struct AsteroidSeed {
    pub orbit: CircularOrbit,
    /// Visual radius of the rock itself, not the orbit.
    pub size: f32,
}

/// Rolls the whole belt: uniform orbit radius within the band, uniform
/// starting angle, and an independent uniform angular speed per member.
pub fn generate(rng: &mut impl Rng) -> Vec<AsteroidSeed> {
    (0..ASTEROID_COUNT)
        .map(|_| AsteroidSeed {
            orbit: CircularOrbit::new(
                rng.gen_range(ORBIT_RADIUS_RANGE),
                rng.gen_range(0.0..TAU),
                rng.gen_range(ORBIT_SPEED_RANGE),
            ),
            size: rng.gen_range(BODY_SIZE_RANGE),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn belt_parameters_stay_inside_the_bands() {
        let mut rng = StdRng::seed_from_u64(42);
        let belt = generate(&mut rng);
        assert_eq!(belt.len(), ASTEROID_COUNT);

        for seed in &belt {
            assert!(ORBIT_RADIUS_RANGE.contains(&seed.orbit.radius));
            assert!(ORBIT_SPEED_RANGE.contains(&seed.orbit.speed));
            assert!(BODY_SIZE_RANGE.contains(&seed.size));
            assert!(seed.orbit.angle >= 0.0 && seed.orbit.angle < TAU);
        }
    }

    #[test]
    fn members_are_independently_parameterized() {
        let mut rng = StdRng::seed_from_u64(7);
        let belt = generate(&mut rng);
        let first = belt[0].orbit;
        assert!(belt
            .iter()
            .skip(1)
            .any(|seed| seed.orbit.speed != first.speed || seed.orbit.radius != first.radius));
    }
}
