use glam::Vec3;

/// Offset from a followed body to the camera eye.
const BODY_EYE_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 2.0);

/// Which part of the scene the camera follows and the overlay describes.
///
/// One value drives both: clicking a palette entry sets the focus, the next
/// frame's camera step reads it, and the info panel is shown for anything
/// other than the overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Overview,
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    AsteroidBelt,
    BlackHole,
}

/// Where the follow lerp is heading and where the camera should look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl Focus {
    /// Palette order, overview first.
    pub const ALL: [Focus; 13] = [
        Focus::Overview,
        Focus::Sun,
        Focus::Mercury,
        Focus::Venus,
        Focus::Earth,
        Focus::Moon,
        Focus::Mars,
        Focus::Jupiter,
        Focus::Saturn,
        Focus::Uranus,
        Focus::Neptune,
        Focus::AsteroidBelt,
        Focus::BlackHole,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Overview => "Solar system",
            Focus::Sun => "Sun",
            Focus::Mercury => "Mercury",
            Focus::Venus => "Venus",
            Focus::Earth => "Earth",
            Focus::Moon => "Moon",
            Focus::Mars => "Mars",
            Focus::Jupiter => "Jupiter",
            Focus::Saturn => "Saturn",
            Focus::Uranus => "Uranus",
            Focus::Neptune => "Neptune",
            Focus::AsteroidBelt => "Asteroid belt",
            Focus::BlackHole => "Black hole",
        }
    }

    /// True for selections that chase a single moving scene entity. The sun
    /// and the belt use fixed preset poses instead, and the overview follows
    /// nothing.
    pub fn follows_body(self) -> bool {
        !matches!(self, Focus::Overview | Focus::Sun | Focus::AsteroidBelt)
    }

    /// Follow pose for this selection. `body_pos` is the tracked entity's
    /// world position and is only consulted when [`Focus::follows_body`]
    /// holds. `None` means the camera is left alone.
    pub fn camera_pose(self, body_pos: Vec3) -> Option<CameraPose> {
        match self {
            Focus::Overview => None,
            Focus::Sun => Some(CameraPose {
                eye: Vec3::new(3.0, 1.0, 0.0),
                look_at: Vec3::ZERO,
            }),
            Focus::AsteroidBelt => Some(CameraPose {
                eye: Vec3::new(20.0, 13.0, 0.0),
                look_at: Vec3::new(17.0, 0.0, 0.0),
            }),
            _ => Some(CameraPose {
                eye: body_pos + BODY_EYE_OFFSET,
                look_at: body_pos,
            }),
        }
    }

    /// Overlay copy for the info panel; `None` hides the panel.
    pub fn blurb(self) -> Option<&'static str> {
        match self {
            Focus::Overview => None,
            Focus::Sun => Some(
                "The star at the center of the system. Every other body here \
                 circles it, lit by a single warm point light.",
            ),
            Focus::Mercury => Some(
                "Smallest and innermost planet, racing around the sun on the \
                 tightest orbit in the scene.",
            ),
            Focus::Venus => Some(
                "Second planet from the sun, wrapped in thick reflective \
                 cloud cover.",
            ),
            Focus::Earth => Some(
                "The third planet, slowly spinning on its axis while the moon \
                 circles it.",
            ),
            Focus::Moon => Some(
                "Earth's only natural satellite, orbiting its planet once for \
                 every few degrees Earth moves around the sun.",
            ),
            Focus::Mars => Some("The red planet, fourth from the sun."),
            Focus::Jupiter => Some(
                "The largest planet in the system, a gas giant on a wide, \
                 slow orbit.",
            ),
            Focus::Saturn => Some(
                "Gas giant famous for its ring system, tilted here at a fixed \
                 angle set when the scene is built.",
            ),
            Focus::Uranus => Some(
                "Ice giant with a narrow ring, orbiting far beyond Saturn.",
            ),
            Focus::Neptune => Some(
                "The outermost planet, creeping along the slowest orbit of \
                 the eight.",
            ),
            Focus::AsteroidBelt => Some(
                "A hundred rocks on independent circular orbits between 17 \
                 and 23 units out, each with its own speed.",
            ),
            Focus::BlackHole => Some(
                "A stylized compact object far outside the planets: event \
                 horizon, accretion disk and glow shell jittering together.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_has_no_pose_and_no_blurb() {
        assert_eq!(Focus::Overview.camera_pose(Vec3::ZERO), None);
        assert_eq!(Focus::Overview.blurb(), None);
    }

    #[test]
    fn preset_poses_match_the_scene_layout() {
        let sun = Focus::Sun.camera_pose(Vec3::ZERO).unwrap();
        assert_eq!(sun.eye, Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(sun.look_at, Vec3::ZERO);

        let belt = Focus::AsteroidBelt.camera_pose(Vec3::ZERO).unwrap();
        assert_eq!(belt.eye, Vec3::new(20.0, 13.0, 0.0));
        assert_eq!(belt.look_at, Vec3::new(17.0, 0.0, 0.0));
    }

    #[test]
    fn body_pose_trails_the_body() {
        let pos = Vec3::new(5.0, 0.0, -2.0);
        let pose = Focus::Earth.camera_pose(pos).unwrap();
        assert_eq!(pose.eye, pos + Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(pose.look_at, pos);
    }

    #[test]
    fn every_selection_except_overview_has_overlay_copy() {
        for focus in Focus::ALL {
            assert_eq!(focus.blurb().is_some(), focus != Focus::Overview);
        }
    }

    #[test]
    fn follows_body_excludes_the_fixed_presets() {
        assert!(!Focus::Overview.follows_body());
        assert!(!Focus::Sun.follows_body());
        assert!(!Focus::AsteroidBelt.follows_body());
        assert!(Focus::Moon.follows_body());
        assert!(Focus::BlackHole.follows_body());
    }
}
