use super::*;
use std::f32::consts::TAU;

/// Segments per orbit ring; one extra vertex closes the loop.
const ORBIT_SEGMENTS: usize = 64;

/// Vertices of a closed circle of the given radius in the XZ plane.
pub fn circle_points(radius: f32) -> Vec<Vec3> {
    (0..=ORBIT_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ORBIT_SEGMENTS as f32 * TAU;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

/// Static decoration marking one circular orbit. Vertices are computed once
/// at setup; nothing updates them afterwards.
pub fn spawn_orbit_ring(
    commands: &mut Commands,
    polylines: &mut Assets<Polyline>,
    polyline_materials: &mut Assets<PolylineMaterial>,
    radius: f32,
    color: Color,
) {
    commands.spawn(PolylineBundle {
        polyline: PolylineHandle(polylines.add(Polyline {
            vertices: circle_points(radius),
        })),
        material: PolylineMaterialHandle(polyline_materials.add(PolylineMaterial {
            width: 1.0,
            color: color.to_linear(),
            perspective: false,
            ..Default::default()
        })),
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_closed_loops_on_the_orbit_radius() {
        let points = circle_points(10.0);
        assert_eq!(points.len(), ORBIT_SEGMENTS + 1);
        assert!(points.first().unwrap().abs_diff_eq(*points.last().unwrap(), 1e-4));
        for point in &points {
            assert!((point.length() - 10.0).abs() < 1e-4);
            assert_eq!(point.y, 0.0);
        }
    }
}
