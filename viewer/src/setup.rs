use super::paths::spawn_orbit_ring;
use super::*;
use bevy::render::alpha::AlphaMode;
use orrery::belt;
use rand::thread_rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

const MOON_ORBIT_RADIUS: f32 = 0.7;
const MOON_ORBIT_SPEED: f32 = 0.08;

struct RingSpec {
    inner: f32,
    outer: f32,
    /// One-time tilt about X, set at construction and never animated.
    tilt: f32,
    opacity: f32,
}

struct PlanetSpec {
    focus: Focus,
    texture: &'static str,
    body_radius: f32,
    start: Vec3,
    speed: f32,
    path_color: Color,
    ring: Option<RingSpec>,
    spin: Option<f32>,
}

fn planet_specs() -> [PlanetSpec; 8] {
    [
        PlanetSpec {
            focus: Focus::Mercury,
            texture: "mercury.jpg",
            body_radius: 0.2,
            start: Vec3::new(3.0, 0.0, 0.0),
            speed: 0.01,
            path_color: Color::srgb_u8(0xaa, 0xaa, 0xaa),
            ring: None,
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Venus,
            texture: "venus.jpg",
            body_radius: 0.3,
            start: Vec3::new(4.0, 0.0, 0.0),
            speed: 0.008,
            path_color: Color::srgb_u8(0xdd, 0xdd, 0xdd),
            ring: None,
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Earth,
            texture: "earth.jpg",
            body_radius: 0.4,
            start: Vec3::new(5.0, 0.0, 0.0),
            speed: 0.005,
            path_color: Color::srgb_u8(0x00, 0xff, 0x00),
            ring: None,
            spin: Some(0.0001),
        },
        PlanetSpec {
            focus: Focus::Mars,
            texture: "mars.jpg",
            body_radius: 0.35,
            start: Vec3::new(6.0, 0.0, 0.0),
            speed: 0.004,
            path_color: Color::srgb_u8(0xff, 0x00, 0x00),
            ring: None,
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Jupiter,
            texture: "jupiter.jpg",
            body_radius: 0.8,
            start: Vec3::new(8.0, 0.0, 0.0),
            speed: 0.002,
            path_color: Color::srgb_u8(0x00, 0x00, 0xff),
            ring: None,
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Saturn,
            texture: "saturn.jpg",
            body_radius: 0.7,
            start: Vec3::new(10.0, 0.0, 0.0),
            speed: 0.001,
            path_color: Color::srgb_u8(0x88, 0x88, 0x88),
            ring: Some(RingSpec {
                inner: 0.8,
                outer: 1.5,
                tilt: FRAC_PI_4,
                opacity: 0.7,
            }),
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Uranus,
            texture: "uranus.jpg",
            body_radius: 0.5,
            start: Vec3::new(13.0, 0.0, 0.0),
            speed: 0.003,
            path_color: Color::srgb_u8(0xdd, 0xdd, 0xdd),
            ring: Some(RingSpec {
                inner: 0.8,
                outer: 1.0,
                tilt: -FRAC_PI_3,
                opacity: 0.7,
            }),
            spin: None,
        },
        PlanetSpec {
            focus: Focus::Neptune,
            texture: "neptune.jpg",
            body_radius: 0.55,
            start: Vec3::new(15.0, 0.0, 0.0),
            speed: 0.0005,
            path_color: Color::srgb_u8(0x00, 0x00, 0xff),
            ring: None,
            spin: None,
        },
    ]
}

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut polylines: ResMut<Assets<Polyline>>,
    mut polyline_materials: ResMut<Assets<PolylineMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(INITIAL_CAMERA_POS).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // The sun: a warm shadow-casting point light inside a textured shell.
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0xff, 0xff, 0xe0),
            intensity: 20_000_000.0,
            range: 100.0,
            shadows_enabled: true,
            ..Default::default()
        },
        Transform::IDENTITY,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(1.5).mesh().uv(32, 18))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load("sun.jpg")),
            emissive: LinearRgba::rgb(1.0, 0.27, 0.0) * 0.5,
            perceptual_roughness: 0.8,
            metallic: 0.0,
            ..Default::default()
        })),
        Transform::IDENTITY,
        Name::new("Sun"),
    ));

    let mut earth = None;

    for spec in planet_specs() {
        spawn_orbit_ring(
            &mut commands,
            &mut polylines,
            &mut polyline_materials,
            spec.start.length(),
            spec.path_color,
        );

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(spec.body_radius).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(spec.texture)),
                perceptual_roughness: 0.8,
                metallic: 0.1,
                ..Default::default()
            })),
            Transform::from_translation(spec.start),
            Orbiting(CircularOrbit::from_position(spec.start, spec.speed)),
            FollowTarget(spec.focus),
            Name::new(spec.focus.label()),
        ));

        if let Some(spin) = spec.spin {
            entity.insert(Spin(spin));
        }

        if let Some(ring) = spec.ring {
            // The ring is a child, so transform propagation keeps it locked
            // to the body while its tilt stays fixed.
            entity.with_child((
                Mesh3d(meshes.add(Annulus::new(ring.inner, ring.outer).mesh().resolution(64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 1.0, 1.0, ring.opacity),
                    base_color_texture: Some(asset_server.load("ring.png")),
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..Default::default()
                })),
                Transform::from_rotation(Quat::from_rotation_x(ring.tilt)),
            ));
        }

        if spec.focus == Focus::Earth {
            earth = Some(entity.id());
        }
    }

    // The moon orbits earth, not the origin, so it rides on its primary's
    // position rather than the scene graph.
    if let Some(earth) = earth {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(0.1).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load("moon.jpg")),
                perceptual_roughness: 0.8,
                metallic: 0.1,
                ..Default::default()
            })),
            Transform::from_xyz(5.0 + MOON_ORBIT_RADIUS, 0.0, 0.0),
            SatelliteOf {
                primary: earth,
                orbit: CircularOrbit::new(MOON_ORBIT_RADIUS, 0.0, MOON_ORBIT_SPEED),
            },
            FollowTarget(Focus::Moon),
            Name::new("Moon"),
        ));
    }

    spawn_belt(&mut commands, &mut meshes, &mut materials, &asset_server);
    spawn_black_hole(&mut commands, &mut meshes, &mut materials);

    info!("scene populated: 8 planets, 1 moon, {} asteroids", belt::ASTEROID_COUNT);
}

fn spawn_belt(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
) {
    let mut rng = thread_rng();

    // One unit icosahedron shared by every rock; per-asteroid size comes
    // from the transform scale.
    let rock_mesh = meshes.add(Sphere::new(1.0).mesh().ico(0).unwrap());
    let rock_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load("asteroid.jpg")),
        perceptual_roughness: 0.8,
        metallic: 0.1,
        ..Default::default()
    });

    for seed in belt::generate(&mut rng) {
        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(seed.orbit.position(0.0))
                .with_scale(Vec3::splat(seed.size)),
            Orbiting(seed.orbit),
        ));
    }
}

fn spawn_black_hole(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let base = Vec3::new(40.0, 0.0, 0.0);

    commands
        .spawn((
            Transform::from_translation(base),
            Visibility::default(),
            ShakenBody {
                base,
                intensity: 0.1,
            },
            FollowTarget(Focus::BlackHole),
            Name::new("Black hole"),
        ))
        .with_children(|parent| {
            // Event horizon.
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(32, 18))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::BLACK,
                    unlit: true,
                    ..Default::default()
                })),
            ));
            // Accretion disk.
            parent.spawn((
                Mesh3d(meshes.add(Annulus::new(1.2, 1.3).mesh().resolution(64))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba_u8(0x11, 0x0b, 0x03, 179),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..Default::default()
                })),
                Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ));
            // Glow shell.
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(1.2).mesh().uv(32, 18))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
                    emissive: LinearRgba::rgb(0.106, 0.078, 0.039) * 2.0,
                    unlit: true,
                    alpha_mode: AlphaMode::Add,
                    ..Default::default()
                })),
            ));
        });
}
