use bevy::prelude::*;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_dark_room);
    }
}

/// A barely lit room with a few props, so the beam has something to hit.
fn spawn_dark_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.2, 0.2, 0.3),
        brightness: 8.0,
        ..default()
    });

    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.25, 0.28),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(40.0, 40.0))),
        MeshMaterial3d(floor_material),
        Transform::default(),
    ));

    let crate_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.35, 0.25),
        perceptual_roughness: 0.8,
        ..default()
    });
    for (x, z, size) in [(-4.0, -8.0, 1.2), (3.0, -6.0, 0.8), (0.5, -12.0, 1.6)] {
        commands.spawn((
            Name::new("Crate"),
            Mesh3d(meshes.add(Cuboid::new(size, size, size))),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_xyz(x, size / 2.0, z),
        ));
    }

    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.3, 0.32),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.spawn((
        Name::new("BackWall"),
        Mesh3d(meshes.add(Cuboid::new(40.0, 6.0, 0.5))),
        MeshMaterial3d(wall_material),
        Transform::from_xyz(0.0, 3.0, -20.0),
    ));
}
