use bevy::prelude::*;

use flashlight::battery::Battery;
use flashlight::components::flashlight::{Flashlight, FlashlightBeam};
use flashlight::input::EYE_HEIGHT;

use crate::camera::PlayerCamera;
use crate::player::Player;

pub struct BeamVfxPlugin;

impl Plugin for BeamVfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_flashlight_beam, update_flashlight_beam).chain());
    }
}

/// Spawn the spotlight as a child of the player once, the first frame the
/// player exists without one.
fn spawn_flashlight_beam(
    mut commands: Commands,
    player_query: Query<(Entity, &Flashlight), (With<Player>, Without<Children>)>,
) {
    for (player_entity, flashlight) in player_query.iter() {
        let beam_entity = commands
            .spawn((
                FlashlightBeam,
                SpotLight {
                    color: Color::srgb(1.0, 0.95, 0.7),
                    intensity: flashlight.intensity,
                    range: flashlight.range,
                    radius: 0.1,
                    shadows_enabled: true,
                    inner_angle: flashlight.inner_angle,
                    outer_angle: flashlight.outer_angle,
                    ..default()
                },
                Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
                Name::new("FlashlightBeam"),
            ))
            .id();

        commands.entity(player_entity).add_child(beam_entity);
        info!("Spawned flashlight beam for player {:?}", player_entity);
    }
}

/// Scale the beam with the remaining charge, kill it while the battery is
/// dead or the device is off, and drag it toward the camera aim.
fn update_flashlight_beam(
    player_query: Query<(&Battery, &Flashlight, &Children), With<Player>>,
    camera_query: Query<&Transform, (With<PlayerCamera>, Without<FlashlightBeam>)>,
    mut beam_query: Query<
        (&mut SpotLight, &mut Transform),
        (With<FlashlightBeam>, Without<PlayerCamera>),
    >,
    time: Res<Time>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    for (battery, flashlight, children) in player_query.iter() {
        for child in children.iter() {
            let Ok((mut spotlight, mut transform)) = beam_query.get_mut(child) else {
                continue;
            };

            spotlight.intensity = if battery.light_enabled() {
                flashlight.intensity * battery.charge_fraction()
            } else {
                0.0
            };

            let follow = (flashlight.follow_speed * time.delta_secs()).min(1.0);
            transform.rotation = transform.rotation.slerp(camera_transform.rotation, follow);
        }
    }
}
