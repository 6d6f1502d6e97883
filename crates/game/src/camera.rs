use bevy::prelude::*;

use leafwing_input_manager::prelude::ActionState;

use flashlight::input::{EYE_HEIGHT, PlayerAction, apply_look_delta, get_mouse_look_delta};

use crate::player::Player;

/// Marker component for the first-person camera
#[derive(Component, Default)]
pub struct PlayerCamera;

pub struct PlayerCameraPlugin;

impl Plugin for PlayerCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_camera);
        app.add_systems(Update, update_camera_from_look_input);
    }
}

fn spawn_player_camera(mut commands: Commands) {
    commands.spawn((
        PlayerCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
        Name::new("PlayerCamera"),
    ));
}

fn update_camera_from_look_input(
    player_query: Query<&ActionState<PlayerAction>, With<Player>>,
    mut camera_query: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Ok(action_state) = player_query.single() else {
        return;
    };
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    if action_state.disabled() {
        return;
    }

    let mouse_delta = get_mouse_look_delta(action_state);
    if mouse_delta != Vec2::ZERO {
        transform.rotation = apply_look_delta(transform.rotation, mouse_delta);
    }
}
