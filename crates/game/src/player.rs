use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use flashlight::battery::{Battery, BatteryConfig};
use flashlight::components::flashlight::Flashlight;
use flashlight::input::PlayerAction;

use crate::input::get_player_input_map;

/// Marker component for the flashlight-carrying player
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player);
    }
}

fn spawn_player(mut commands: Commands, config: Option<Res<BatteryConfig>>) {
    let config = config.map(|c| *c).unwrap_or_default();

    let mut battery = Battery::new(config);
    // The flashlight powers up in hand.
    battery.toggle(true);

    let input_map = get_player_input_map();
    let mut action_state = ActionState::<PlayerAction>::default();
    action_state.enable();

    commands.spawn((
        Player,
        Name::new("Player"),
        battery,
        Flashlight::new(),
        input_map,
        action_state,
        Transform::default(),
        Visibility::default(),
    ));

    info!("Spawned player with flashlight");
}
