use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use leafwing_input_manager::plugin::InputManagerPlugin;
use leafwing_input_manager::prelude::{ActionState, InputMap, MouseMove};

use flashlight::battery::{Battery, BatteryReloadedEvent, FlashlightToggledEvent};
use flashlight::input::PlayerAction;

use crate::player::Player;

pub struct GameInputPlugin;

impl Plugin for GameInputPlugin {
    fn build(&self, app: &mut App) {
        let is_headless = app
            .world()
            .get_resource::<crate::Headless>()
            .map(|headless| headless.0)
            .unwrap_or(false);

        if !is_headless {
            app.add_plugins(InputManagerPlugin::<PlayerAction>::default());
            app.add_systems(Update, toggle_cursor_grab);
        }

        app.add_systems(Update, handle_flashlight_input);
    }
}

pub fn get_player_input_map() -> InputMap<PlayerAction> {
    InputMap::<PlayerAction>::default()
        .with(PlayerAction::ToggleFlashlight, KeyCode::KeyF)
        .with(PlayerAction::Reload, KeyCode::KeyR)
        .with_dual_axis(PlayerAction::Look, MouseMove::default())
}

/// Turn key-down edges into battery commands and the matching notifications.
/// A rejected reload is not an error, just a refused command.
fn handle_flashlight_input(
    mut player_query: Query<(Entity, &mut Battery, &ActionState<PlayerAction>), With<Player>>,
    mut toggled_events: MessageWriter<FlashlightToggledEvent>,
    mut reloaded_events: MessageWriter<BatteryReloadedEvent>,
) {
    for (entity, mut battery, action_state) in player_query.iter_mut() {
        if action_state.just_pressed(&PlayerAction::ToggleFlashlight) {
            let on = !battery.is_on;
            battery.toggle(on);
            info!("Flashlight toggled: {}", if on { "ON" } else { "OFF" });
            toggled_events.write(FlashlightToggledEvent { entity, on });
        }

        if action_state.just_pressed(&PlayerAction::Reload) {
            match battery.reload() {
                Ok(()) => {
                    info!("New battery inserted ({} spare(s) left)", battery.spares);
                    reloaded_events.write(BatteryReloadedEvent {
                        entity,
                        spares_left: battery.spares,
                    });
                }
                Err(reason) => debug!("Reload rejected: {reason}"),
            }
        }
    }
}

/// Escape releases the cursor, clicking grabs it back.
fn toggle_cursor_grab(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut action_query: Query<&mut ActionState<PlayerAction>, With<Player>>,
    mut cursor_options_query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor_options) = cursor_options_query.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::Escape) && cursor_options.grab_mode == CursorGrabMode::Locked {
        cursor_options.grab_mode = CursorGrabMode::None;
        cursor_options.visible = true;
        if let Ok(mut action_state) = action_query.single_mut() {
            action_state.set_axis_pair(&PlayerAction::Look, Vec2::ZERO);
            action_state.disable();
        }
    }

    if cursor_options.grab_mode == CursorGrabMode::None && mouse.just_pressed(MouseButton::Left) {
        cursor_options.grab_mode = CursorGrabMode::Locked;
        cursor_options.visible = false;
        if let Ok(mut action_state) = action_query.single_mut() {
            // Preserve camera look state to avoid a jump on re-grab
            action_state.set_axis_pair(&PlayerAction::Look, Vec2::ZERO);
            action_state.enable();
        }
    }
}
