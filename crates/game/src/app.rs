use bevy::prelude::*;
use bevy::window::PresentMode;

use flashlight::battery::BatteryConfig;
use flashlight::{FIXED_TIMESTEP_HZ, FlashlightPlugin};

use crate::audio::GameAudioPlugin;
use crate::camera::PlayerCameraPlugin;
use crate::debug::DebugPlugin;
use crate::hud::HudPlugin;
use crate::input::GameInputPlugin;
use crate::level::LevelPlugin;
use crate::player::PlayerPlugin;
use crate::vfx::BeamVfxPlugin;

/// Assemble the app. Headless runs carry only the simulation-side plugins so
/// integration tests can step the world without a window or GPU.
pub fn create_app(headless: bool, config: BatteryConfig) -> App {
    let mut app = App::new();

    app.insert_resource(crate::Headless(headless));
    app.insert_resource(config);
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ));

    if headless {
        app.add_plugins(MinimalPlugins);
    } else {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "blackout".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }));
    }

    app.add_plugins(FlashlightPlugin);
    app.add_plugins((
        PlayerPlugin,
        GameInputPlugin,
        PlayerCameraPlugin,
        BeamVfxPlugin,
        HudPlugin,
    ));

    if !headless {
        app.add_plugins((LevelPlugin, GameAudioPlugin, DebugPlugin));
    }

    app
}
