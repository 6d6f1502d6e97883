use bevy::prelude::*;

use flashlight::battery::{BatteryReloadedEvent, FlashlightToggledEvent};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_audio);
        app.add_systems(Update, play_battery_cues);
    }
}

#[derive(Resource)]
pub struct GameAudio {
    pub toggle_on: Handle<AudioSource>,
    pub toggle_off: Handle<AudioSource>,
    pub new_battery: Handle<AudioSource>,
}

fn setup_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAudio {
        toggle_on: asset_server.load("audio/flashlight_on.wav"),
        toggle_off: asset_server.load("audio/flashlight_off.wav"),
        new_battery: asset_server.load("audio/new_battery.wav"),
    });
}

/// One-shot cues: a click per toggle edge, a clack per battery swap.
fn play_battery_cues(
    mut commands: Commands,
    audio: Option<Res<GameAudio>>,
    mut toggled_events: MessageReader<FlashlightToggledEvent>,
    mut reloaded_events: MessageReader<BatteryReloadedEvent>,
) {
    let Some(audio) = audio else {
        return;
    };

    for toggled in toggled_events.read() {
        let clip = if toggled.on {
            audio.toggle_on.clone()
        } else {
            audio.toggle_off.clone()
        };
        commands.spawn(AudioPlayer::new(clip));
    }

    for _ in reloaded_events.read() {
        commands.spawn(AudioPlayer::new(audio.new_battery.clone()));
    }
}
