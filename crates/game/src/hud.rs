use bevy::color::palettes::tailwind::{SLATE_400, SLATE_800};
use bevy::prelude::*;

use flashlight::battery::Battery;

use crate::player::Player;

const GAUGE_WIDTH_PX: f32 = 220.0;
const GAUGE_HEIGHT_PX: f32 = 18.0;

/// Root node of the flashlight HUD, shown only while the device is on
#[derive(Component, Default)]
pub struct HudRoot;

/// Fill bar of the charge gauge
#[derive(Component, Default)]
pub struct ChargeGaugeFill;

/// "Batteries: N / M" counter
#[derive(Component, Default)]
pub struct BatteryCountText;

/// "RELOAD (R)" prompt, shown while the battery is dead
#[derive(Component, Default)]
pub struct ReloadPrompt;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(
            Update,
            (
                update_hud_visibility,
                update_charge_gauge,
                update_battery_count,
                update_reload_prompt,
            ),
        );
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Name::new("FlashlightHud"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(24.0),
                bottom: Val::Px(24.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("ChargeGauge"),
                    Node {
                        width: Val::Px(GAUGE_WIDTH_PX),
                        height: Val::Px(GAUGE_HEIGHT_PX),
                        padding: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(SLATE_800.into()),
                ))
                .with_children(|gauge| {
                    gauge.spawn((
                        ChargeGaugeFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.0, 1.0, 0.0)),
                    ));
                });

            parent.spawn((
                BatteryCountText,
                Text::new("Batteries: - / -"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(SLATE_400.into()),
            ));

            parent.spawn((
                ReloadPrompt,
                Text::new("RELOAD (R)"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.2, 0.2)),
                Visibility::Hidden,
            ));
        });
}

/// The whole HUD only shows while the flashlight is in the player's hand and
/// commanded on.
fn update_hud_visibility(
    player_query: Query<&Battery, (With<Player>, Changed<Battery>)>,
    mut hud_query: Query<&mut Visibility, With<HudRoot>>,
) {
    let Ok(battery) = player_query.single() else {
        return;
    };
    for mut visibility in hud_query.iter_mut() {
        *visibility = if battery.is_on {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Fill width tracks the charge, color fades red as it empties.
fn update_charge_gauge(
    player_query: Query<&Battery, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<ChargeGaugeFill>>,
) {
    let Ok(battery) = player_query.single() else {
        return;
    };

    let fraction = battery.charge_fraction();
    for (mut node, mut color) in fill_query.iter_mut() {
        node.width = Val::Percent(fraction * 100.0);
        color.0 = Color::srgb(1.0 - fraction, fraction, 0.0);
    }
}

fn update_battery_count(
    player_query: Query<&Battery, (With<Player>, Changed<Battery>)>,
    mut text_query: Query<&mut Text, With<BatteryCountText>>,
) {
    let Ok(battery) = player_query.single() else {
        return;
    };
    for mut text in text_query.iter_mut() {
        text.0 = format!("Batteries: {} / {}", battery.spares, battery.max_spares);
    }
}

fn update_reload_prompt(
    player_query: Query<&Battery, (With<Player>, Changed<Battery>)>,
    mut prompt_query: Query<&mut Visibility, With<ReloadPrompt>>,
) {
    let Ok(battery) = player_query.single() else {
        return;
    };
    for mut visibility in prompt_query.iter_mut() {
        *visibility = if battery.is_dead {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
