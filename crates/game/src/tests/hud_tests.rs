//! HUD state tests against a headless app

use bevy::prelude::*;

use flashlight::battery::{Battery, BatteryConfig};

use crate::app::create_app;
use crate::hud::{BatteryCountText, ChargeGaugeFill, HudRoot, ReloadPrompt};
use crate::player::Player;

fn headless_app() -> App {
    create_app(true, BatteryConfig::default())
}

#[test]
fn hud_is_visible_while_flashlight_is_on() {
    let mut app = headless_app();
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&Visibility, With<HudRoot>>();
    let visibility = query.single(app.world()).expect("HUD root should exist");
    assert_eq!(*visibility, Visibility::Visible);
}

#[test]
fn hud_hides_when_flashlight_is_commanded_off() {
    let mut app = headless_app();
    app.update();

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Battery, With<Player>>();
        query.single_mut(app.world_mut()).unwrap().toggle(false);
    }
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&Visibility, With<HudRoot>>();
    assert_eq!(*query.single(app.world()).unwrap(), Visibility::Hidden);
}

#[test]
fn battery_counter_shows_spares_over_max() {
    let mut app = headless_app();
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&Text, With<BatteryCountText>>();
    let text = query.single(app.world()).unwrap();
    assert_eq!(text.0, "Batteries: 4 / 4");
}

#[test]
fn charge_gauge_tracks_the_fraction() {
    let mut app = headless_app();
    app.update();

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Battery, With<Player>>();
        let mut battery = query.single_mut(app.world_mut()).unwrap();
        battery.tick(5.0); // half the charge at the default rates
    }
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&Node, With<ChargeGaugeFill>>();
    let node = query.single(app.world()).unwrap();
    assert_eq!(node.width, Val::Percent(50.0));
}

#[test]
fn reload_prompt_appears_only_while_dead() {
    let mut app = headless_app();
    app.update();

    let prompt_visibility = |app: &mut App| {
        let mut query = app
            .world_mut()
            .query_filtered::<&Visibility, With<ReloadPrompt>>();
        *query.single(app.world()).unwrap()
    };
    assert_eq!(prompt_visibility(&mut app), Visibility::Hidden);

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Battery, With<Player>>();
        let mut battery = query.single_mut(app.world_mut()).unwrap();
        let drain_time = battery.max_charge / battery.drain_rate;
        battery.tick(drain_time);
        assert!(battery.is_dead);
    }
    app.update();
    assert_eq!(prompt_visibility(&mut app), Visibility::Visible);

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Battery, With<Player>>();
        query.single_mut(app.world_mut()).unwrap().reload().unwrap();
    }
    app.update();
    assert_eq!(prompt_visibility(&mut app), Visibility::Hidden);
}
