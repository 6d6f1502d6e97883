//! Tests for the flashlight beam component and plugin wiring

use bevy::prelude::*;

use crate::FlashlightPlugin;
use crate::battery::{Battery, BatteryConfig};
use crate::components::flashlight::{Flashlight, FlashlightBeam};

#[test]
fn test_flashlight_default_state() {
    let flashlight = Flashlight::default();
    // Default trait uses 0.0 for all fields, new() uses the tuned values
    assert_eq!(flashlight.intensity, 0.0, "Default intensity is 0.0");
    assert_eq!(flashlight.range, 0.0, "Default range is 0.0");
}

#[test]
fn test_flashlight_new_state() {
    let flashlight = Flashlight::new();
    assert_eq!(flashlight.intensity, 1_000_000.0, "New intensity mismatch");
    assert_eq!(flashlight.range, 80.0, "New range mismatch");
    assert_eq!(flashlight.follow_speed, 5.0, "New follow speed mismatch");
}

#[test]
fn test_flashlight_beam_marker() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    app.world_mut().spawn((FlashlightBeam, Transform::default()));

    app.update();

    let mut query = app.world_mut().query::<&FlashlightBeam>();
    let beam_count = query.iter(app.world()).count();
    assert_eq!(beam_count, 1, "Should have one flashlight beam");
}

#[test]
fn test_battery_component_persists_across_updates() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(FlashlightPlugin);

    let entity = app
        .world_mut()
        .spawn((Battery::new(BatteryConfig::default()), Flashlight::new()))
        .id();

    app.update();

    {
        let mut battery = app.world_mut().get_mut::<Battery>(entity).unwrap();
        battery.toggle(true);
    }

    app.update();

    let battery = app.world().get::<Battery>(entity).unwrap();
    assert!(battery.is_on, "Commanded state should persist across updates");
    assert!(battery.light_enabled(), "Fresh battery commanded on should shine");
}

#[test]
fn test_drive_system_runs_on_fixed_schedule() {
    use std::time::Duration;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(FlashlightPlugin);

    let entity = app.world_mut().spawn(Battery::new(BatteryConfig::default())).id();
    app.update();

    {
        let mut battery = app.world_mut().get_mut::<Battery>(entity).unwrap();
        battery.toggle(true);
    }

    // Drive the fixed schedule directly with a known delta instead of waiting
    // on the wall clock.
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(2.0));
    app.world_mut().run_schedule(FixedUpdate);

    let battery = app.world().get::<Battery>(entity).unwrap();
    assert!(
        battery.charge < battery.max_charge,
        "Fixed-step drive should have drained the battery"
    );
    assert!((battery.charge - 8.0).abs() < 0.001, "Expected 2s of drain at rate 1");
}
