pub mod battery;
pub mod components;
pub mod input;

#[cfg(test)]
mod tests;

use bevy::prelude::Plugin;

pub const FIXED_TIMESTEP_HZ: f64 = 60.0;

pub struct FlashlightPlugin;
impl Plugin for FlashlightPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        app.add_plugins(battery::BatteryPlugin);
        app.register_type::<components::flashlight::Flashlight>();
    }
}
