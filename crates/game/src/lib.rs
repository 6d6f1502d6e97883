pub mod app;
pub mod audio;
pub mod camera;
pub mod debug;
pub mod hud;
pub mod input;
pub mod level;
pub mod player;
pub mod vfx;

#[cfg(test)]
mod tests;

use bevy::prelude::Resource;

#[derive(Resource)]
pub struct Headless(pub bool);
