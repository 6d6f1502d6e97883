use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Component describing the flashlight beam carried by the player. On/off and
/// charge state live in [`crate::battery::Battery`]; this only holds the
/// presentation parameters.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Flashlight {
    /// Spotlight intensity at full charge
    pub intensity: f32,
    /// Range of the flashlight beam
    pub range: f32,
    /// Inner angle of the spotlight cone (in radians)
    pub inner_angle: f32,
    /// Outer angle of the spotlight cone (in radians)
    pub outer_angle: f32,
    /// How fast the beam slerps toward the camera aim, per second
    pub follow_speed: f32,
}

impl Flashlight {
    pub fn new() -> Self {
        Self {
            intensity: 1_000_000.0,
            range: 80.0,
            inner_angle: 0.12,
            outer_angle: 0.35,
            follow_speed: 5.0,
        }
    }
}

/// Marker component for the flashlight's SpotLight entity
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct FlashlightBeam;
