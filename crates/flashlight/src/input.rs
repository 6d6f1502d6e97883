use bevy::prelude::*;
use leafwing_input_manager::Actionlike;
use leafwing_input_manager::prelude::ActionState;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize, Actionlike, Default,
)]
pub enum PlayerAction {
    #[default]
    #[actionlike(DualAxis)]
    Look,

    #[actionlike(Button)]
    ToggleFlashlight,

    #[actionlike(Button)]
    Reload,
}

pub const EYE_HEIGHT: f32 = 1.6;
pub const MOUSE_SENSITIVITY: f32 = 0.002;
pub const PITCH_LIMIT_RADIANS: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const LOOK_DEADZONE_SQUARED: f32 = 0.000001; // 0.001^2

pub fn get_mouse_look_delta(action_state: &ActionState<PlayerAction>) -> Vec2 {
    let look_input = action_state.axis_pair(&PlayerAction::Look);
    if look_input.length_squared() < LOOK_DEADZONE_SQUARED {
        Vec2::ZERO
    } else {
        look_input
    }
}

pub fn apply_look_delta(current_rotation: Quat, mouse_delta: Vec2) -> Quat {
    let (mut yaw, mut pitch, _) = current_rotation.to_euler(EulerRot::YXZ);

    yaw += -mouse_delta.x * MOUSE_SENSITIVITY;
    pitch = (pitch + (-mouse_delta.y * MOUSE_SENSITIVITY))
        .clamp(-PITCH_LIMIT_RADIANS, PITCH_LIMIT_RADIANS);

    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

#[cfg(test)]
mod tests {
    use super::{PITCH_LIMIT_RADIANS, PlayerAction, apply_look_delta, get_mouse_look_delta};
    use bevy::prelude::{Quat, Vec2};
    use leafwing_input_manager::prelude::ActionState;

    #[test]
    fn look_delta_applies_deadzone() {
        let mut action_state = ActionState::<PlayerAction>::default();
        action_state.set_axis_pair(&PlayerAction::Look, Vec2::new(0.0005, 0.0005));
        assert_eq!(
            get_mouse_look_delta(&action_state),
            Vec2::ZERO,
            "Sub-deadzone input should be ignored"
        );

        action_state.set_axis_pair(&PlayerAction::Look, Vec2::new(4.0, -2.0));
        assert_eq!(get_mouse_look_delta(&action_state), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn look_delta_clamps_pitch() {
        let mut rotation = Quat::IDENTITY;
        // Drag the mouse down hard many times; pitch must stay clamped.
        for _ in 0..100 {
            rotation = apply_look_delta(rotation, Vec2::new(0.0, 10_000.0));
        }
        let (_, pitch, _) = rotation.to_euler(bevy::prelude::EulerRot::YXZ);
        assert!(
            pitch >= -PITCH_LIMIT_RADIANS - 0.0001,
            "Pitch {pitch} exceeded the clamp"
        );
    }
}
