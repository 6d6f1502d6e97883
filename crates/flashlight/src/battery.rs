use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub struct BatteryPlugin;

impl Plugin for BatteryPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FlashlightToggledEvent>()
            .add_message::<BatteryDeadEvent>()
            .add_message::<BatteryRevivedEvent>()
            .add_message::<BatteryReloadedEvent>()
            .register_type::<Battery>()
            .register_type::<BatteryPhase>()
            .add_systems(FixedUpdate, drive_batteries);
    }
}

/// Construction-time battery tuning. Defaults match the reference flashlight:
/// a full battery lasts ten seconds under drain and trickle-charges at half
/// that speed.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryConfig {
    pub max_charge: f32,
    pub drain_rate: f32,
    pub recharge_rate: f32,
    /// Minimum charge fraction a recharging dead battery needs before it is
    /// usable again without a reload.
    pub reload_ready_fraction: f32,
    pub max_spares: u32,
    pub initial_spares: u32,
    pub recharge_enabled: bool,
    /// When false the battery never drains (infinite battery life).
    pub drain_enabled: bool,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            max_charge: 10.0,
            drain_rate: 1.0,
            recharge_rate: 0.5,
            reload_ready_fraction: 0.05,
            max_spares: 4,
            initial_spares: 4,
            recharge_enabled: true,
            drain_enabled: true,
        }
    }
}

/// Which timed process currently owns the battery. Exactly one phase is
/// active at any time; switching commanded state fully replaces the phase, so
/// a battery can never drain and recharge in the same step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum BatteryPhase {
    #[default]
    Idle,
    Draining,
    Recharging,
}

/// State transition surfaced by [`Battery::tick`] so the driving system can
/// emit the matching notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryTransition {
    /// Drain reached zero charge; the light is forced off.
    Died,
    /// Recharge crossed the ready threshold; the dead flag is cleared.
    Revived,
}

/// Reasons a reload command is rejected. Never fatal; the battery is left
/// untouched.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotReloadable {
    #[error("flashlight is off")]
    DeviceOff,
    #[error("no spare batteries left")]
    NoSpares,
    #[error("battery already fully charged")]
    AlreadyFull,
}

/// Component holding a flashlight battery's charge, spares and on/dead flags.
///
/// All mutation goes through [`toggle`](Battery::toggle),
/// [`reload`](Battery::reload) and [`tick`](Battery::tick); charge is clamped
/// to `[0, max_charge]` after every step.
#[derive(Component, Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Battery {
    pub charge: f32,
    pub max_charge: f32,
    pub drain_rate: f32,
    pub recharge_rate: f32,
    pub reload_ready_fraction: f32,
    pub spares: u32,
    pub max_spares: u32,
    /// Commanded state. The light itself is only enabled while the battery is
    /// not dead, see [`light_enabled`](Battery::light_enabled).
    pub is_on: bool,
    pub is_dead: bool,
    pub recharge_enabled: bool,
    pub drain_enabled: bool,
    phase: BatteryPhase,
}

impl Default for Battery {
    fn default() -> Self {
        Self::new(BatteryConfig::default())
    }
}

impl Battery {
    /// Build a battery at full charge with its full spare allowance, device
    /// commanded off.
    pub fn new(config: BatteryConfig) -> Self {
        Self {
            charge: config.max_charge,
            max_charge: config.max_charge,
            drain_rate: config.drain_rate,
            recharge_rate: config.recharge_rate,
            reload_ready_fraction: config.reload_ready_fraction.clamp(0.0, 1.0),
            spares: config.initial_spares.min(config.max_spares),
            max_spares: config.max_spares,
            is_on: false,
            is_dead: false,
            recharge_enabled: config.recharge_enabled,
            drain_enabled: config.drain_enabled,
            phase: BatteryPhase::Idle,
        }
    }

    pub fn phase(&self) -> BatteryPhase {
        self.phase
    }

    /// Charge as a fraction of capacity (0.0 to 1.0). Feeds the spotlight
    /// intensity and the HUD gauge.
    pub fn charge_fraction(&self) -> f32 {
        if self.max_charge <= 0.0 {
            0.0
        } else {
            (self.charge / self.max_charge).clamp(0.0, 1.0)
        }
    }

    /// Whether the light actually shines: commanded on and not dead.
    pub fn light_enabled(&self) -> bool {
        self.is_on && !self.is_dead
    }

    pub fn is_full(&self) -> bool {
        self.charge >= self.max_charge
    }

    /// Check if charge is critically low (below 25%)
    pub fn is_low(&self) -> bool {
        self.charge_fraction() < 0.25
    }

    /// Mirror of [`reload`](Battery::reload)'s precondition, for UI
    /// affordances.
    pub fn is_reloadable(&self) -> bool {
        self.is_on && self.spares > 0 && !self.is_full()
    }

    /// Set the commanded state and switch to the matching phase. Repeated
    /// calls with the same state are no-ops as far as the active phase is
    /// concerned.
    pub fn toggle(&mut self, on: bool) {
        self.is_on = on;
        self.recompute_phase();
    }

    /// Swap in a spare battery: full charge, dead flag cleared, one spare
    /// consumed. Rejected while the device is off, out of spares, or already
    /// full.
    pub fn reload(&mut self) -> Result<(), NotReloadable> {
        if !self.is_on {
            return Err(NotReloadable::DeviceOff);
        }
        if self.spares == 0 {
            return Err(NotReloadable::NoSpares);
        }
        if self.is_full() {
            return Err(NotReloadable::AlreadyFull);
        }

        self.charge = self.max_charge;
        self.is_dead = false;
        self.spares -= 1;
        self.recompute_phase();
        Ok(())
    }

    /// Advance the active phase by `delta` seconds. Negative deltas are
    /// clamped to zero; a zero delta is a no-op. Returns the transition that
    /// occurred during this step, if any.
    pub fn tick(&mut self, delta: f32) -> Option<BatteryTransition> {
        let delta = delta.max(0.0);
        if delta == 0.0 {
            return None;
        }

        match self.phase {
            BatteryPhase::Idle => None,
            BatteryPhase::Draining => {
                self.charge =
                    (self.charge - self.drain_rate * delta).clamp(0.0, self.max_charge);
                if self.charge <= 0.0 {
                    self.is_dead = true;
                    self.recompute_phase();
                    Some(BatteryTransition::Died)
                } else {
                    None
                }
            }
            BatteryPhase::Recharging => {
                self.charge =
                    (self.charge + self.recharge_rate * delta).clamp(0.0, self.max_charge);
                let revived =
                    self.is_dead && self.charge_fraction() >= self.reload_ready_fraction;
                if revived {
                    self.is_dead = false;
                }
                self.recompute_phase();
                revived.then_some(BatteryTransition::Revived)
            }
        }
    }

    /// Pick the phase implied by the current flags. Draining wins while the
    /// device is on with a live battery; otherwise a partially charged
    /// battery recharges (when enabled) regardless of commanded state.
    fn recompute_phase(&mut self) {
        self.phase = if self.is_on && !self.is_dead && self.drain_enabled {
            BatteryPhase::Draining
        } else if self.recharge_enabled && !self.is_full() {
            BatteryPhase::Recharging
        } else {
            BatteryPhase::Idle
        };
    }
}

/// Notification that the flashlight was commanded on or off.
#[derive(Message, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FlashlightToggledEvent {
    pub entity: Entity,
    pub on: bool,
}

/// Notification that a battery drained flat.
#[derive(Message, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BatteryDeadEvent {
    pub entity: Entity,
}

/// Notification that a recharging dead battery crossed the ready threshold.
#[derive(Message, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BatteryRevivedEvent {
    pub entity: Entity,
}

/// Notification that a spare battery was swapped in.
#[derive(Message, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BatteryReloadedEvent {
    pub entity: Entity,
    pub spares_left: u32,
}

/// System advancing every battery by the fixed timestep, exactly once per
/// simulation step.
fn drive_batteries(
    time: Res<Time>,
    mut batteries: Query<(Entity, &mut Battery)>,
    mut dead_events: MessageWriter<BatteryDeadEvent>,
    mut revived_events: MessageWriter<BatteryRevivedEvent>,
) {
    let delta = time.delta_secs();

    for (entity, mut battery) in batteries.iter_mut() {
        match battery.tick(delta) {
            Some(BatteryTransition::Died) => {
                info!(
                    "Battery on {:?} drained flat ({} spare(s) left)",
                    entity, battery.spares
                );
                dead_events.write(BatteryDeadEvent { entity });
            }
            Some(BatteryTransition::Revived) => {
                info!("Battery on {:?} recharged enough to use again", entity);
                revived_events.write(BatteryRevivedEvent { entity });
            }
            None => {}
        }
    }
}
