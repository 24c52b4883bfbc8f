//! Shooting components — crosshair spread и aiming
//!
//! Flow:
//! 1. Player жмёт aim button → `AimIntent` → `AimState` + walk speed
//! 2. Каждый кадр crosshair factors плавно идут к своим target'ам
//! 3. HUD читает `CrosshairSpread::multiplier()` и `ActiveCrosshair`

use bevy::prelude::*;
use std::time::Duration;

use crate::combat::CrosshairIcons;
use crate::config::{CameraTuning, CrosshairTuning, MovementTuning};
use crate::movement::CharacterMovement;
use crate::shared::{finterp_to, map_range_clamped};

/// Crosshair spread: 0.5 + velocity + in_air + aim + shooting
///
/// Каждый фактор сглаживается независимо со своей скоростью.
/// Инвариант: каждый фактор в [0, 1], multiplier ≥ 0.5.
#[derive(Component, Debug, Clone, Default)]
pub struct CrosshairSpread {
    velocity_factor: f32,
    in_air_factor: f32,
    aim_factor: f32,
    shooting_factor: f32,
    /// Окно "пуля только что вылетела"
    bullet_window: Option<Timer>,
}

impl CrosshairSpread {
    pub fn velocity_factor(&self) -> f32 {
        self.velocity_factor
    }

    pub fn in_air_factor(&self) -> f32 {
        self.in_air_factor
    }

    pub fn aim_factor(&self) -> f32 {
        self.aim_factor
    }

    pub fn shooting_factor(&self) -> f32 {
        self.shooting_factor
    }

    /// Итоговый множитель разброса прицела
    pub fn multiplier(&self, base_spread: f32) -> f32 {
        base_spread + self.velocity_factor + self.in_air_factor + self.aim_factor + self.shooting_factor
    }

    /// Выстрел: открыть (или продлить) окно shooting factor
    pub fn start_bullet_fire(&mut self, window: f32) {
        self.bullet_window = Some(Timer::from_seconds(window, TimerMode::Once));
    }

    pub fn is_firing_bullet(&self) -> bool {
        self.bullet_window.is_some()
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(timer) = self.bullet_window.as_mut() {
            timer.tick(delta);
            if timer.finished() {
                self.bullet_window = None;
            }
        }
    }

    /// Кадр сглаживания факторов
    pub fn update(&mut self, ground_speed: f32, in_air: bool, aiming: bool, delta: f32, tuning: &CrosshairTuning) {
        self.velocity_factor = map_range_clamped(tuning.walk_speed_range, (0.0, 1.0), ground_speed);

        // В воздухе расходится быстро, на земле собирается медленнее
        self.in_air_factor = if in_air {
            finterp_to(self.in_air_factor, tuning.in_air_target, delta, tuning.in_air_rise_speed)
        } else {
            finterp_to(self.in_air_factor, 0.0, delta, tuning.in_air_fall_speed)
        };

        let aim_target = if aiming { tuning.aim_target } else { 0.0 };
        self.aim_factor = finterp_to(self.aim_factor, aim_target, delta, tuning.aim_speed);

        let shooting_target = if self.is_firing_bullet() {
            tuning.shooting_target
        } else {
            0.0
        };
        self.shooting_factor = finterp_to(self.shooting_factor, shooting_target, delta, tuning.shooting_speed);

        self.velocity_factor = self.velocity_factor.clamp(0.0, 1.0);
        self.in_air_factor = self.in_air_factor.clamp(0.0, 1.0);
        self.aim_factor = self.aim_factor.clamp(0.0, 1.0);
        self.shooting_factor = self.shooting_factor.clamp(0.0, 1.0);
    }
}

/// Aiming state + look rates
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct AimState {
    aiming: bool,
    /// Gamepad rates (градусы/сек)
    pub turn_rate: f32,
    pub look_up_rate: f32,
    /// Mouse scale factors
    pub mouse_turn_rate: f32,
    pub mouse_look_up_rate: f32,
}

impl Default for AimState {
    fn default() -> Self {
        let camera = CameraTuning::default();
        let mut state = Self {
            aiming: false,
            turn_rate: 0.0,
            look_up_rate: 0.0,
            mouse_turn_rate: 0.0,
            mouse_look_up_rate: 0.0,
        };
        state.update_look_rates(&camera);
        state
    }
}

impl AimState {
    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    /// Начать прицеливание: ходьба замедляется до crouch speed
    pub fn aim(&mut self, movement: &mut CharacterMovement, tuning: &MovementTuning) {
        self.aiming = true;
        movement.max_walk_speed = tuning.crouch_movement_speed;
    }

    /// Закончить прицеливание (скорость возвращается, если не присели)
    pub fn stop_aiming(&mut self, movement: &mut CharacterMovement, tuning: &MovementTuning) {
        self.aiming = false;
        if !movement.crouching {
            movement.max_walk_speed = tuning.base_movement_speed;
        }
    }

    /// Hip / aiming look rates
    pub fn update_look_rates(&mut self, tuning: &CameraTuning) {
        if self.aiming {
            self.turn_rate = tuning.aiming_turn_rate;
            self.look_up_rate = tuning.aiming_look_up_rate;
            self.mouse_turn_rate = tuning.mouse_aiming_turn_rate;
            self.mouse_look_up_rate = tuning.mouse_aiming_look_up_rate;
        } else {
            self.turn_rate = tuning.hip_turn_rate;
            self.look_up_rate = tuning.hip_look_up_rate;
            self.mouse_turn_rate = tuning.mouse_hip_turn_rate;
            self.mouse_look_up_rate = tuning.mouse_hip_look_up_rate;
        }
    }
}

/// Иконки прицела текущего оружия (HUD)
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCrosshair {
    pub icons: CrosshairIcons,
}

/// Event: aim button pressed / released
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimIntent {
    pub character: Entity,
    pub pressed: bool,
}
