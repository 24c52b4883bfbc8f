//! Movement components — crouch, walk speed, capsule

use bevy::prelude::*;

use crate::config::MovementTuning;
use crate::shared::finterp_to;

/// Параметры movement component персонажа (host применяет к character controller)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CharacterMovement {
    pub crouching: bool,
    pub max_walk_speed: f32,
    pub ground_friction: f32,
    /// Текущая half height капсулы (плавно идёт к target)
    pub capsule_half_height: f32,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            crouching: false,
            max_walk_speed: tuning.base_movement_speed,
            ground_friction: tuning.base_ground_friction,
            capsule_half_height: tuning.standing_capsule_half_height,
        }
    }
}

impl CharacterMovement {
    /// Сесть / встать: скорость и трение переключаются сразу, капсула — плавно
    pub fn set_crouching(&mut self, crouching: bool, tuning: &MovementTuning) {
        self.crouching = crouching;
        if crouching {
            self.max_walk_speed = tuning.crouch_movement_speed;
            self.ground_friction = tuning.crouching_ground_friction;
        } else {
            self.max_walk_speed = tuning.base_movement_speed;
            self.ground_friction = tuning.base_ground_friction;
        }
    }

    pub fn target_capsule_half_height(&self, tuning: &MovementTuning) -> f32 {
        if self.crouching {
            tuning.crouching_capsule_half_height
        } else {
            tuning.standing_capsule_half_height
        }
    }

    /// Кадр интерполяции капсулы; returns смещение half height за кадр
    /// (host сдвигает mesh на эту величину, чтобы ноги остались на земле)
    pub fn interp_capsule(&mut self, delta: f32, tuning: &MovementTuning) -> f32 {
        let target = self.target_capsule_half_height(tuning);
        let interped = finterp_to(self.capsule_half_height, target, delta, tuning.capsule_interp_speed);
        let change = interped - self.capsule_half_height;
        self.capsule_half_height = interped;
        change
    }
}
