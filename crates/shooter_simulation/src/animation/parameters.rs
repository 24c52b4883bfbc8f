//! Animation bridge: параметры blend space / aim offset, выведенные из кинематики
//!
//! Animation runtime живёт у host'а. Он читает `AnimationParameters` каждый кадр
//! и пишет обратно сэмплы curves "Turning" / "Rotation" в `TurnInPlaceCurves`.

use bevy::prelude::*;

use crate::components::CharacterKinematics;
use crate::config::AnimationTuning;
use crate::shared::{finterp_to, normalize_axis, normalized_delta_degrees};

/// Какой aim offset применять (приоритет: Reloading > InAir > Aiming > Hip)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum AimOffsetState {
    #[default]
    Hip,
    Aiming,
    Reloading,
    InAir,
}

impl AimOffsetState {
    pub fn select(reloading: bool, in_air: bool, aiming: bool) -> Self {
        if reloading {
            Self::Reloading
        } else if in_air {
            Self::InAir
        } else if aiming {
            Self::Aiming
        } else {
            Self::Hip
        }
    }
}

/// Сэмплы turn-in-place curves текущей анимации (пишет host)
///
/// `turning > 0` пока играет turn-in-place анимация,
/// `rotation` — накопленный поворот root bone в этой анимации (градусы).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct TurnInPlaceCurves {
    pub turning: f32,
    pub rotation: f32,
}

/// Флаги персонажа, которые нужны animation bridge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterFlags {
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
    pub equipping: bool,
}

/// Derived animation parameters
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AnimationParameters {
    /// Скорость по земле
    pub speed: f32,
    pub in_air: bool,
    pub accelerating: bool,
    /// Направление движения относительно прицела (strafe blend)
    pub movement_offset_yaw: f32,
    /// Последний offset при ненулевой скорости (для stop анимаций)
    pub last_movement_offset_yaw: f32,
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
    pub equipping: bool,
    /// Aim pitch (градусы)
    pub pitch: f32,
    pub offset_state: AimOffsetState,

    /// Разница между root bone и actor yaw, |offset| ≤ 180
    pub root_yaw_offset: f32,
    pub turning_in_place: bool,
    /// Вес recoil слоя
    pub recoil_weight: f32,
    /// Сглаженная скорость поворота (lean), |yaw_delta| ≤ lean_clamp
    pub yaw_delta: f32,

    tip_character_yaw: f32,
    tip_character_yaw_last_frame: f32,
    rotation_curve: f32,
    rotation_curve_last_frame: f32,
    character_yaw: f32,
    character_yaw_last_frame: f32,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            speed: 0.0,
            in_air: false,
            accelerating: false,
            movement_offset_yaw: 0.0,
            last_movement_offset_yaw: 0.0,
            aiming: false,
            reloading: false,
            crouching: false,
            equipping: false,
            pitch: 0.0,
            offset_state: AimOffsetState::Hip,
            root_yaw_offset: 0.0,
            turning_in_place: false,
            recoil_weight: 1.0,
            yaw_delta: 0.0,
            tip_character_yaw: 0.0,
            tip_character_yaw_last_frame: 0.0,
            rotation_curve: 0.0,
            rotation_curve_last_frame: 0.0,
            character_yaw: 0.0,
            character_yaw_last_frame: 0.0,
        }
    }
}

impl AnimationParameters {
    /// Полный шаг bridge за кадр
    pub fn update(
        &mut self,
        kinematics: &CharacterKinematics,
        flags: CharacterFlags,
        curves: &TurnInPlaceCurves,
        delta: f32,
        tuning: &AnimationTuning,
    ) {
        self.update_locomotion(kinematics, flags);
        self.turn_in_place(kinematics.actor_yaw, curves, tuning);
        self.update_recoil_weight(tuning);
        self.lean(kinematics.actor_yaw, delta, tuning);
    }

    /// Speed / in air / strafe offset / aim offset state
    pub fn update_locomotion(&mut self, kinematics: &CharacterKinematics, flags: CharacterFlags) {
        self.aiming = flags.aiming;
        self.reloading = flags.reloading;
        self.crouching = flags.crouching;
        self.equipping = flags.equipping;

        self.speed = kinematics.ground_speed();
        self.in_air = kinematics.in_air;
        self.accelerating = kinematics.is_accelerating();
        self.pitch = kinematics.aim_pitch;

        let moving = kinematics.velocity.length_squared() > 0.0;
        let movement_yaw = if moving { kinematics.movement_yaw() } else { 0.0 };
        self.movement_offset_yaw = normalized_delta_degrees(movement_yaw, kinematics.aim_yaw);
        if moving {
            self.last_movement_offset_yaw = self.movement_offset_yaw;
        }

        self.offset_state = AimOffsetState::select(self.reloading, self.in_air, self.aiming);
    }

    /// Turn in place: копим дрейф yaw стоя на месте, снимаем его turn анимацией
    pub fn turn_in_place(&mut self, actor_yaw: f32, curves: &TurnInPlaceCurves, tuning: &AnimationTuning) {
        if self.speed > 0.0 || self.in_air {
            // Движемся — root совпадает с актором
            self.root_yaw_offset = 0.0;
            self.tip_character_yaw = actor_yaw;
            self.tip_character_yaw_last_frame = actor_yaw;
            self.rotation_curve = 0.0;
            self.rotation_curve_last_frame = 0.0;
            self.turning_in_place = false;
            return;
        }

        self.tip_character_yaw_last_frame = self.tip_character_yaw;
        self.tip_character_yaw = actor_yaw;
        let tip_yaw_delta = self.tip_character_yaw - self.tip_character_yaw_last_frame;

        self.root_yaw_offset = normalize_axis(self.root_yaw_offset - tip_yaw_delta);

        if curves.turning <= 0.0 {
            self.turning_in_place = false;
            return;
        }

        self.turning_in_place = true;
        self.rotation_curve_last_frame = self.rotation_curve;
        self.rotation_curve = curves.rotation;
        let delta_rotation = self.rotation_curve - self.rotation_curve_last_frame;

        // offset > 0 — поворот влево, < 0 — вправо
        if self.root_yaw_offset > 0.0 {
            self.root_yaw_offset -= delta_rotation;
        } else {
            self.root_yaw_offset += delta_rotation;
        }

        let max = tuning.max_root_yaw_offset;
        if self.root_yaw_offset.abs() > max {
            self.root_yaw_offset = max * self.root_yaw_offset.signum();
        }
    }

    /// Recoil weight: 1 по умолчанию, 0 во время turn in place, 0.25 присев
    /// (reload всегда держит 1)
    pub fn update_recoil_weight(&mut self, tuning: &AnimationTuning) {
        self.recoil_weight = if self.reloading {
            1.0
        } else if self.turning_in_place {
            0.0
        } else if self.crouching {
            tuning.crouch_recoil_weight
        } else {
            1.0
        };
    }

    /// Lean: сглаженная угловая скорость актора
    pub fn lean(&mut self, actor_yaw: f32, delta: f32, tuning: &AnimationTuning) {
        self.character_yaw_last_frame = self.character_yaw;
        self.character_yaw = actor_yaw;

        if delta <= 0.0 {
            return;
        }

        let yaw_change = normalized_delta_degrees(self.character_yaw, self.character_yaw_last_frame);
        let target = yaw_change / delta;
        let interp = finterp_to(self.yaw_delta, target, delta, tuning.lean_interp_speed);
        self.yaw_delta = interp.clamp(-tuning.lean_clamp, tuning.lean_clamp);
    }
}
