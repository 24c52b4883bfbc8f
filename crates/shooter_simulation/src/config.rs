//! Tuning resource — все gameplay константы в одном месте
//!
//! `Default` = значения оригинальной настройки (на них откалиброван "feel").
//! Можно перегрузить из RON: `ShooterTuning::from_ron_str(..)`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::item_system::{check_duration, CatalogError};

/// Корневой tuning resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShooterTuning {
    pub item: ItemTuning,
    pub crosshair: CrosshairTuning,
    pub combat: CombatTuning,
    pub camera: CameraTuning,
    pub movement: MovementTuning,
    pub animation: AnimationTuning,
}

impl ShooterTuning {
    /// Загрузить tuning из RON (отсутствующие поля → default)
    pub fn from_ron_str(source: &str) -> Result<Self, CatalogError> {
        let tuning: Self = ron::from_str(source)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Все поля, которые превращаются в `Timer`
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_duration("item.z_curve_time", self.item.z_curve_time)?;
        check_duration("item.pulse_curve_time", self.item.pulse_curve_time)?;
        check_duration("item.pickup_sound_reset_time", self.item.pickup_sound_reset_time)?;
        check_duration("item.equip_sound_reset_time", self.item.equip_sound_reset_time)?;
        check_duration("item.throw_weapon_time", self.item.throw_weapon_time)?;
        check_duration("crosshair.shoot_time_duration", self.crosshair.shoot_time_duration)?;
        check_duration("combat.montage_fallback_time", self.combat.montage_fallback_time)?;
        Ok(())
    }
}

/// Pickup / interp / pulse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTuning {
    /// Длительность полёта item'а к anchor (ZCurveTime)
    pub z_curve_time: f32,
    /// Rate экспоненциальной интерполяции X/Z
    pub interp_speed: f32,
    /// Период pulse кривой в Pickup state
    pub pulse_curve_time: f32,
    pub glow_amount: f32,
    pub fresnel_exponent: f32,
    pub fresnel_reflect_fraction: f32,
    /// Задержка перед повторным pickup звуком
    pub pickup_sound_reset_time: f32,
    /// Задержка перед повторным equip звуком
    pub equip_sound_reset_time: f32,
    /// Сколько оружие "падает" после броска до возврата в Pickup
    pub throw_weapon_time: f32,
    /// Модуль импульса броска
    pub throw_impulse: f32,
    /// Наклон направления броска вокруг forward оси (градусы)
    pub throw_tilt_degrees: f32,
    /// Диапазон случайного поворота броска вокруг вертикали (градусы)
    pub throw_yaw_range: (f32, f32),
}

impl Default for ItemTuning {
    fn default() -> Self {
        Self {
            z_curve_time: 0.7,
            interp_speed: 30.0,
            pulse_curve_time: 5.0,
            glow_amount: 150.0,
            fresnel_exponent: 3.0,
            fresnel_reflect_fraction: 4.0,
            pickup_sound_reset_time: 0.2,
            equip_sound_reset_time: 0.2,
            throw_weapon_time: 0.7,
            throw_impulse: 20_000.0,
            throw_tilt_degrees: -20.0,
            throw_yaw_range: (10.0, 30.0),
        }
    }
}

/// Crosshair spread: целевые значения + rates каждого фактора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairTuning {
    pub base_spread: f32,
    /// Скорость по земле → [0, 1]
    pub walk_speed_range: (f32, f32),
    pub in_air_target: f32,
    pub in_air_rise_speed: f32,
    pub in_air_fall_speed: f32,
    pub aim_target: f32,
    pub aim_speed: f32,
    pub shooting_target: f32,
    pub shooting_speed: f32,
    /// Окно "пуля только что вылетела"
    pub shoot_time_duration: f32,
    /// Длина trace из центра экрана
    pub trace_distance: f32,
}

impl Default for CrosshairTuning {
    fn default() -> Self {
        Self {
            base_spread: 0.5,
            walk_speed_range: (0.0, 600.0),
            in_air_target: 1.0,
            in_air_rise_speed: 30.0,
            in_air_fall_speed: 2.25,
            aim_target: 0.6,
            aim_speed: 30.0,
            shooting_target: 0.3,
            shooting_speed: 60.0,
            shoot_time_duration: 0.05,
            trace_distance: 50_000.0,
        }
    }
}

/// Combat state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub starting_9mm_ammo: u32,
    pub starting_ar_ammo: u32,
    /// Fallback, если montage notify так и не пришёл (Reloading / Equipping)
    pub montage_fallback_time: f32,
    /// Socket правой руки для equipped оружия
    pub hand_socket: String,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            starting_9mm_ammo: 85,
            starting_ar_ammo: 120,
            montage_fallback_time: 3.0,
            hand_socket: "RightHandSocket".to_string(),
        }
    }
}

/// Camera zoom и look rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub default_fov: f32,
    pub zoomed_fov: f32,
    pub zoom_interp_speed: f32,
    pub hip_turn_rate: f32,
    pub hip_look_up_rate: f32,
    pub aiming_turn_rate: f32,
    pub aiming_look_up_rate: f32,
    pub mouse_hip_turn_rate: f32,
    pub mouse_hip_look_up_rate: f32,
    pub mouse_aiming_turn_rate: f32,
    pub mouse_aiming_look_up_rate: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            default_fov: 90.0,
            zoomed_fov: 25.0,
            zoom_interp_speed: 20.0,
            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aiming_turn_rate: 20.0,
            aiming_look_up_rate: 20.0,
            mouse_hip_turn_rate: 1.0,
            mouse_hip_look_up_rate: 1.0,
            mouse_aiming_turn_rate: 0.6,
            mouse_aiming_look_up_rate: 0.6,
        }
    }
}

/// Crouch / walk speed / capsule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub base_movement_speed: f32,
    pub crouch_movement_speed: f32,
    pub standing_capsule_half_height: f32,
    pub crouching_capsule_half_height: f32,
    pub capsule_interp_speed: f32,
    pub base_ground_friction: f32,
    pub crouching_ground_friction: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            base_movement_speed: 650.0,
            crouch_movement_speed: 300.0,
            standing_capsule_half_height: 88.0,
            crouching_capsule_half_height: 44.0,
            capsule_interp_speed: 20.0,
            base_ground_friction: 2.0,
            crouching_ground_friction: 8.0,
        }
    }
}

/// Animation bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// Порог |root_yaw_offset| после которого включается коррекция
    pub max_root_yaw_offset: f32,
    pub lean_interp_speed: f32,
    pub lean_clamp: f32,
    pub crouch_recoil_weight: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            max_root_yaw_offset: 90.0,
            lean_interp_speed: 6.0,
            lean_clamp: 90.0,
            crouch_recoil_weight: 0.25,
        }
    }
}
