//! Shooter character: marker + kinematic state + follow camera
//!
//! Kinematics и камеру пишет host (движок / тесты) каждый кадр,
//! ECS только читает их для crosshair, interp и animation bridge.

use bevy::prelude::*;

use super::equipment::{Inventory, InterpAnchors, ItemTraceState, SoundCooldowns};
use crate::animation::{AnimationParameters, TurnInPlaceCurves};
use crate::combat::{AmmoReserve, CombatController};
use crate::config::ShooterTuning;
use crate::movement::CharacterMovement;
use crate::shooting::{ActiveCrosshair, AimState, CrosshairSpread};

/// Shooter character (игрок)
///
/// Автоматически добавляет весь gameplay state через Required Components.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    Transform,
    CharacterKinematics,
    FollowCamera,
    CombatController,
    AmmoReserve,
    Inventory,
    InterpAnchors,
    SoundCooldowns,
    ItemTraceState,
    CrosshairSpread,
    AimState,
    ActiveCrosshair,
    CharacterMovement,
    AnimationParameters,
    TurnInPlaceCurves
)]
pub struct Shooter;

/// Shooter со стартовым запасом патронов из tuning
pub fn shooter_bundle(transform: Transform, tuning: &ShooterTuning) -> impl Bundle {
    (
        Shooter,
        transform,
        AmmoReserve::starting(tuning.combat.starting_9mm_ammo, tuning.combat.starting_ar_ammo),
    )
}

/// Кинематика персонажа (источник: movement component движка)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct CharacterKinematics {
    pub velocity: Vec3,
    /// Текущее ускорение от input (не ноль = игрок жмёт движение)
    pub acceleration: Vec3,
    pub in_air: bool,
    /// Yaw актора (градусы)
    pub actor_yaw: f32,
    /// Base aim rotation: yaw / pitch контроллера (градусы)
    pub aim_yaw: f32,
    pub aim_pitch: f32,
}

impl CharacterKinematics {
    /// Скорость по земле (вертикаль не учитываем)
    pub fn ground_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }

    pub fn is_accelerating(&self) -> bool {
        self.acceleration.length_squared() > 0.0
    }

    /// Yaw направления движения (градусы, 0 = -Z)
    pub fn movement_yaw(&self) -> f32 {
        (-self.velocity.x).atan2(-self.velocity.z).to_degrees()
    }
}

/// Follow camera: позиция, ориентация, текущий FOV
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub location: Vec3,
    pub rotation: Quat,
    pub fov: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 90.0,
        }
    }
}

impl FollowCamera {
    /// Yaw камеры (градусы)
    pub fn yaw_degrees(&self) -> f32 {
        self.rotation.to_euler(EulerRot::YXZ).0.to_degrees()
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Yaw transform'а (градусы)
pub fn yaw_degrees(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_speed_ignores_vertical() {
        let kinematics = CharacterKinematics {
            velocity: Vec3::new(3.0, -100.0, 4.0),
            ..default()
        };
        assert!((kinematics.ground_speed() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_yaw_roundtrip() {
        let camera = FollowCamera {
            rotation: Quat::from_rotation_y(45f32.to_radians()),
            ..default()
        };
        assert!((camera.yaw_degrees() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_movement_yaw_forward_is_zero() {
        let kinematics = CharacterKinematics {
            velocity: Vec3::new(0.0, 0.0, -10.0),
            ..default()
        };
        assert!(kinematics.movement_yaw().abs() < 1e-4);
    }
}
