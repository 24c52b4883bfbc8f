//! Shooting systems: aim button, crosshair spread, camera zoom

use bevy::prelude::*;

use super::components::{AimIntent, AimState, CrosshairSpread};
use crate::combat::{CombatController, CombatState};
use crate::components::{CharacterKinematics, FollowCamera, Shooter};
use crate::config::ShooterTuning;
use crate::movement::CharacterMovement;
use crate::shared::finterp_to;

/// System: AimIntent → aiming (не во время reload / equip)
///
/// Кнопка запоминается в `CombatController`, чтобы прицел вернулся после montage.
pub fn process_aim_intents(
    mut intents: EventReader<AimIntent>,
    mut characters: Query<(&mut CombatController, &mut AimState, &mut CharacterMovement), With<Shooter>>,
    tuning: Res<ShooterTuning>,
) {
    for intent in intents.read() {
        let Ok((mut controller, mut aim, mut movement)) = characters.get_mut(intent.character) else {
            continue;
        };

        controller.aiming_button_pressed = intent.pressed;

        if !intent.pressed {
            aim.stop_aiming(&mut movement, &tuning.movement);
            continue;
        }

        if matches!(controller.state(), CombatState::Reloading | CombatState::Equipping) {
            continue;
        }

        aim.aim(&mut movement, &tuning.movement);
    }
}

/// System: crosshair factors
pub fn update_crosshair_spread(
    mut characters: Query<(&mut CrosshairSpread, &CharacterKinematics, &AimState), With<Shooter>>,
    tuning: Res<ShooterTuning>,
    time: Res<Time>,
) {
    for (mut spread, kinematics, aim) in characters.iter_mut() {
        spread.tick(time.delta());
        spread.update(
            kinematics.ground_speed(),
            kinematics.in_air,
            aim.is_aiming(),
            time.delta_secs(),
            &tuning.crosshair,
        );
    }
}

/// System: FOV zoom + look rates
pub fn update_camera_zoom(
    mut characters: Query<(&mut FollowCamera, &mut AimState), With<Shooter>>,
    tuning: Res<ShooterTuning>,
    time: Res<Time>,
) {
    let camera_tuning = &tuning.camera;

    for (mut camera, mut aim) in characters.iter_mut() {
        let target = if aim.is_aiming() {
            camera_tuning.zoomed_fov
        } else {
            camera_tuning.default_fov
        };

        if camera.fov != target {
            camera.fov = finterp_to(camera.fov, target, time.delta_secs(), camera_tuning.zoom_interp_speed);
        }

        aim.update_look_rates(camera_tuning);
    }
}
