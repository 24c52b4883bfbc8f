//! Animation bridge system

use bevy::prelude::*;

use crate::animation::{AnimationParameters, CharacterFlags, TurnInPlaceCurves};
use crate::combat::{CombatController, CombatState};
use crate::components::{CharacterKinematics, Shooter};
use crate::config::ShooterTuning;
use crate::movement::CharacterMovement;
use crate::shooting::AimState;

/// System: kinematics + combat state → AnimationParameters
pub fn update_animation_parameters(
    mut characters: Query<
        (
            &CharacterKinematics,
            &CombatController,
            &AimState,
            &CharacterMovement,
            &TurnInPlaceCurves,
            &mut AnimationParameters,
        ),
        With<Shooter>,
    >,
    time: Res<Time>,
    tuning: Res<ShooterTuning>,
) {
    let delta = time.delta_secs();

    for (kinematics, controller, aim, movement, curves, mut params) in characters.iter_mut() {
        let flags = CharacterFlags {
            aiming: aim.is_aiming(),
            reloading: controller.state() == CombatState::Reloading,
            crouching: movement.crouching,
            equipping: controller.state() == CombatState::Equipping,
        };

        params.update(kinematics, flags, curves, delta, &tuning.animation);
    }
}
