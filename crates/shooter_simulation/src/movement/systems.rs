//! Movement systems (crouch / jump / capsule)

use bevy::prelude::*;

use super::components::CharacterMovement;
use super::events::{CrouchIntent, JumpIntent, JumpStarted};
use crate::components::{CharacterKinematics, Shooter};
use crate::config::ShooterTuning;
use crate::shooting::AimState;

/// System: CrouchIntent → toggle crouch (не в воздухе)
pub fn process_crouch_intents(
    mut intents: EventReader<CrouchIntent>,
    mut characters: Query<(&mut CharacterMovement, &CharacterKinematics, &AimState), With<Shooter>>,
    tuning: Res<ShooterTuning>,
) {
    for intent in intents.read() {
        let Ok((mut movement, kinematics, aim)) = characters.get_mut(intent.character) else {
            continue;
        };

        if kinematics.in_air {
            continue;
        }

        let crouching = !movement.crouching;
        movement.set_crouching(crouching, &tuning.movement);

        // Встали во время прицеливания — остаёмся на aiming скорости
        if !crouching && aim.is_aiming() {
            movement.max_walk_speed = tuning.movement.crouch_movement_speed;
        }

        crate::logger::log(&format!("🧎 {:?} crouching = {}", intent.character, crouching));
    }
}

/// System: JumpIntent → встать или прыгнуть
pub fn process_jump_intents(
    mut intents: EventReader<JumpIntent>,
    mut characters: Query<(&mut CharacterMovement, &AimState), With<Shooter>>,
    tuning: Res<ShooterTuning>,
    mut jumps: EventWriter<JumpStarted>,
) {
    for intent in intents.read() {
        let Ok((mut movement, aim)) = characters.get_mut(intent.character) else {
            continue;
        };

        if movement.crouching {
            movement.set_crouching(false, &tuning.movement);
            if aim.is_aiming() {
                movement.max_walk_speed = tuning.movement.crouch_movement_speed;
            }
            continue;
        }

        jumps.write(JumpStarted {
            character: intent.character,
        });
    }
}

/// System: капсула плавно идёт к stand / crouch half height
pub fn interp_capsule_half_height(
    mut characters: Query<&mut CharacterMovement, With<Shooter>>,
    tuning: Res<ShooterTuning>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for mut movement in characters.iter_mut() {
        if movement.capsule_half_height == movement.target_capsule_half_height(&tuning.movement) {
            continue;
        }
        movement.interp_capsule(delta, &tuning.movement);
    }
}
