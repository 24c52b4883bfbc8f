//! Reload systems: ammo pickup, reload start, animation notifies

use bevy::prelude::*;

use crate::combat::{
    AmmoPickupIntent, AmmoReserve, AnimationNotify, AnimationNotifyKind, CombatController, Montage, MontageRequest,
    ReloadIntent, Weapon,
};
use crate::components::Shooter;
use crate::config::ShooterTuning;
use crate::movement::CharacterMovement;
use crate::shooting::AimState;

/// System: патроны в запас; пустое оружие того же типа → auto-reload
pub fn process_ammo_pickups(
    mut intents: EventReader<AmmoPickupIntent>,
    mut characters: Query<(&CombatController, &mut AmmoReserve), With<Shooter>>,
    weapons: Query<&Weapon>,
    mut reload_intents: EventWriter<ReloadIntent>,
) {
    for intent in intents.read() {
        let Ok((controller, mut reserve)) = characters.get_mut(intent.character) else {
            continue;
        };

        let Some(carried) = reserve.add(intent.ammo_type, intent.count) else {
            crate::logger::log_warning(&format!(
                "⚠️ {:?} does not track {:?}, ammo pickup ignored",
                intent.character, intent.ammo_type
            ));
            continue;
        };

        crate::logger::log(&format!(
            "📦 {:?} +{} {:?} (carried {})",
            intent.character, intent.count, intent.ammo_type, carried
        ));

        let Some(weapon) = controller.equipped_weapon.and_then(|entity| weapons.get(entity).ok()) else {
            continue;
        };

        if weapon.ammo_type() == intent.ammo_type && !weapon.has_ammo() {
            reload_intents.write(ReloadIntent {
                character: intent.character,
            });
        }
    }
}

/// System: ReloadIntent → Reloading + reload montage секция
pub fn reload_weapon(
    mut intents: EventReader<ReloadIntent>,
    mut characters: Query<
        (&mut CombatController, &AmmoReserve, &mut AimState, &mut CharacterMovement),
        With<Shooter>,
    >,
    weapons: Query<&Weapon>,
    tuning: Res<ShooterTuning>,
    mut montages: EventWriter<MontageRequest>,
) {
    for intent in intents.read() {
        let Ok((mut controller, reserve, mut aim, mut movement)) = characters.get_mut(intent.character) else {
            continue;
        };

        let weapon = controller.equipped_weapon.and_then(|entity| weapons.get(entity).ok());

        let section = match controller.try_reload(weapon, reserve, tuning.combat.montage_fallback_time) {
            Ok(section) => section,
            Err(reason) => {
                crate::logger::log(&format!("🚫 {:?} reload rejected: {}", intent.character, reason));
                continue;
            }
        };

        if aim.is_aiming() {
            aim.stop_aiming(&mut movement, &tuning.movement);
        }

        crate::logger::log(&format!("🔄 {:?} reloading ({})", intent.character, section));

        montages.write(MontageRequest {
            character: intent.character,
            montage: Montage::Reload,
            section,
        });
    }
}

/// System: notifies из animation runtime (или синтезированные fallback'ом)
pub fn handle_animation_notifies(
    mut notifies: EventReader<AnimationNotify>,
    mut characters: Query<
        (&mut CombatController, &mut AmmoReserve, &mut AimState, &mut CharacterMovement),
        With<Shooter>,
    >,
    mut weapons: Query<&mut Weapon>,
    tuning: Res<ShooterTuning>,
) {
    for notify in notifies.read() {
        let Ok((mut controller, mut reserve, mut aim, mut movement)) = characters.get_mut(notify.character) else {
            continue;
        };

        let weapon = controller
            .equipped_weapon
            .and_then(|entity| weapons.get_mut(entity).ok())
            .map(|weapon| weapon.into_inner());

        match notify.kind {
            AnimationNotifyKind::GrabClip { clip_transform } => {
                controller.grab_clip(weapon, clip_transform);
            }
            AnimationNotifyKind::ReleaseClip => {
                controller.release_clip(weapon);
            }
            AnimationNotifyKind::ReloadFinished => {
                let Some(loaded) = controller.finish_reloading(weapon, &mut reserve) else {
                    continue;
                };

                crate::logger::log(&format!("✅ {:?} reload finished: +{} rounds", notify.character, loaded));

                if controller.aiming_button_pressed {
                    aim.aim(&mut movement, &tuning.movement);
                }
            }
            AnimationNotifyKind::EquipFinished => {
                if controller.finish_equipping() && controller.aiming_button_pressed {
                    aim.aim(&mut movement, &tuning.movement);
                }
            }
        }
    }
}
