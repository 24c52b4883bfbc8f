//! Fire systems: fire button → выстрел (ammo, trace, FX events, crosshair)

use bevy::prelude::*;

use crate::combat::{
    CombatController, FireButtonIntent, FireWeaponIntent, Montage, MontageRequest, Weapon, WeaponFired,
};
use crate::components::{FollowCamera, Shooter};
use crate::config::ShooterTuning;
use crate::item_system::PlaySound;
use crate::physics::{resolve_beam_end, PhysicsQueries};
use crate::shooting::CrosshairSpread;

/// Секция hip fire montage
pub const HIP_FIRE_SECTION: &str = "StartFire";

/// System: FireButtonIntent → флаг кнопки + попытка выстрела
pub fn process_fire_button_intents(
    mut intents: EventReader<FireButtonIntent>,
    mut characters: Query<&mut CombatController, With<Shooter>>,
    mut fire_intents: EventWriter<FireWeaponIntent>,
) {
    for intent in intents.read() {
        let Ok(mut controller) = characters.get_mut(intent.character) else {
            continue;
        };

        controller.fire_button_pressed = intent.pressed;

        if intent.pressed {
            fire_intents.write(FireWeaponIntent {
                character: intent.character,
            });
        }
    }
}

/// System: FireWeaponIntent → выстрел
///
/// Принимается только в Unoccupied с патронами в магазине; иначе отбрасывается.
/// Двухэтапный trace (камера → прицел, дуло → точка прицела) через `PhysicsQueries`.
pub fn fire_weapon(
    mut intents: EventReader<FireWeaponIntent>,
    mut characters: Query<(&mut CombatController, &mut CrosshairSpread, &FollowCamera), With<Shooter>>,
    mut weapons: Query<(&mut Weapon, &Transform), Without<Shooter>>,
    physics: Res<PhysicsQueries>,
    tuning: Res<ShooterTuning>,
    mut fired: EventWriter<WeaponFired>,
    mut montages: EventWriter<MontageRequest>,
    mut sounds: EventWriter<PlaySound>,
) {
    for intent in intents.read() {
        let Ok((mut controller, mut spread, camera)) = characters.get_mut(intent.character) else {
            continue;
        };

        let weapon_entity = controller.equipped_weapon;
        let mut weapon = weapon_entity.and_then(|entity| weapons.get_mut(entity).ok());

        let result = controller.try_fire(weapon.as_mut().map(|(weapon, _)| &mut **weapon));
        if let Err(reason) = result {
            crate::logger::log(&format!("🚫 {:?} fire rejected: {}", intent.character, reason));
            continue;
        }

        let (Some(weapon_entity), Some((weapon, weapon_transform))) = (weapon_entity, weapon) else {
            continue;
        };

        if let Some(sound) = weapon.fire_sound.clone() {
            sounds.write(PlaySound {
                sound,
                source: Some(weapon_entity),
            });
        }

        montages.write(MontageRequest {
            character: intent.character,
            montage: Montage::HipFire,
            section: HIP_FIRE_SECTION.to_string(),
        });

        let muzzle = weapon.muzzle_location(weapon_transform);
        let beam = resolve_beam_end(
            &physics,
            camera.location,
            camera.forward(),
            muzzle,
            tuning.crosshair.trace_distance,
        );

        fired.write(WeaponFired {
            shooter: intent.character,
            weapon: weapon_entity,
            muzzle,
            beam_end: beam.end,
            hit: beam.hit.and_then(|hit| hit.entity),
            fire_sound: weapon.fire_sound.clone(),
        });

        spread.start_bullet_fire(tuning.crosshair.shoot_time_duration);

        crate::logger::log(&format!(
            "🔫 {:?} fired {:?}: ammo {} → beam end {:?}",
            intent.character,
            weapon_entity,
            weapon.ammo(),
            beam.end
        ));
    }
}
