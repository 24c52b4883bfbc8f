//! Combat timers: auto-fire cadence, montage fallback

use bevy::prelude::*;

use crate::combat::{
    AnimationNotify, AnimationNotifyKind, CombatController, CombatState, FireWeaponIntent, ReloadIntent, Weapon,
};
use crate::components::Shooter;

/// System: тик combat timers
///
/// - Auto-fire reset: fire button зажата и патроны есть → следующий выстрел,
///   магазин пуст → reload
/// - Montage fallback: notify не пришёл → синтезируем завершающий notify
pub fn tick_combat_timers(
    mut characters: Query<(Entity, &mut CombatController), With<Shooter>>,
    weapons: Query<&Weapon>,
    time: Res<Time>,
    mut fire_intents: EventWriter<FireWeaponIntent>,
    mut reload_intents: EventWriter<ReloadIntent>,
    mut notifies: EventWriter<AnimationNotify>,
) {
    for (character, mut controller) in characters.iter_mut() {
        let fired = controller.tick(time.delta());

        if fired.auto_fire_reset {
            let weapon = controller.equipped_weapon.and_then(|entity| weapons.get(entity).ok());

            match weapon {
                Some(weapon) if weapon.has_ammo() => {
                    if controller.fire_button_pressed {
                        fire_intents.write(FireWeaponIntent { character });
                    }
                }
                Some(_) => {
                    reload_intents.write(ReloadIntent { character });
                }
                None => {}
            }
        }

        let Some(timed_out) = fired.montage_timed_out else {
            continue;
        };

        let kind = match timed_out {
            CombatState::Reloading => AnimationNotifyKind::ReloadFinished,
            CombatState::Equipping => AnimationNotifyKind::EquipFinished,
            _ => continue,
        };

        crate::logger::log_warning(&format!(
            "⏱️ {:?}: montage notify missing in {:?}, forcing {:?}",
            character, timed_out, kind
        ));
        notifies.write(AnimationNotify { character, kind });
    }
}
