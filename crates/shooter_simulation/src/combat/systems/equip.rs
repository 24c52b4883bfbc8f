//! Equip / drop systems: оружие в руки и бросок из рук

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalImpulse;
use rand::Rng;

use crate::combat::{CombatController, DropWeaponIntent, EquipWeaponIntent, Weapon};
use crate::components::{yaw_degrees, Attachment, Shooter};
use crate::config::ShooterTuning;
use crate::equipment::EquipSlotChanged;
use crate::item_system::{Item, ItemHighlight, ItemState};
use crate::physics::throw_impulse;
use crate::shooting::ActiveCrosshair;
use crate::DeterministicRng;

/// System: DropWeaponIntent → оружие падает с импульсом броска
///
/// Через `throw_weapon_time` оружие возвращается в Pickup (`tick_weapon_falling`).
pub fn drop_weapons(
    mut commands: Commands,
    mut intents: EventReader<DropWeaponIntent>,
    mut characters: Query<&mut CombatController, With<Shooter>>,
    mut weapons: Query<(&mut Item, &mut Weapon, &mut ItemHighlight, &mut Transform), Without<Shooter>>,
    mut rng: ResMut<DeterministicRng>,
    tuning: Res<ShooterTuning>,
) {
    let item_tuning = &tuning.item;

    for intent in intents.read() {
        let Ok(mut controller) = characters.get_mut(intent.character) else {
            continue;
        };
        let Some(weapon_entity) = controller.equipped_weapon.take() else {
            continue;
        };
        let Ok((mut item, mut weapon, mut highlight, mut transform)) = weapons.get_mut(weapon_entity) else {
            continue;
        };

        item.set_state(ItemState::Falling);
        item.character = None;
        item.slot_index = None;
        highlight.enable_glow();
        weapon.moving_clip = false;
        weapon.start_falling(item_tuning.throw_weapon_time);

        // Оружие летит ровно по yaw, без наклона руки
        transform.rotation = Quat::from_rotation_y(yaw_degrees(transform.rotation).to_radians());

        let (min_yaw, max_yaw) = item_tuning.throw_yaw_range;
        let random_yaw = if min_yaw < max_yaw {
            rng.rng.gen_range(min_yaw..max_yaw)
        } else {
            min_yaw
        };
        let impulse = throw_impulse(
            transform.rotation,
            item_tuning.throw_tilt_degrees,
            random_yaw,
            item_tuning.throw_impulse,
        );

        commands.entity(weapon_entity).remove::<Attachment>().insert(ExternalImpulse {
            impulse,
            torque_impulse: Vec3::ZERO,
        });

        crate::logger::log(&format!(
            "🗑️ {:?} dropped {:?} (impulse {:?})",
            intent.character, weapon_entity, impulse
        ));
    }
}

/// System: EquipWeaponIntent → оружие на hand socket
///
/// HUD получает `EquipSlotChanged` (кроме swap при полном inventory),
/// прицел переключается на иконки нового оружия.
pub fn equip_weapons(
    mut commands: Commands,
    mut intents: EventReader<EquipWeaponIntent>,
    mut characters: Query<(&mut CombatController, &mut ActiveCrosshair), With<Shooter>>,
    mut items: Query<(&mut Item, Option<&mut Weapon>), Without<Shooter>>,
    tuning: Res<ShooterTuning>,
    mut slot_changed: EventWriter<EquipSlotChanged>,
) {
    for intent in intents.read() {
        let Ok((mut controller, mut crosshair)) = characters.get_mut(intent.character) else {
            continue;
        };

        let current_slot = controller
            .equipped_weapon
            .filter(|equipped| *equipped != intent.weapon)
            .and_then(|equipped| items.get(equipped).ok())
            .and_then(|(item, _)| item.slot_index);

        let Ok((mut item, weapon)) = items.get_mut(intent.weapon) else {
            continue;
        };
        let Some(mut weapon) = weapon else {
            crate::logger::log_warning(&format!("⚠️ {:?} is not a weapon, equip ignored", intent.weapon));
            continue;
        };

        weapon.stop_falling();

        if !intent.swapping {
            slot_changed.write(EquipSlotChanged {
                character: intent.character,
                current_slot,
                new_slot: item.slot_index,
            });
        }

        item.set_state(ItemState::Equipped);
        item.character = Some(intent.character);
        crosshair.icons = weapon.crosshair.clone();
        controller.equipped_weapon = Some(intent.weapon);

        // Подобран в полёте: импульс броска больше не нужен
        commands
            .entity(intent.weapon)
            .remove::<ExternalImpulse>()
            .insert(Attachment::weapon(intent.character, tuning.combat.hand_socket.clone()));

        crate::logger::log(&format!(
            "🔫 {:?} equipped {:?} ({}, slot {:?})",
            intent.character, intent.weapon, item.name, item.slot_index
        ));
    }
}
