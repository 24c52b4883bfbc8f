//! Inventory exchange: F / 1-5 меняют оружие в руках на оружие из слота

use bevy::prelude::*;
use thiserror::Error;

use crate::combat::{CombatController, CombatState, EquipWeaponIntent, Montage, MontageRequest};
use crate::components::{Attachment, Inventory, Shooter};
use crate::config::ShooterTuning;
use crate::equipment::EquipSelectedIntent;
use crate::item_system::{Item, ItemPresentation, ItemState, PlaySound};
use crate::movement::CharacterMovement;
use crate::shooting::AimState;

/// Секция equip montage
pub const EQUIP_SECTION: &str = "Equip";

/// Почему exchange отклонён
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeRejected {
    #[error("slot {0} already equipped")]
    SameSlot(usize),
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("combat state {0:?} does not allow exchange")]
    Busy(CombatState),
}

/// Проверить exchange; returns оружие из нового слота
///
/// Разрешено в Unoccupied и Equipping (можно перебить equip montage).
pub fn validate_exchange(
    controller: &CombatController,
    inventory: &Inventory,
    current_slot: Option<usize>,
    new_slot: usize,
) -> Result<Entity, ExchangeRejected> {
    if !controller.can_exchange() {
        return Err(ExchangeRejected::Busy(controller.state()));
    }
    if current_slot == Some(new_slot) {
        return Err(ExchangeRejected::SameSlot(new_slot));
    }

    inventory.get(new_slot).ok_or(ExchangeRejected::EmptySlot(new_slot))
}

/// System: EquipSelectedIntent → exchange + equip montage
pub fn process_equip_selected_intents(
    mut commands: Commands,
    mut intents: EventReader<EquipSelectedIntent>,
    mut characters: Query<
        (
            &mut CombatController,
            &Inventory,
            &mut AimState,
            &mut CharacterMovement,
        ),
        With<Shooter>,
    >,
    mut items: Query<(&mut Item, Option<&ItemPresentation>), Without<Shooter>>,
    tuning: Res<ShooterTuning>,
    mut equip_intents: EventWriter<EquipWeaponIntent>,
    mut montages: EventWriter<MontageRequest>,
    mut sounds: EventWriter<PlaySound>,
) {
    for intent in intents.read() {
        let Ok((mut controller, inventory, mut aim, mut movement)) =
            characters.get_mut(intent.character)
        else {
            continue;
        };

        let old_weapon = controller.equipped_weapon;
        let current_slot = old_weapon
            .and_then(|weapon| items.get(weapon).ok())
            .and_then(|(item, _)| item.slot_index);

        let new_weapon = match validate_exchange(&controller, inventory, current_slot, intent.slot) {
            Ok(weapon) => weapon,
            Err(reason) => {
                crate::logger::log(&format!("🚫 {:?} exchange rejected: {}", intent.character, reason));
                continue;
            }
        };

        if aim.is_aiming() {
            aim.stop_aiming(&mut movement, &tuning.movement);
        }

        // Старое оружие уходит обратно в inventory
        if let Some(old) = old_weapon {
            if let Ok((mut item, _)) = items.get_mut(old) {
                item.set_state(ItemState::PickedUp);
            }
            commands.entity(old).remove::<Attachment>();
        }

        equip_intents.write(EquipWeaponIntent {
            character: intent.character,
            weapon: new_weapon,
            swapping: false,
        });

        controller.begin_equipping(tuning.combat.montage_fallback_time);
        montages.write(MontageRequest {
            character: intent.character,
            montage: Montage::Equip,
            section: EQUIP_SECTION.to_string(),
        });

        // Exchange всегда озвучивается, cooldown не трогаем
        if let Ok((_, Some(presentation))) = items.get(new_weapon) {
            if let Some(sound) = presentation.equip_sound.clone() {
                sounds.write(PlaySound {
                    sound,
                    source: Some(new_weapon),
                });
            }
        }

        crate::logger::log(&format!(
            "🔄 {:?} exchange slot {:?} → {}",
            intent.character, current_slot, intent.slot
        ));
    }
}
