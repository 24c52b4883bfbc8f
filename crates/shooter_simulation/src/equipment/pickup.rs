//! Pickup routing: что делать с предметом, долетевшим до персонажа
//!
//! - Оружие → первый свободный слот (PickedUp), при полном inventory —
//!   swap с оружием в руках (новое занимает его слот, старое выбрасывается)
//! - Патроны → запас (`AmmoPickupIntent`), entity удаляется

use bevy::prelude::*;

use crate::combat::{
    AmmoPickup, AmmoPickupIntent, CombatController, DropWeaponIntent, EquipWeaponIntent, WeaponType,
};
use crate::components::{Inventory, ItemTraceState, Shooter, SoundCooldowns};
use crate::config::ShooterTuning;
use crate::equipment::{AmmoSphereOverlap, SelectIntent};
use crate::item_system::{
    weapon_bundle, CatalogError, Item, ItemCatalog, ItemHighlight, ItemKind, ItemPickupCompleted, ItemPresentation,
    ItemRarity, ItemState, PlaySound, StartItemCurve,
};

/// System: ItemPickupCompleted → inventory / swap / ammo reserve
pub fn handle_pickup_completed(
    mut commands: Commands,
    mut events: EventReader<ItemPickupCompleted>,
    mut characters: Query<
        (&CombatController, &mut Inventory, &mut SoundCooldowns, &mut ItemTraceState),
        With<Shooter>,
    >,
    mut items: Query<(&mut Item, Option<&AmmoPickup>, Option<&ItemPresentation>), Without<Shooter>>,
    tuning: Res<ShooterTuning>,
    mut sounds: EventWriter<PlaySound>,
    mut equip_intents: EventWriter<EquipWeaponIntent>,
    mut drop_intents: EventWriter<DropWeaponIntent>,
    mut ammo_intents: EventWriter<AmmoPickupIntent>,
) {
    for event in events.read() {
        let Ok((controller, mut inventory, mut cooldowns, mut trace)) = characters.get_mut(event.character) else {
            continue;
        };

        let equipped_slot = controller
            .equipped_weapon
            .and_then(|equipped| items.get(equipped).ok())
            .and_then(|(item, _, _)| item.slot_index);

        let Ok((mut item, ammo, presentation)) = items.get_mut(event.item) else {
            continue;
        };

        if cooldowns.should_play_equip_sound() {
            cooldowns.start_equip_timer(tuning.item.equip_sound_reset_time);
            if let Some(sound) = presentation.and_then(|p| p.equip_sound.clone()) {
                sounds.write(PlaySound {
                    sound,
                    source: Some(event.item),
                });
            }
        }

        match item.kind() {
            ItemKind::Weapon => {
                if let Some(slot) = inventory.push(event.item) {
                    item.slot_index = Some(slot);
                    item.set_state(ItemState::PickedUp);

                    crate::logger::log(&format!(
                        "🎒 {:?} picked up {} into slot {}",
                        event.character, item.name, slot
                    ));
                    continue;
                }

                // Inventory полон: новое оружие занимает слот оружия в руках
                if let Some(slot) = equipped_slot {
                    inventory.set(slot, Some(event.item));
                    item.slot_index = Some(slot);
                }

                drop_intents.write(DropWeaponIntent {
                    character: event.character,
                });
                equip_intents.write(EquipWeaponIntent {
                    character: event.character,
                    weapon: event.item,
                    swapping: true,
                });

                trace.trace_hit_item = None;
                trace.trace_hit_item_last_frame = None;

                crate::logger::log(&format!(
                    "🔁 {:?} inventory full, swapping to {}",
                    event.character, item.name
                ));
            }
            ItemKind::Ammo => {
                let Some(ammo) = ammo else {
                    continue;
                };

                ammo_intents.write(AmmoPickupIntent {
                    character: event.character,
                    ammo_type: ammo.ammo_type,
                    count: ammo.count,
                });
                commands.entity(event.item).despawn();
            }
        }
    }
}

/// System: select button → подобрать item под прицелом (звук в обход cooldown)
pub fn process_select_intents(
    mut intents: EventReader<SelectIntent>,
    mut characters: Query<(&CombatController, &mut ItemTraceState), With<Shooter>>,
    mut start_curve: EventWriter<StartItemCurve>,
) {
    for intent in intents.read() {
        let Ok((controller, mut trace)) = characters.get_mut(intent.character) else {
            continue;
        };

        if !controller.is_unoccupied() {
            continue;
        }

        let Some(item) = trace.trace_hit_item.take() else {
            continue;
        };

        start_curve.write(StartItemCurve {
            item,
            character: intent.character,
            force_play_sound: true,
        });
    }
}

/// System: ammo sphere overlap → патроны сами летят к персонажу
pub fn process_ammo_sphere_overlaps(
    mut overlaps: EventReader<AmmoSphereOverlap>,
    items: Query<&Item>,
    characters: Query<(), With<Shooter>>,
    mut start_curve: EventWriter<StartItemCurve>,
) {
    for overlap in overlaps.read() {
        if characters.get(overlap.character).is_err() {
            continue;
        }
        let Ok(item) = items.get(overlap.item) else {
            continue;
        };

        if item.kind() != ItemKind::Ammo || item.state() != ItemState::Pickup {
            continue;
        }

        start_curve.write(StartItemCurve {
            item: overlap.item,
            character: overlap.character,
            force_play_sound: false,
        });
    }
}

/// Стартовое оружие персонажа: слот 0 и сразу в руки
///
/// Equip применяется на ближайшем `app.update()` (через `EquipWeaponIntent`).
pub fn give_default_weapon(
    world: &mut World,
    character: Entity,
    weapon_type: WeaponType,
    rarity: ItemRarity,
) -> Result<Entity, CatalogError> {
    let (mut item, weapon, presentation) = {
        let catalog = world.resource::<ItemCatalog>();
        weapon_bundle(catalog, weapon_type, rarity, ItemState::PickedUp)?
    };

    let transform = world.get::<Transform>(character).copied().unwrap_or_default();
    item.slot_index = Some(0);
    item.character = Some(character);

    let weapon_entity = world.spawn((item, weapon, presentation, transform)).id();

    if let Some(mut highlight) = world.get_mut::<ItemHighlight>(weapon_entity) {
        highlight.disable_custom_depth();
        highlight.disable_glow();
    }
    if let Some(mut inventory) = world.get_mut::<Inventory>(character) {
        inventory.set(0, Some(weapon_entity));
    }

    world.send_event(EquipWeaponIntent {
        character,
        weapon: weapon_entity,
        swapping: false,
    });

    Ok(weapon_entity)
}
