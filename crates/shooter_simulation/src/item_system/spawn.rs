//! Spawn helpers: собрать предмет из catalog rows

use bevy::prelude::*;

use super::catalog::{CatalogError, ItemCatalog};
use super::components::{Item, ItemKind, ItemPresentation, ItemRarity, ItemState};
use crate::combat::{AmmoPickup, AmmoType, Weapon, WeaponType};

/// Item + Weapon + presentation из weapon row и rarity row
pub fn weapon_bundle(
    catalog: &ItemCatalog,
    weapon_type: WeaponType,
    rarity: ItemRarity,
    state: ItemState,
) -> Result<(Item, Weapon, ItemPresentation), CatalogError> {
    let row = catalog.weapon(weapon_type)?;
    let rarity_row = catalog.rarity(rarity)?;

    let item = Item::with_state(row.item_name.clone(), ItemKind::Weapon, rarity, state);

    let mut weapon = Weapon::new(weapon_type, row.ammo_type, row.weapon_ammo, row.magazine_capacity);
    weapon.reload_montage_section = row.reload_montage_section.clone();
    weapon.empty_reload_montage_section = row.empty_reload_montage_section.clone();
    weapon.clip_bone_name = row.clip_bone_name.clone();
    weapon.auto_fire_rate = row.auto_fire_rate;
    weapon.muzzle_offset = Vec3::from_array(row.muzzle_offset);
    weapon.crosshair = row.crosshair.clone();
    weapon.fire_sound = row.fire_sound.clone();

    let presentation = ItemPresentation {
        active_stars: rarity.active_stars(),
        glow_color: rarity_row.glow_color,
        light_color: rarity_row.light_color,
        dark_color: rarity_row.dark_color,
        icon_background: rarity_row.icon_background.clone(),
        icon_item: row.inventory_icon.clone(),
        icon_ammo: row.ammo_icon.clone(),
        custom_depth_stencil: rarity_row.custom_depth_stencil,
        pickup_sound: row.pickup_sound.clone(),
        equip_sound: row.equip_sound.clone(),
    };

    Ok((item, weapon, presentation))
}

/// Item + AmmoPickup + presentation из ammo row
pub fn ammo_bundle(
    catalog: &ItemCatalog,
    ammo_type: AmmoType,
    count: u32,
    rarity: ItemRarity,
) -> Result<(Item, AmmoPickup, ItemPresentation), CatalogError> {
    let row = catalog.ammo(ammo_type)?;
    let rarity_row = catalog.rarity(rarity)?;

    let mut item = Item::new(row.item_name.clone(), ItemKind::Ammo, rarity);
    item.item_count = count;

    let presentation = ItemPresentation {
        active_stars: rarity.active_stars(),
        glow_color: rarity_row.glow_color,
        light_color: rarity_row.light_color,
        dark_color: rarity_row.dark_color,
        icon_background: rarity_row.icon_background.clone(),
        icon_item: row.ammo_icon.clone(),
        icon_ammo: row.ammo_icon.clone(),
        custom_depth_stencil: rarity_row.custom_depth_stencil,
        pickup_sound: row.pickup_sound.clone(),
        equip_sound: row.equip_sound.clone(),
    };

    Ok((item, AmmoPickup { ammo_type, count }, presentation))
}

/// Spawn оружия в мире
pub fn spawn_weapon(
    commands: &mut Commands,
    catalog: &ItemCatalog,
    weapon_type: WeaponType,
    rarity: ItemRarity,
    transform: Transform,
) -> Result<Entity, CatalogError> {
    let bundle = weapon_bundle(catalog, weapon_type, rarity, ItemState::Pickup)?;
    let entity = commands.spawn((bundle, transform)).id();

    crate::logger::log(&format!("🔫 Spawned {:?} ({:?}) as {:?}", weapon_type, rarity, entity));
    Ok(entity)
}

/// Spawn коробки патронов в мире
pub fn spawn_ammo(
    commands: &mut Commands,
    catalog: &ItemCatalog,
    ammo_type: AmmoType,
    count: u32,
    transform: Transform,
) -> Result<Entity, CatalogError> {
    let bundle = ammo_bundle(catalog, ammo_type, count, ItemRarity::Common)?;
    let entity = commands.spawn((bundle, transform)).id();

    crate::logger::log(&format!("📦 Spawned {} × {:?} as {:?}", count, ammo_type, entity));
    Ok(entity)
}
