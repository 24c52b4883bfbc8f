//! Item catalog — rarity и weapon rows (вместо data tables движка)
//!
//! Резолвится один раз при spawn предмета (`spawn_weapon` / `spawn_ammo`).
//! `Default` содержит hardcoded rows; RON override через `from_ron_str` / `from_ron_file`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use super::components::ItemRarity;
use crate::combat::{AmmoType, CrosshairIcons, WeaponType};

/// Ошибки загрузки каталога / tuning
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("no weapon row for {0:?}")]
    MissingWeaponRow(WeaponType),

    #[error("no rarity row for {0:?}")]
    MissingRarityRow(ItemRarity),

    #[error("no ammo row for {0:?}")]
    MissingAmmoRow(AmmoType),

    #[error("invalid duration {field} = {value} (expected finite, non-negative seconds)")]
    InvalidDuration { field: &'static str, value: f32 },
}

/// Длительность, которая пойдёт в `Timer::from_seconds`: отрицательные / NaN / inf недопустимы
pub fn check_duration(field: &'static str, value: f32) -> Result<f32, CatalogError> {
    Duration::try_from_secs_f32(value)
        .map(|_| value)
        .map_err(|_| CatalogError::InvalidDuration { field, value })
}

/// Rarity row: цвета, фон иконки, stencil для outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityRow {
    pub glow_color: [f32; 4],
    pub light_color: [f32; 4],
    pub dark_color: [f32; 4],
    pub number_of_stars: usize,
    pub icon_background: String,
    pub custom_depth_stencil: i32,
}

/// Weapon row: магазин, звуки, иконки, montage секции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRow {
    pub item_name: String,
    pub ammo_type: AmmoType,
    pub weapon_ammo: u32,
    pub magazine_capacity: u32,
    pub pickup_sound: Option<String>,
    pub equip_sound: Option<String>,
    pub fire_sound: Option<String>,
    pub inventory_icon: String,
    pub ammo_icon: String,
    pub material_index: u32,
    pub clip_bone_name: String,
    pub reload_montage_section: String,
    pub empty_reload_montage_section: String,
    pub crosshair: CrosshairIcons,
    pub auto_fire_rate: f32,
    /// Смещение дула в local space (-Z = ствол)
    pub muzzle_offset: [f32; 3],
}

/// Ammo row: как выглядит коробка патронов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoRow {
    pub item_name: String,
    pub ammo_icon: String,
    pub pickup_sound: Option<String>,
    pub equip_sound: Option<String>,
}

/// Каталог предметов (resource)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub rarities: HashMap<ItemRarity, RarityRow>,
    pub weapons: HashMap<WeaponType, WeaponRow>,
    pub ammo: HashMap<AmmoType, AmmoRow>,
}

impl ItemCatalog {
    pub fn from_ron_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = ron::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Cadence каждого оружия должна быть валидной длительностью
    pub fn validate(&self) -> Result<(), CatalogError> {
        for row in self.weapons.values() {
            check_duration("auto_fire_rate", row.auto_fire_rate)?;
        }
        Ok(())
    }

    pub fn from_ron_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn rarity(&self, rarity: ItemRarity) -> Result<&RarityRow, CatalogError> {
        self.rarities
            .get(&rarity)
            .ok_or(CatalogError::MissingRarityRow(rarity))
    }

    pub fn weapon(&self, weapon_type: WeaponType) -> Result<&WeaponRow, CatalogError> {
        self.weapons
            .get(&weapon_type)
            .ok_or(CatalogError::MissingWeaponRow(weapon_type))
    }

    pub fn ammo(&self, ammo_type: AmmoType) -> Result<&AmmoRow, CatalogError> {
        self.ammo
            .get(&ammo_type)
            .ok_or(CatalogError::MissingAmmoRow(ammo_type))
    }
}

fn rarity_row(glow: [f32; 4], light: [f32; 4], dark: [f32; 4], stars: usize, background: &str) -> RarityRow {
    RarityRow {
        glow_color: glow,
        light_color: light,
        dark_color: dark,
        number_of_stars: stars,
        icon_background: background.to_string(),
        custom_depth_stencil: 250,
    }
}

fn crosshair(prefix: &str) -> CrosshairIcons {
    CrosshairIcons {
        middle: format!("{prefix}_Middle"),
        left: format!("{prefix}_Left"),
        right: format!("{prefix}_Right"),
        top: format!("{prefix}_Top"),
        bottom: format!("{prefix}_Bottom"),
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        let mut rarities = HashMap::new();
        rarities.insert(
            ItemRarity::Damaged,
            rarity_row([0.5, 0.5, 0.5, 1.0], [0.3, 0.3, 0.3, 1.0], [0.1, 0.1, 0.1, 1.0], 1, "Icon_Background_Damaged"),
        );
        rarities.insert(
            ItemRarity::Common,
            rarity_row([0.9, 0.9, 0.9, 1.0], [0.6, 0.6, 0.6, 1.0], [0.2, 0.2, 0.2, 1.0], 2, "Icon_Background_Common"),
        );
        rarities.insert(
            ItemRarity::Uncommon,
            rarity_row([0.1, 0.9, 0.1, 1.0], [0.1, 0.6, 0.1, 1.0], [0.0, 0.2, 0.0, 1.0], 3, "Icon_Background_Uncommon"),
        );
        rarities.insert(
            ItemRarity::Rare,
            rarity_row([0.1, 0.3, 1.0, 1.0], [0.1, 0.2, 0.7, 1.0], [0.0, 0.0, 0.3, 1.0], 4, "Icon_Background_Rare"),
        );
        rarities.insert(
            ItemRarity::Legendary,
            rarity_row([0.8, 0.1, 1.0, 1.0], [0.5, 0.1, 0.7, 1.0], [0.2, 0.0, 0.3, 1.0], 5, "Icon_Background_Legendary"),
        );

        let mut weapons = HashMap::new();
        weapons.insert(
            WeaponType::SubmachineGun,
            WeaponRow {
                item_name: "SubmachineGun".to_string(),
                ammo_type: AmmoType::NineMm,
                weapon_ammo: 30,
                magazine_capacity: 30,
                pickup_sound: Some("Item_Pickup".to_string()),
                equip_sound: Some("Item_Equip".to_string()),
                fire_sound: Some("SMG_Fire".to_string()),
                inventory_icon: "SMG_Icon".to_string(),
                ammo_icon: "Ammo_9mm_Icon".to_string(),
                material_index: 0,
                clip_bone_name: "smg_clip".to_string(),
                reload_montage_section: "Reload SMG".to_string(),
                empty_reload_montage_section: "Reload SMG Empty".to_string(),
                crosshair: crosshair("SMG_Crosshair"),
                auto_fire_rate: 0.1,
                muzzle_offset: [0.0, 5.0, -45.0],
            },
        );
        weapons.insert(
            WeaponType::AssaultRifle,
            WeaponRow {
                item_name: "AssaultRifle".to_string(),
                ammo_type: AmmoType::AssaultRifle,
                weapon_ammo: 30,
                magazine_capacity: 30,
                pickup_sound: Some("Item_Pickup".to_string()),
                equip_sound: Some("Item_Equip".to_string()),
                fire_sound: Some("AR_Fire".to_string()),
                inventory_icon: "AR_Icon".to_string(),
                ammo_icon: "Ammo_AR_Icon".to_string(),
                material_index: 0,
                clip_bone_name: "ar_clip".to_string(),
                reload_montage_section: "Reload AR".to_string(),
                empty_reload_montage_section: "Reload AR Empty".to_string(),
                crosshair: crosshair("AR_Crosshair"),
                auto_fire_rate: 0.125,
                muzzle_offset: [0.0, 6.0, -60.0],
            },
        );

        let mut ammo = HashMap::new();
        ammo.insert(
            AmmoType::NineMm,
            AmmoRow {
                item_name: "9mm".to_string(),
                ammo_icon: "Ammo_9mm_Icon".to_string(),
                pickup_sound: Some("Ammo_Pickup".to_string()),
                equip_sound: Some("Ammo_Equip".to_string()),
            },
        );
        ammo.insert(
            AmmoType::AssaultRifle,
            AmmoRow {
                item_name: "AR Ammo".to_string(),
                ammo_icon: "Ammo_AR_Icon".to_string(),
                pickup_sound: Some("Ammo_Pickup".to_string()),
                equip_sound: Some("Ammo_Equip".to_string()),
            },
        );

        Self {
            rarities,
            weapons,
            ammo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_complete() {
        let catalog = ItemCatalog::default();

        for rarity in ItemRarity::ALL {
            let row = catalog.rarity(rarity).expect("rarity row");
            assert_eq!(row.number_of_stars, rarity.number_of_stars());
        }
        for ammo_type in AmmoType::ALL {
            assert!(catalog.ammo(ammo_type).is_ok());
        }
        assert_eq!(
            catalog.weapon(WeaponType::SubmachineGun).map(|row| row.ammo_type).ok(),
            Some(AmmoType::NineMm)
        );
    }

    #[test]
    fn test_missing_row_is_typed_error() {
        let mut catalog = ItemCatalog::default();
        catalog.weapons.remove(&WeaponType::AssaultRifle);

        assert!(matches!(
            catalog.weapon(WeaponType::AssaultRifle),
            Err(CatalogError::MissingWeaponRow(WeaponType::AssaultRifle))
        ));
    }

    #[test]
    fn test_catalog_ron_roundtrip_keeps_rows() {
        let catalog = ItemCatalog::default();
        let source = ron::to_string(&catalog).expect("serialize");
        let parsed = ItemCatalog::from_ron_str(&source).expect("parse");

        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_catalog_rejects_negative_fire_rate() {
        let mut catalog = ItemCatalog::default();
        if let Some(row) = catalog.weapons.get_mut(&WeaponType::SubmachineGun) {
            row.auto_fire_rate = -0.1;
        }
        let source = ron::to_string(&catalog).expect("serialize");

        assert!(matches!(
            ItemCatalog::from_ron_str(&source),
            Err(CatalogError::InvalidDuration { field: "auto_fire_rate", .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_broken_ron() {
        assert!(matches!(
            ItemCatalog::from_ron_str("(rarities: {"),
            Err(CatalogError::Ron(_))
        ));
    }
}
