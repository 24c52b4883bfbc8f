//! Equipment system events
//!
//! # Architecture
//!
//! **Input (host → ECS):**
//! - `EquipSelectedIntent` — hotkeys F, 1-5: обмен оружия в руках с inventory слотом
//! - `SelectIntent` — подобрать item под прицелом
//! - `ItemOverlap` — персонаж вошёл / вышел из area sphere предмета
//! - `AmmoSphereOverlap` — персонаж задел ammo sphere (автоподбор)
//!
//! **Output (ECS → HUD):**
//! - `EquipSlotChanged` — анимация смены слота в inventory bar
//! - `HighlightIconChanged` — подсветка свободного слота

use bevy::prelude::*;

/// Выбрать inventory слот (0 = F, 1-5 = клавиши 1-5)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipSelectedIntent {
    pub character: Entity,
    pub slot: usize,
}

/// Select button: подобрать item под прицелом
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectIntent {
    pub character: Entity,
}

/// Overlap area sphere предмета (began = вход, !began = выход)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemOverlap {
    pub character: Entity,
    pub item: Entity,
    pub began: bool,
}

/// Персонаж задел ammo sphere
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoSphereOverlap {
    pub character: Entity,
    pub item: Entity,
}

/// HUD: оружие в руках сменило слот (`current_slot = None` — рук было пусто)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipSlotChanged {
    pub character: Entity,
    pub current_slot: Option<usize>,
    pub new_slot: Option<usize>,
}

/// HUD: подсветить / погасить иконку слота
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightIconChanged {
    pub character: Entity,
    pub slot: usize,
    pub highlighted: bool,
}
