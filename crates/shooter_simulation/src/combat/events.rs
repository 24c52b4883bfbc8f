//! Combat events
//!
//! # Architecture
//!
//! **Input (host → ECS):**
//! - `FireButtonIntent` — fire button pressed / released
//! - `ReloadIntent` — reload button (или auto-reload на пустом магазине)
//! - `AmmoPickupIntent` — патроны добавляются в запас
//! - `AnimationNotify` — notify из animation runtime (GrabClip, ReleaseClip, ...)
//!
//! **Internal:**
//! - `FireWeaponIntent` — попытка выстрела (кнопка / auto-fire)
//! - `EquipWeaponIntent` / `DropWeaponIntent` — смена оружия в руках
//!
//! **Output (ECS → presentation):**
//! - `WeaponFired` — звук, muzzle flash, trail, impact
//! - `MontageRequest` — проиграть montage секцию

use bevy::prelude::*;

use super::components::AmmoType;

/// Fire button pressed / released
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireButtonIntent {
    pub character: Entity,
    pub pressed: bool,
}

/// Попытка выстрела (кнопка или auto-fire reset)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireWeaponIntent {
    pub character: Entity,
}

/// Reload button / auto-reload
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadIntent {
    pub character: Entity,
}

/// Патроны подобраны (ammo pickup)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoPickupIntent {
    pub character: Entity,
    pub ammo_type: AmmoType,
    pub count: u32,
}

/// Взять оружие в руки
///
/// `swapping = true` — замена при полном inventory (HUD slot не перерисовывается).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipWeaponIntent {
    pub character: Entity,
    pub weapon: Entity,
    pub swapping: bool,
}

/// Выбросить оружие из рук (бросок с импульсом)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropWeaponIntent {
    pub character: Entity,
}

/// Notify из animation runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationNotifyKind {
    /// Рука взяла магазин: transform магазина в момент захвата
    GrabClip { clip_transform: Transform },
    /// Магазин вернулся в оружие
    ReleaseClip,
    /// Reload montage закончился
    ReloadFinished,
    /// Equip montage закончился
    EquipFinished,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnimationNotify {
    pub character: Entity,
    pub kind: AnimationNotifyKind,
}

/// Какой montage проиграть
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Montage {
    HipFire,
    Reload,
    Equip,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct MontageRequest {
    pub character: Entity,
    pub montage: Montage,
    pub section: String,
}

/// Выстрел состоялся (для звука / FX)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct WeaponFired {
    pub shooter: Entity,
    pub weapon: Entity,
    /// Позиция дула
    pub muzzle: Vec3,
    /// Конец луча (impact или конец trace)
    pub beam_end: Vec3,
    /// Entity, в которую попали
    pub hit: Option<Entity>,
    pub fire_sound: Option<String>,
}
