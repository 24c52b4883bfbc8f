//! Weapon component (side component рядом с `Item`, kind = Weapon)
//!
//! Хранит магазин, тип оружия/патронов и данные reload montage.
//! Инвариант: `ammo ≤ magazine_capacity`, `magazine_capacity > 0`.
//! `weapon_type` / `ammo_type` не меняются после создания.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ammo::AmmoType;

/// Тип оружия (ключ weapon rows в `ItemCatalog`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponType {
    SubmachineGun,
    AssaultRifle,
}

/// Набор текстур прицела для HUD
#[derive(Debug, Clone, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairIcons {
    pub middle: String,
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
}

/// Runtime оружие
#[derive(Component, Debug, Clone)]
pub struct Weapon {
    ammo: u32,
    magazine_capacity: u32,
    weapon_type: WeaponType,
    ammo_type: AmmoType,

    /// Секция reload montage для частично пустого магазина
    pub reload_montage_section: String,
    /// Секция reload montage для пустого магазина
    pub empty_reload_montage_section: String,
    /// Кость магазина (GrabClip / ReleaseClip)
    pub clip_bone_name: String,
    /// true пока рука держит магазин во время reload
    pub moving_clip: bool,

    /// Период auto-fire (секунды между выстрелами)
    pub auto_fire_rate: f32,
    /// Смещение дула в local space оружия
    pub muzzle_offset: Vec3,
    pub crosshair: CrosshairIcons,
    pub fire_sound: Option<String>,

    /// Таймер "падения" после броска (None = не падает)
    throw_timer: Option<Timer>,
}

impl Weapon {
    pub fn new(weapon_type: WeaponType, ammo_type: AmmoType, ammo: u32, magazine_capacity: u32) -> Self {
        let magazine_capacity = magazine_capacity.max(1);
        Self {
            ammo: ammo.min(magazine_capacity),
            magazine_capacity,
            weapon_type,
            ammo_type,
            reload_montage_section: "Reload".to_string(),
            empty_reload_montage_section: "ReloadEmpty".to_string(),
            clip_bone_name: "Clip_Bone".to_string(),
            moving_clip: false,
            auto_fire_rate: 0.1,
            muzzle_offset: Vec3::ZERO,
            crosshair: CrosshairIcons::default(),
            fire_sound: None,
            throw_timer: None,
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn magazine_capacity(&self) -> u32 {
        self.magazine_capacity
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn ammo_type(&self) -> AmmoType {
        self.ammo_type
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    pub fn clip_is_full(&self) -> bool {
        self.ammo >= self.magazine_capacity
    }

    /// Сколько патронов влезет в магазин
    pub fn missing_rounds(&self) -> u32 {
        self.magazine_capacity - self.ammo
    }

    /// Выстрел: -1 патрон (на пустом магазине no-op)
    pub fn decrement_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Добавить патроны в магазин (с clamp по capacity)
    ///
    /// Returns сколько реально поместилось.
    pub fn reload_ammo(&mut self, amount: u32) -> u32 {
        let loaded = amount.min(self.missing_rounds());
        self.ammo += loaded;
        loaded
    }

    /// Секция reload montage по состоянию магазина
    pub fn reload_section(&self) -> &str {
        if self.ammo == 0 {
            &self.empty_reload_montage_section
        } else {
            &self.reload_montage_section
        }
    }

    /// Начать "падение" после броска
    pub fn start_falling(&mut self, throw_weapon_time: f32) {
        self.throw_timer = Some(Timer::from_seconds(throw_weapon_time, TimerMode::Once));
    }

    pub fn is_falling(&self) -> bool {
        self.throw_timer.is_some()
    }

    /// Тикает таймер броска; returns true в кадр, когда падение закончилось
    pub fn tick_falling(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.throw_timer.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.finished() {
            self.throw_timer = None;
            return true;
        }
        false
    }

    /// Прервать падение (оружие снова подобрали)
    pub fn stop_falling(&mut self) {
        self.throw_timer = None;
    }

    /// Мировая позиция дула по transform оружия
    pub fn muzzle_location(&self, weapon_transform: &Transform) -> Vec3 {
        weapon_transform.transform_point(self.muzzle_offset)
    }
}
