//! Item system events

use bevy::prelude::*;

/// Персонаж подбирает item: старт полёта к anchor перед камерой
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartItemCurve {
    pub item: Entity,
    pub character: Entity,
    /// Играть pickup звук в обход cooldown
    pub force_play_sound: bool,
}

/// Полёт закончился, item передаётся в pickup routing персонажа
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPickupCompleted {
    pub item: Entity,
    pub character: Entity,
}

/// Запрос 2D звука (host проигрывает asset по имени)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PlaySound {
    pub sound: String,
    pub source: Option<Entity>,
}
