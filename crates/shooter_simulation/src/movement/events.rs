//! Movement events

use bevy::prelude::*;

/// Event: crouch button (toggle)
///
/// Игнорируется в воздухе.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrouchIntent {
    pub character: Entity,
}

/// Event: намерение прыгнуть (jump intent)
///
/// Присевший персонаж сначала встаёт (прыжка нет).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub character: Entity,
}

/// Event: прыжок разрешён (host применяет jump velocity)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpStarted {
    pub character: Entity,
}
