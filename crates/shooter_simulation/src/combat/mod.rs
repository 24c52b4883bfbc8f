//! Combat system module — fire / reload / equip state machine
//!
//! ECS ответственность:
//! - Game state: CombatController, Weapon (магазин), AmmoReserve (запас)
//! - Combat rules: fire/reload только в Unoccupied, ammo accounting
//! - Events: WeaponFired, MontageRequest (presentation)
//!
//! Host ответственность:
//! - Animation runtime: montage playback → AnimationNotify (GrabClip, ReloadFinished, ...)
//! - Physics world: line traces (`PhysicsQueries`)
//! - Sound / FX по WeaponFired и PlaySound

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::*;
pub use systems::*;

use crate::ShooterSet;

/// Combat Plugin
///
/// `ShooterSet::Equip`:
/// 1. drop_weapons — бросок оружия из рук
/// 2. equip_weapons — новое оружие на hand socket
///
/// `ShooterSet::Combat`:
/// 1. tick_combat_timers — auto-fire reset, montage fallback
/// 2. process_fire_button_intents — кнопка → FireWeaponIntent
/// 3. process_ammo_pickups — запас патронов, auto-reload
/// 4. fire_weapon — выстрел (Unoccupied + патроны)
/// 5. reload_weapon — старт reload
/// 6. handle_animation_notifies — GrabClip / ReleaseClip / ReloadFinished / EquipFinished
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<FireButtonIntent>()
            .add_event::<FireWeaponIntent>()
            .add_event::<ReloadIntent>()
            .add_event::<AmmoPickupIntent>()
            .add_event::<EquipWeaponIntent>()
            .add_event::<DropWeaponIntent>()
            .add_event::<AnimationNotify>()
            .add_event::<MontageRequest>()
            .add_event::<WeaponFired>();

        app.add_systems(
            Update,
            (drop_weapons, equip_weapons).chain().in_set(ShooterSet::Equip),
        );

        app.add_systems(
            Update,
            (
                tick_combat_timers,
                process_fire_button_intents,
                process_ammo_pickups,
                fire_weapon,
                reload_weapon,
                handle_animation_notifies,
            )
                .chain() // Последовательное выполнение
                .in_set(ShooterSet::Combat),
        );
    }
}
