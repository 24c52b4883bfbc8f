//! Equipment module — inventory, pickup routing, item trace
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Host эмитит overlap / select / equip-slot intents
//! - Systems меняют Inventory, ItemTraceState, Item state
//! - Combat получает EquipWeaponIntent / DropWeaponIntent / AmmoPickupIntent
//! - HUD получает EquipSlotChanged / HighlightIconChanged
//!
//! **Item lifecycle (со стороны персонажа):**
//! - Overlap → trace под прицелом → select → StartItemCurve (item_system)
//! - ItemPickupCompleted → слот inventory / swap / запас патронов
//! - F, 1-5 → exchange (оружие в руках ↔ слот)

use bevy::prelude::*;

pub mod events;
pub mod exchange;
pub mod pickup;
pub mod trace;

// Re-exports
pub use events::*;
pub use exchange::*;
pub use pickup::*;
pub use trace::*;

use crate::ShooterSet;

/// Equipment plugin
///
/// - `ShooterSet::Input`: overlaps, ammo sphere, select, exchange
/// - `ShooterSet::Pickup`: ItemPickupCompleted routing
/// - `ShooterSet::Character`: sound cooldowns, item trace
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EquipSelectedIntent>()
            .add_event::<SelectIntent>()
            .add_event::<ItemOverlap>()
            .add_event::<AmmoSphereOverlap>()
            .add_event::<EquipSlotChanged>()
            .add_event::<HighlightIconChanged>()
            .add_systems(
                Update,
                (
                    track_item_overlaps,
                    process_ammo_sphere_overlaps,
                    process_select_intents,
                    process_equip_selected_intents,
                )
                    .chain()
                    .in_set(ShooterSet::Input),
            )
            .add_systems(Update, handle_pickup_completed.in_set(ShooterSet::Pickup))
            .add_systems(
                Update,
                (tick_sound_cooldowns, trace_for_items).chain().in_set(ShooterSet::Character),
            );
    }
}
