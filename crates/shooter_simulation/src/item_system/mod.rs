//! Item System — предметы в мире: lifecycle, полёт к персонажу, pulse
//!
//! # Архитектура
//!
//! **Item** — общий компонент (name, kind, state, rarity, physics profile):
//! - Kind-specific данные в side components: `Weapon` / `AmmoPickup`
//! - State меняется только через `Item::set_state` (physics profile следует за state)
//!
//! **ItemCatalog** — rarity / weapon / ammo rows:
//! - Резолвится один раз при spawn (`spawn_weapon`, `spawn_ammo`)
//! - `Default` hardcoded, override из RON
//!
//! **ItemInterp** — полёт подобранного предмета к anchor перед камерой
//! (`StartItemCurve` → `ItemPickupCompleted`).
//!
//! # Пример использования
//!
//! ```ignore
//! let catalog = ItemCatalog::default();
//! let smg = spawn_weapon(&mut commands, &catalog, WeaponType::SubmachineGun, ItemRarity::Rare, transform)?;
//! start_curve.write(StartItemCurve { item: smg, character, force_play_sound: false });
//! ```

use bevy::prelude::*;

pub mod catalog;
pub mod components;
pub mod events;
pub mod interp;
pub mod pulse;
pub mod spawn;

pub use catalog::*;
pub use components::*;
pub use events::*;
pub use interp::{
    finish_item_interp, flight_anchor_index, interp_location, start_item_curves, update_item_interp, ItemCurves,
    ItemInterp,
};
pub use pulse::{pulse_material, tick_item_pulse, update_item_pulse};
pub use spawn::*;

use crate::ShooterSet;

/// Item System Plugin
///
/// Порядок в `ShooterSet::Items`:
/// 1. start_item_curves — StartItemCurve → ItemInterp
/// 2. update_item_interp — кадр полёта
/// 3. finish_item_interp — таймер истёк → ItemPickupCompleted
/// 4. tick_item_pulse / update_item_pulse — material parameters
pub struct ItemSystemPlugin;

impl Plugin for ItemSystemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ItemCatalog>()
            .init_resource::<ItemCurves>()
            .add_event::<StartItemCurve>()
            .add_event::<ItemPickupCompleted>()
            .add_event::<PlaySound>();

        app.add_systems(
            Update,
            (
                start_item_curves,
                update_item_interp,
                finish_item_interp,
                tick_item_pulse,
                update_item_pulse,
            )
                .chain()
                .in_set(ShooterSet::Items),
        );
    }
}
