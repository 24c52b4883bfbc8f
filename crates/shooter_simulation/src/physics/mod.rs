//! Physics module
//!
//! - world: `PhysicsWorld` capability (line traces) + `PhysicsQueries` resource
//! - item_bodies: item physics profile → rapier компоненты, бросок, падение
//!
//! Rapier шаг симуляции — на стороне host'а.

use bevy::prelude::*;

pub mod item_bodies;
pub mod world;

// Re-export основных типов
pub use item_bodies::{
    has_any_collision, item_collision_groups, sync_item_bodies, throw_impulse, tick_weapon_falling,
    CHARACTER_GROUP, ITEM_GROUP, VISIBILITY_GROUP, WORLD_STATIC_GROUP,
};
pub use world::{resolve_beam_end, BeamTrace, EmptyWorld, PhysicsQueries, PhysicsWorld, TraceHit};

use crate::ShooterSet;

/// Physics Plugin
///
/// - `tick_weapon_falling` в `ShooterSet::Items` (после pulse)
/// - `sync_item_bodies` в `ShooterSet::Sync` (после всех смен state за кадр)
pub struct ItemPhysicsPlugin;

impl Plugin for ItemPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsQueries>();

        app.add_systems(Update, tick_weapon_falling.in_set(ShooterSet::Items))
            .add_systems(Update, sync_item_bodies.in_set(ShooterSet::Sync));
    }
}
