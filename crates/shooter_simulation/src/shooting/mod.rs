//! Shooting domain — прицеливание и crosshair (player)
//!
//! Содержит:
//! - CrosshairSpread (аддитивная модель разброса прицела)
//! - AimState (aiming + look rates), ActiveCrosshair (иконки оружия)
//! - AimIntent (event aim button)

use bevy::prelude::*;

pub mod components;
pub mod systems;

// Re-export all components and functions
pub use components::*;
pub use systems::*;

use crate::ShooterSet;

/// Shooting Plugin
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AimIntent>();

        app.add_systems(Update, process_aim_intents.in_set(ShooterSet::Input))
            .add_systems(
                Update,
                (update_crosshair_spread, update_camera_zoom)
                    .chain()
                    .in_set(ShooterSet::Character),
            );
    }
}
