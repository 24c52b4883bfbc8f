//! Animation domain — bridge к animation runtime host'а
//!
//! Содержит:
//! - AnimationParameters (speed, strafe offset, aim offset state, turn in place, lean, recoil weight)
//! - TurnInPlaceCurves (сэмплы curves, которые пишет host)

use bevy::prelude::*;

pub mod parameters;
pub mod systems;

#[cfg(test)]
mod parameters_tests;

pub use parameters::*;
pub use systems::*;

use crate::ShooterSet;

/// Animation Plugin
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_animation_parameters.in_set(ShooterSet::Animation));
    }
}
