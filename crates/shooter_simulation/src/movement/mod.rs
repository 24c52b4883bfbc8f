//! Movement domain — crouch, walk speed, capsule
//!
//! Содержит:
//! - CharacterMovement (crouch, max walk speed, ground friction, capsule half height)
//! - CrouchIntent / JumpIntent / JumpStarted (events)

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export all components and events
pub use components::*;
pub use events::*;
pub use systems::*;

use crate::ShooterSet;

/// Movement Plugin
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CrouchIntent>()
            .add_event::<JumpIntent>()
            .add_event::<JumpStarted>();

        app.add_systems(
            Update,
            (process_crouch_intents, process_jump_intents)
                .chain()
                .in_set(ShooterSet::Input),
        )
        .add_systems(Update, interp_capsule_half_height.in_set(ShooterSet::Character));
    }
}
