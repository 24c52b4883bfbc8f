//! ECS Components персонажа
//!
//! Организация по доменам:
//! - character: marker, kinematics, follow camera (Shooter, CharacterKinematics, FollowCamera)
//! - equipment: inventory, interp anchors, sound cooldowns, item trace (Inventory, InterpAnchors, ...)
//! - attachment: item на socket'е персонажа (Attachment, AttachmentType)

pub mod attachment;
pub mod character;
pub mod equipment;

// Re-exports для удобного импорта
pub use attachment::*;
pub use character::*;
pub use equipment::*;
