//! Combat systems (fire / reload / equip state machine)

pub mod equip;
pub mod fire;
pub mod reload;
pub mod timers;

// Re-export all systems
pub use equip::*;
pub use fire::*;
pub use reload::*;
pub use timers::*;
