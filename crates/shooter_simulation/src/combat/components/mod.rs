//! Combat components

pub mod ammo;
pub mod controller;
pub mod weapon;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;
#[cfg(test)]
mod weapon_tests;

// Re-export all components
pub use ammo::*;
pub use controller::*;
pub use weapon::*;
