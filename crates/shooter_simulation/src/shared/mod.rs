//! Shared domain — cross-cutting helpers
//!
//! Содержит:
//! - math (FInterpTo-style интерполяция, нормализация углов, map range)
//! - curve (keyframe curves вместо animation curve assets)

pub mod curve;
pub mod math;

pub use curve::*;
pub use math::*;
