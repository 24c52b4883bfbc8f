//! Item pulse: material parameters по pulse curve
//!
//! Pickup — looping pulse timer (`pulse_curve_time`),
//! EquipInterping — interp pulse curve по elapsed полёта.

use bevy::prelude::*;

use super::components::{Item, ItemMaterial, ItemPulse, ItemState};
use super::interp::{ItemCurves, ItemInterp};
use crate::config::ShooterTuning;

/// Material parameters для pulse sample (множители к базовым значениям)
pub fn pulse_material(sample: Vec3, tuning: &ShooterTuning) -> ItemMaterial {
    ItemMaterial {
        glow_amount: sample.x * tuning.item.glow_amount,
        fresnel_exponent: sample.y * tuning.item.fresnel_exponent,
        fresnel_reflect_fraction: sample.z * tuning.item.fresnel_reflect_fraction,
    }
}

/// System: pulse timer в Pickup стартует / тикает, вне Pickup — очищается
pub fn tick_item_pulse(
    mut items: Query<(&Item, &mut ItemPulse)>,
    tuning: Res<ShooterTuning>,
    time: Res<Time>,
) {
    for (item, mut pulse) in items.iter_mut() {
        match item.state() {
            ItemState::Pickup => {
                if !pulse.is_active() {
                    pulse.start(tuning.item.pulse_curve_time);
                }
                pulse.tick(time.delta());
            }
            _ => {
                if pulse.is_active() {
                    pulse.clear();
                }
            }
        }
    }
}

/// System: пересчёт material parameters
pub fn update_item_pulse(
    mut items: Query<(&Item, &ItemPulse, Option<&ItemInterp>, &mut ItemMaterial)>,
    curves: Res<ItemCurves>,
    tuning: Res<ShooterTuning>,
) {
    for (item, pulse, interp, mut material) in items.iter_mut() {
        let sample = match item.state() {
            ItemState::Pickup => {
                let (Some(curve), Some(elapsed)) = (curves.pulse_curve.as_ref(), pulse.elapsed_secs()) else {
                    continue;
                };
                curve.sample(elapsed)
            }
            ItemState::EquipInterping => {
                let (Some(curve), Some(interp)) = (curves.interp_pulse_curve.as_ref(), interp) else {
                    continue;
                };
                curve.sample(interp.elapsed_secs())
            }
            _ => continue,
        };

        let updated = pulse_material(sample, &tuning);
        if *material != updated {
            *material = updated;
        }
    }
}
