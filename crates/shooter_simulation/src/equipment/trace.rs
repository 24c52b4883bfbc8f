//! Item trace под прицелом: pickup widget, outline, подсветка свободного слота
//!
//! Trace идёт только пока персонаж стоит внутри area sphere хотя бы одного item'а.

use bevy::prelude::*;

use crate::combat::Weapon;
use crate::components::{FollowCamera, Inventory, ItemTraceState, Shooter, SoundCooldowns};
use crate::config::ShooterTuning;
use crate::equipment::{HighlightIconChanged, ItemOverlap};
use crate::item_system::{Item, ItemHighlight, ItemState};
use crate::physics::PhysicsQueries;

/// Отрезок trace из камеры через центр экрана
pub fn crosshair_trace_segment(camera: &FollowCamera, distance: f32) -> (Vec3, Vec3) {
    (camera.location, camera.location + camera.forward() * distance)
}

/// System: overlap area sphere → счётчик пересечённых item'ов
pub fn track_item_overlaps(
    mut overlaps: EventReader<ItemOverlap>,
    mut characters: Query<&mut ItemTraceState, With<Shooter>>,
) {
    for overlap in overlaps.read() {
        let Ok(mut trace) = characters.get_mut(overlap.character) else {
            continue;
        };
        trace.increment_overlapped_item_count(if overlap.began { 1 } else { -1 });
    }
}

/// System: тикает pickup / equip sound cooldowns
pub fn tick_sound_cooldowns(time: Res<Time>, mut characters: Query<&mut SoundCooldowns>) {
    for mut cooldowns in characters.iter_mut() {
        cooldowns.tick(time.delta());
    }
}

fn hide_highlight(highlight: &mut ItemHighlight) {
    highlight.pickup_widget_visible = false;
    highlight.disable_custom_depth();
}

/// System: trace под прицелом → widget / outline / inventory slot highlight
pub fn trace_for_items(
    mut characters: Query<(Entity, &mut ItemTraceState, &mut Inventory, &FollowCamera), With<Shooter>>,
    mut items: Query<(&mut Item, &mut ItemHighlight, Has<Weapon>), Without<Shooter>>,
    physics: Res<PhysicsQueries>,
    tuning: Res<ShooterTuning>,
    mut highlight_icons: EventWriter<HighlightIconChanged>,
) {
    for (character, mut trace, mut inventory, camera) in characters.iter_mut() {
        if !trace.should_trace_for_items() {
            // Вышли из всех sphere: гасим то, что светилось в прошлом кадре
            if let Some(last) = trace.trace_hit_item_last_frame.take() {
                if let Ok((_, mut highlight, _)) = items.get_mut(last) {
                    hide_highlight(&mut highlight);
                }
            }
            trace.trace_hit_item = None;
            if let Some(slot) = inventory.highlighted_slot.take() {
                highlight_icons.write(HighlightIconChanged {
                    character,
                    slot,
                    highlighted: false,
                });
            }
            continue;
        }

        let (start, end) = crosshair_trace_segment(camera, tuning.crosshair.trace_distance);
        let hit_item = physics
            .line_trace(start, end)
            .and_then(|hit| hit.entity)
            .filter(|entity| items.contains(*entity));

        let hit_weapon = hit_item
            .and_then(|entity| items.get(entity).ok())
            .is_some_and(|(_, _, is_weapon)| is_weapon);

        if hit_weapon {
            if inventory.highlighted_slot.is_none() {
                if let Some(slot) = inventory.first_empty_slot() {
                    inventory.highlighted_slot = Some(slot);
                    highlight_icons.write(HighlightIconChanged {
                        character,
                        slot,
                        highlighted: true,
                    });
                }
            }
        } else if let Some(slot) = inventory.highlighted_slot.take() {
            highlight_icons.write(HighlightIconChanged {
                character,
                slot,
                highlighted: false,
            });
        }

        // Летящий к персонажу item не выделяем
        let hit_item = hit_item.filter(|entity| {
            items
                .get(*entity)
                .is_ok_and(|(item, _, _)| item.state() != ItemState::EquipInterping)
        });

        if let Some(entity) = hit_item {
            if let Ok((mut item, mut highlight, _)) = items.get_mut(entity) {
                highlight.pickup_widget_visible = true;
                highlight.enable_custom_depth();
                item.character_inventory_full = inventory.is_full();
            }
        }

        if let Some(last) = trace.trace_hit_item_last_frame {
            if Some(last) != hit_item {
                if let Ok((_, mut highlight, _)) = items.get_mut(last) {
                    hide_highlight(&mut highlight);
                }
            }
        }

        trace.trace_hit_item = hit_item;
        trace.trace_hit_item_last_frame = hit_item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosshair_trace_follows_camera_forward() {
        let camera = FollowCamera {
            location: Vec3::new(0.0, 100.0, 0.0),
            rotation: Quat::IDENTITY,
            fov: 90.0,
        };

        let (start, end) = crosshair_trace_segment(&camera, 1000.0);
        assert_eq!(start, camera.location);
        assert!((end - (camera.location + camera.forward() * 1000.0)).length() < 1e-3);
    }

    #[test]
    fn test_hide_highlight_respects_lock() {
        let mut highlight = ItemHighlight::default();
        highlight.pickup_widget_visible = true;
        highlight.enable_custom_depth();
        highlight.lock_custom_depth();

        hide_highlight(&mut highlight);
        assert!(!highlight.pickup_widget_visible);
        // Outline заморожен
        assert!(highlight.custom_depth_enabled());
    }
}
