//! Item interpolation: полёт подобранного предмета к anchor перед камерой
//!
//! # Flow
//! 1. `StartItemCurve` → anchor с минимальным count, count += 1, state = EquipInterping
//! 2. `update_item_interp` каждый кадр: X/Z — exponential interp к anchor,
//!    Y — start.y + z_curve(elapsed) * |Δy|, yaw = yaw камеры + замороженный offset
//! 3. Таймер `z_curve_time` истёк → `finish_item_interp`: count -= 1, scale = 1,
//!    outline/glow выключены, `ItemPickupCompleted` → pickup routing
//!
//! Без персонажа полёт и звук молча пропускаются.

use bevy::prelude::*;

use super::components::{Item, ItemHighlight, ItemKind, ItemPresentation, ItemPulse, ItemState};
use super::events::{ItemPickupCompleted, PlaySound, StartItemCurve};
use crate::components::{yaw_degrees, FollowCamera, InterpAnchors, Shooter, SoundCooldowns};
use crate::config::ShooterTuning;
use crate::shared::{finterp_to, FloatCurve, VectorCurve};

/// Активный полёт item'а (наличие компонента = "interping")
#[derive(Component, Debug, Clone)]
pub struct ItemInterp {
    pub character: Entity,
    pub anchor_index: usize,
    pub start_location: Vec3,
    /// Yaw item'а относительно камеры на старте (градусы)
    pub initial_yaw_offset: f32,
    timer: Timer,
}

impl ItemInterp {
    pub fn new(character: Entity, anchor_index: usize, start_location: Vec3, initial_yaw_offset: f32, duration: f32) -> Self {
        Self {
            character,
            anchor_index,
            start_location,
            initial_yaw_offset,
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.timer.elapsed_secs()
    }

    pub fn is_finished(&self) -> bool {
        self.timer.finished()
    }
}

/// Curves полёта и pulse (общие для всех предметов)
#[derive(Resource, Debug, Clone)]
pub struct ItemCurves {
    /// Нормализованная высота по времени полёта
    pub z_curve: Option<FloatCurve>,
    /// Масштаб во время полёта (None = не масштабируем)
    pub scale_curve: Option<FloatCurve>,
    /// Pulse в Pickup: (glow, fresnel exponent, fresnel reflect) множители
    pub pulse_curve: Option<VectorCurve>,
    /// Pulse во время полёта
    pub interp_pulse_curve: Option<VectorCurve>,
}

impl Default for ItemCurves {
    fn default() -> Self {
        Self {
            z_curve: Some(FloatCurve::new([(0.0, 0.0), (0.35, 1.4), (0.7, 1.0)])),
            scale_curve: Some(FloatCurve::new([(0.0, 1.0), (0.5, 1.0), (0.7, 0.6)])),
            pulse_curve: Some(VectorCurve::new(
                FloatCurve::new([(0.0, 1.0), (2.5, 1.5), (5.0, 1.0)]),
                FloatCurve::new([(0.0, 1.0), (2.5, 0.5), (5.0, 1.0)]),
                FloatCurve::new([(0.0, 1.0), (2.5, 1.2), (5.0, 1.0)]),
            )),
            interp_pulse_curve: Some(VectorCurve::new(
                FloatCurve::new([(0.0, 1.0), (0.7, 4.0)]),
                FloatCurve::new([(0.0, 1.0), (0.7, 0.2)]),
                FloatCurve::new([(0.0, 1.0), (0.7, 2.0)]),
            )),
        }
    }
}

/// Anchor, к которому реально летит item: оружие всегда к weapon anchor (0)
pub fn flight_anchor_index(kind: ItemKind, anchor_index: usize) -> usize {
    match kind {
        ItemKind::Weapon => 0,
        ItemKind::Ammo => anchor_index,
    }
}

/// Позиция item'а на кадре полёта
///
/// `curve_value` — z curve в момент elapsed; `current` — позиция прошлого кадра.
pub fn interp_location(current: Vec3, start: Vec3, target: Vec3, curve_value: f32, delta: f32, speed: f32) -> Vec3 {
    let delta_y = (target.y - start.y).abs();
    Vec3::new(
        finterp_to(current.x, target.x, delta, speed),
        start.y + curve_value * delta_y,
        finterp_to(current.z, target.z, delta, speed),
    )
}

/// System: StartItemCurve → выбор anchor + старт полёта
pub fn start_item_curves(
    mut commands: Commands,
    mut events: EventReader<StartItemCurve>,
    mut characters: Query<(&mut InterpAnchors, &mut SoundCooldowns, &FollowCamera), With<Shooter>>,
    mut items: Query<
        (&mut Item, &Transform, &mut ItemPulse, &mut ItemHighlight, Option<&ItemPresentation>),
        Without<Shooter>,
    >,
    tuning: Res<ShooterTuning>,
    mut sounds: EventWriter<PlaySound>,
) {
    for event in events.read() {
        let Ok((mut item, transform, mut pulse, mut highlight, presentation)) = items.get_mut(event.item) else {
            continue;
        };

        // Уже летит / в руках — повторный старт сломал бы счётчики anchors
        if !matches!(item.state(), ItemState::Pickup | ItemState::Falling) {
            crate::logger::log(&format!(
                "⚠️ StartItemCurve ignored: {:?} is {:?}",
                event.item,
                item.state()
            ));
            continue;
        }

        let Ok((mut anchors, mut cooldowns, camera)) = characters.get_mut(event.character) else {
            continue;
        };

        let anchor_index = anchors.lowest_count_index();
        anchors.increment_item_count(anchor_index, 1);

        let pickup_sound = presentation.and_then(|p| p.pickup_sound.clone());
        if event.force_play_sound {
            if let Some(sound) = pickup_sound {
                sounds.write(PlaySound { sound, source: Some(event.item) });
            }
        } else if cooldowns.should_play_pickup_sound() {
            cooldowns.start_pickup_timer(tuning.item.pickup_sound_reset_time);
            if let Some(sound) = pickup_sound {
                sounds.write(PlaySound { sound, source: Some(event.item) });
            }
        }

        item.character = Some(event.character);
        item.set_state(ItemState::EquipInterping);
        pulse.clear();
        highlight.lock_custom_depth();

        let initial_yaw_offset = yaw_degrees(transform.rotation) - camera.yaw_degrees();

        commands.entity(event.item).insert(ItemInterp::new(
            event.character,
            anchor_index,
            transform.translation,
            initial_yaw_offset,
            tuning.item.z_curve_time,
        ));

        crate::logger::log(&format!(
            "🎯 Item {:?} ({}) → anchor {} of {:?}",
            event.item, item.name, anchor_index, event.character
        ));
    }
}

/// System: кадр полёта
pub fn update_item_interp(
    mut items: Query<(&mut ItemInterp, &Item, &mut Transform), Without<Shooter>>,
    characters: Query<(&InterpAnchors, &FollowCamera), With<Shooter>>,
    curves: Res<ItemCurves>,
    tuning: Res<ShooterTuning>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (mut interp, item, mut transform) in items.iter_mut() {
        interp.timer.tick(time.delta());

        let Ok((anchors, camera)) = characters.get(interp.character) else {
            continue;
        };
        let Some(z_curve) = curves.z_curve.as_ref() else {
            continue;
        };

        let elapsed = interp.elapsed_secs();
        let target = anchors.world_location(flight_anchor_index(item.kind(), interp.anchor_index), camera);

        transform.translation = interp_location(
            transform.translation,
            interp.start_location,
            target,
            z_curve.sample(elapsed),
            delta,
            tuning.item.interp_speed,
        );

        // Yaw камеры + offset: item не крутится в полёте
        let yaw = camera.yaw_degrees() + interp.initial_yaw_offset;
        transform.rotation = Quat::from_rotation_y(yaw.to_radians());

        if let Some(scale_curve) = curves.scale_curve.as_ref() {
            transform.scale = Vec3::splat(scale_curve.sample(elapsed));
        }
    }
}

/// System: таймер полёта истёк → освобождаем anchor, отдаём item персонажу
pub fn finish_item_interp(
    mut commands: Commands,
    mut items: Query<(Entity, &ItemInterp, &mut Transform, &mut ItemHighlight), Without<Shooter>>,
    mut characters: Query<&mut InterpAnchors, With<Shooter>>,
    mut completed: EventWriter<ItemPickupCompleted>,
) {
    for (entity, interp, mut transform, mut highlight) in items.iter_mut() {
        if !interp.is_finished() {
            continue;
        }

        commands.entity(entity).remove::<ItemInterp>();
        transform.scale = Vec3::ONE;

        highlight.unlock_custom_depth();
        highlight.disable_glow();
        highlight.disable_custom_depth();

        let Ok(mut anchors) = characters.get_mut(interp.character) else {
            continue;
        };

        anchors.increment_item_count(interp.anchor_index, -1);
        completed.write(ItemPickupCompleted {
            item: entity,
            character: interp.character,
        });
    }
}
