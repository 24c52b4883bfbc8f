//! Item bodies: physics profile → rapier компоненты, бросок оружия, падение
//!
//! Rapier simulation крутит host (RapierPhysicsPlugin). Здесь только зеркалим
//! profile текущего state в компоненты и задаём импульс броска.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::combat::Weapon;
use crate::components::yaw_degrees;
use crate::item_system::{CollisionMode, Item, ItemHighlight, ItemPhysicsProfile, ItemState};

/// Static world geometry
pub const WORLD_STATIC_GROUP: Group = Group::GROUP_1;
/// Предметы
pub const ITEM_GROUP: Group = Group::GROUP_2;
/// Visibility trace (item под прицелом)
pub const VISIBILITY_GROUP: Group = Group::GROUP_3;
/// Персонажи (overlap сфер)
pub const CHARACTER_GROUP: Group = Group::GROUP_4;

/// Collision groups для profile
pub fn item_collision_groups(profile: &ItemPhysicsProfile) -> CollisionGroups {
    let mut filters = Group::NONE;

    if profile.mesh_collision != CollisionMode::NoCollision && profile.mesh_blocks_world_static {
        filters |= WORLD_STATIC_GROUP;
    }
    if profile.collision_box != CollisionMode::NoCollision && profile.collision_box_blocks_visibility {
        filters |= VISIBILITY_GROUP;
    }
    if profile.area_sphere != CollisionMode::NoCollision || profile.ammo_sphere != CollisionMode::NoCollision {
        filters |= CHARACTER_GROUP;
    }

    CollisionGroups::new(ITEM_GROUP, filters)
}

/// Есть ли у profile хоть какая-то коллизия
pub fn has_any_collision(profile: &ItemPhysicsProfile) -> bool {
    [
        profile.mesh_collision,
        profile.area_sphere,
        profile.collision_box,
        profile.ammo_sphere,
    ]
    .iter()
    .any(|mode| *mode != CollisionMode::NoCollision)
}

/// System: Changed<Item> → RigidBody / GravityScale / CollisionGroups / ColliderDisabled
pub fn sync_item_bodies(mut commands: Commands, items: Query<(Entity, &Item), Changed<Item>>) {
    for (entity, item) in items.iter() {
        let profile = item.physics();

        let body = if profile.simulate_physics {
            RigidBody::Dynamic
        } else {
            RigidBody::Fixed
        };
        let gravity = GravityScale(if profile.gravity { 1.0 } else { 0.0 });

        let mut entity_commands = commands.entity(entity);
        entity_commands.insert((body, gravity, item_collision_groups(profile)));

        if has_any_collision(profile) {
            entity_commands.remove::<ColliderDisabled>();
        } else {
            entity_commands.insert(ColliderDisabled);
        }
    }
}

/// Направление и величина импульса броска
///
/// Right вектор (yaw-only ориентация оружия) наклоняется на `tilt_degrees`
/// вокруг forward, затем поворачивается на `yaw_degrees` вокруг вертикали.
pub fn throw_impulse(weapon_rotation: Quat, tilt_degrees: f32, random_yaw_degrees: f32, magnitude: f32) -> Vec3 {
    let flat = Quat::from_rotation_y(yaw_degrees(weapon_rotation).to_radians());
    let forward = flat * Vec3::NEG_Z;
    let right = flat * Vec3::X;

    let tilted = Quat::from_axis_angle(forward, tilt_degrees.to_radians()) * right;
    let direction = Quat::from_rotation_y(random_yaw_degrees.to_radians()) * tilted;

    direction * magnitude
}

/// System: таймер падения брошенного оружия → обратно в Pickup
pub fn tick_weapon_falling(
    mut commands: Commands,
    mut weapons: Query<(Entity, &mut Weapon, &mut Item, &mut ItemHighlight)>,
    time: Res<Time>,
) {
    for (entity, mut weapon, mut item, mut highlight) in weapons.iter_mut() {
        if !weapon.tick_falling(time.delta()) {
            continue;
        }

        commands.entity(entity).remove::<ExternalImpulse>();

        // Подобрали в полёте — state уже не наш
        if item.state() != ItemState::Falling {
            continue;
        }

        item.set_state(ItemState::Pickup);
        highlight.enable_glow();

        crate::logger::log(&format!("🪂 Weapon {:?} landed, back to Pickup", entity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_system::ItemKind;

    #[test]
    fn test_pickup_groups_block_visibility_only_for_box() {
        let profile = ItemPhysicsProfile::for_state(ItemKind::Weapon, ItemState::Pickup);
        let groups = item_collision_groups(&profile);

        assert_eq!(groups.memberships, ITEM_GROUP);
        assert!(groups.filters.contains(VISIBILITY_GROUP));
        assert!(groups.filters.contains(CHARACTER_GROUP));
        assert!(!groups.filters.contains(WORLD_STATIC_GROUP));
    }

    #[test]
    fn test_falling_collides_with_static_world_only() {
        let profile = ItemPhysicsProfile::for_state(ItemKind::Weapon, ItemState::Falling);
        let groups = item_collision_groups(&profile);

        assert_eq!(groups.filters, WORLD_STATIC_GROUP);
        assert!(has_any_collision(&profile));
    }

    #[test]
    fn test_equipped_has_no_collision() {
        let profile = ItemPhysicsProfile::for_state(ItemKind::Weapon, ItemState::Equipped);
        assert!(!has_any_collision(&profile));
        assert_eq!(item_collision_groups(&profile).filters, Group::NONE);
    }

    #[test]
    fn test_throw_impulse_magnitude_and_tilt() {
        let impulse = throw_impulse(Quat::IDENTITY, -20.0, 0.0, 20_000.0);

        assert!((impulse.length() - 20_000.0).abs() < 1.0);
        // Наклон вокруг forward уводит вектор из горизонтали
        assert!(impulse.y.abs() > 1_000.0);
        assert!(impulse.z.abs() < 1e-2);
    }

    #[test]
    fn test_throw_impulse_ignores_weapon_pitch() {
        let pitched = Quat::from_euler(EulerRot::YXZ, 0.3, 1.0, 0.0);
        let flat = Quat::from_rotation_y(0.3);

        let a = throw_impulse(pitched, -20.0, 15.0, 100.0);
        let b = throw_impulse(flat, -20.0, 15.0, 100.0);
        assert!((a - b).length() < 1e-3);
    }
}
