//! Tests for Weapon component.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;

    use super::super::ammo::AmmoType;
    use super::super::weapon::*;

    #[test]
    fn test_weapon_clamps_ammo_to_capacity() {
        let weapon = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 50, 30);
        assert_eq!(weapon.ammo(), 30);
        assert!(weapon.clip_is_full());

        let zero_capacity = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 5, 0);
        assert_eq!(zero_capacity.magazine_capacity(), 1);
        assert_eq!(zero_capacity.ammo(), 1);
    }

    #[test]
    fn test_decrement_ammo_stops_at_zero() {
        let mut weapon = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 1, 30);
        weapon.decrement_ammo();
        assert_eq!(weapon.ammo(), 0);
        assert!(!weapon.has_ammo());

        weapon.decrement_ammo();
        assert_eq!(weapon.ammo(), 0);
    }

    #[test]
    fn test_reload_ammo_never_overfills() {
        let mut weapon = Weapon::new(WeaponType::AssaultRifle, AmmoType::AssaultRifle, 25, 30);
        assert_eq!(weapon.reload_ammo(10), 5);
        assert_eq!(weapon.ammo(), 30);
    }

    #[test]
    fn test_reload_section_depends_on_magazine() {
        let mut weapon = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 0, 30);
        weapon.reload_montage_section = "Reload SMG".into();
        weapon.empty_reload_montage_section = "Reload SMG Empty".into();

        assert_eq!(weapon.reload_section(), "Reload SMG Empty");
        weapon.reload_ammo(3);
        assert_eq!(weapon.reload_section(), "Reload SMG");
    }

    #[test]
    fn test_default_sections_without_catalog_row() {
        let mut weapon = Weapon::new(WeaponType::AssaultRifle, AmmoType::AssaultRifle, 0, 30);
        assert_eq!(weapon.reload_section(), "ReloadEmpty");

        weapon.reload_ammo(1);
        assert_eq!(weapon.reload_section(), "Reload");
    }

    #[test]
    fn test_throw_timer() {
        let mut weapon = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 10, 30);
        assert!(!weapon.tick_falling(Duration::from_secs_f32(1.0)));

        weapon.start_falling(0.7);
        assert!(weapon.is_falling());
        assert!(!weapon.tick_falling(Duration::from_secs_f32(0.5)));
        assert!(weapon.tick_falling(Duration::from_secs_f32(0.3)));
        assert!(!weapon.is_falling());
    }

    #[test]
    fn test_muzzle_location_follows_transform() {
        let mut weapon = Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, 10, 30);
        weapon.muzzle_offset = Vec3::new(0.0, 0.0, -50.0);

        let transform = Transform::from_xyz(100.0, 0.0, 0.0);
        assert_eq!(weapon.muzzle_location(&transform), Vec3::new(100.0, 0.0, -50.0));
    }
}
