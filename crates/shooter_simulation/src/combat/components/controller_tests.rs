//! Tests for CombatController state machine.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;

    use super::super::ammo::{AmmoReserve, AmmoType};
    use super::super::controller::*;
    use super::super::weapon::{Weapon, WeaponType};

    fn smg(ammo: u32) -> Weapon {
        Weapon::new(WeaponType::SubmachineGun, AmmoType::NineMm, ammo, 30)
    }

    #[test]
    fn test_fire_decrements_ammo_and_starts_cadence() {
        let mut controller = CombatController::new();
        let mut weapon = smg(5);

        assert_eq!(controller.try_fire(Some(&mut weapon)), Ok(()));
        assert_eq!(weapon.ammo(), 4);
        assert_eq!(controller.state(), CombatState::FireTimerInProgress);
        assert!(controller.auto_fire_remaining().is_some());
    }

    #[test]
    fn test_fire_rejected_outside_unoccupied() {
        let mut controller = CombatController::new();
        let mut weapon = smg(5);

        controller.try_fire(Some(&mut weapon)).unwrap();
        assert_eq!(
            controller.try_fire(Some(&mut weapon)),
            Err(FireRejected::Busy(CombatState::FireTimerInProgress))
        );
        // Второй запрос не тронул магазин
        assert_eq!(weapon.ammo(), 4);
    }

    #[test]
    fn test_fire_rejected_on_empty_magazine_or_no_weapon() {
        let mut controller = CombatController::new();
        let mut weapon = smg(0);

        assert_eq!(controller.try_fire(Some(&mut weapon)), Err(FireRejected::EmptyMagazine));
        assert_eq!(controller.try_fire(None), Err(FireRejected::NoWeapon));
        assert_eq!(controller.state(), CombatState::Unoccupied);
        assert_eq!(weapon.ammo(), 0);
    }

    #[test]
    fn test_auto_fire_reset_after_cadence() {
        let mut controller = CombatController::new();
        let mut weapon = smg(5);
        weapon.auto_fire_rate = 0.1;

        controller.try_fire(Some(&mut weapon)).unwrap();
        let events = controller.tick(Duration::from_secs_f32(0.05));
        assert!(!events.auto_fire_reset);
        assert_eq!(controller.state(), CombatState::FireTimerInProgress);

        let events = controller.tick(Duration::from_secs_f32(0.06));
        assert!(events.auto_fire_reset);
        assert_eq!(controller.state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_reload_empty_magazine_with_partial_reserve() {
        let mut controller = CombatController::new();
        let mut weapon = smg(0);
        let mut reserve = AmmoReserve::starting(10, 0);

        let section = controller.try_reload(Some(&weapon), &reserve, 3.0).unwrap();
        assert_eq!(section, weapon.empty_reload_montage_section);
        assert_eq!(controller.state(), CombatState::Reloading);

        let loaded = controller.finish_reloading(Some(&mut weapon), &mut reserve);
        assert_eq!(loaded, Some(10));
        assert_eq!(weapon.ammo(), 10);
        assert_eq!(reserve.carried(AmmoType::NineMm), 0);
        assert_eq!(controller.state(), CombatState::Unoccupied);
    }

    #[test]
    fn test_reload_rejected_without_reserve() {
        let mut controller = CombatController::new();
        let weapon = smg(0);
        let reserve = AmmoReserve::starting(0, 50);

        assert_eq!(
            controller.try_reload(Some(&weapon), &reserve, 3.0),
            Err(ReloadRejected::NoReserveAmmo)
        );
        assert_eq!(controller.state(), CombatState::Unoccupied);
        assert_eq!(weapon.ammo(), 0);
    }

    #[test]
    fn test_reload_rejected_when_full_or_busy() {
        let mut controller = CombatController::new();
        let mut weapon = smg(30);
        let reserve = AmmoReserve::starting(10, 0);

        assert_eq!(
            controller.try_reload(Some(&weapon), &reserve, 3.0),
            Err(ReloadRejected::MagazineFull)
        );

        weapon.decrement_ammo();
        controller.try_reload(Some(&weapon), &reserve, 3.0).unwrap();
        assert_eq!(
            controller.try_reload(Some(&weapon), &reserve, 3.0),
            Err(ReloadRejected::Busy(CombatState::Reloading))
        );
    }

    #[test]
    fn test_reload_conserves_total_ammo() {
        for (ammo, carried) in [(0, 10), (12, 100), (29, 1), (5, 3)] {
            let mut controller = CombatController::new();
            let mut weapon = smg(ammo);
            let mut reserve = AmmoReserve::starting(carried, 0);
            let total = ammo + carried;

            controller.try_reload(Some(&weapon), &reserve, 3.0).unwrap();
            controller.finish_reloading(Some(&mut weapon), &mut reserve);

            assert_eq!(weapon.ammo() + reserve.carried(AmmoType::NineMm), total);
            assert!(weapon.ammo() <= weapon.magazine_capacity());
        }
    }

    #[test]
    fn test_finish_reloading_ignored_when_not_reloading() {
        let mut controller = CombatController::new();
        let mut weapon = smg(0);
        let mut reserve = AmmoReserve::starting(10, 0);

        assert_eq!(controller.finish_reloading(Some(&mut weapon), &mut reserve), None);
        assert_eq!(weapon.ammo(), 0);
        assert_eq!(reserve.carried(AmmoType::NineMm), 10);
    }

    #[test]
    fn test_clip_notifies_only_during_reload() {
        let mut controller = CombatController::new();
        let mut weapon = smg(3);
        let reserve = AmmoReserve::starting(10, 0);
        let clip = Transform::from_xyz(1.0, 2.0, 3.0);

        assert!(!controller.grab_clip(Some(&mut weapon), clip));

        controller.try_reload(Some(&weapon), &reserve, 3.0).unwrap();
        assert!(controller.grab_clip(Some(&mut weapon), clip));
        assert!(weapon.moving_clip);
        assert_eq!(controller.clip_transform, Some(clip));

        assert!(controller.release_clip(Some(&mut weapon)));
        assert!(!weapon.moving_clip);
    }

    #[test]
    fn test_montage_fallback_times_out() {
        let mut controller = CombatController::new();
        let weapon = smg(3);
        let reserve = AmmoReserve::starting(10, 0);

        controller.try_reload(Some(&weapon), &reserve, 1.0).unwrap();
        assert_eq!(controller.tick(Duration::from_secs_f32(0.5)).montage_timed_out, None);
        assert_eq!(
            controller.tick(Duration::from_secs_f32(0.6)).montage_timed_out,
            Some(CombatState::Reloading)
        );
        // Fallback не меняет state сам — completion делает система
        assert_eq!(controller.state(), CombatState::Reloading);
    }

    #[test]
    fn test_equipping_cycle() {
        let mut controller = CombatController::new();
        assert!(controller.can_exchange());
        assert!(!controller.finish_equipping());

        controller.begin_equipping(3.0);
        assert_eq!(controller.state(), CombatState::Equipping);
        assert!(controller.can_exchange());

        let mut weapon = smg(5);
        assert_eq!(
            controller.try_fire(Some(&mut weapon)),
            Err(FireRejected::Busy(CombatState::Equipping))
        );

        assert!(controller.finish_equipping());
        assert!(controller.is_unoccupied());
    }
}
