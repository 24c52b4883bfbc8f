//! Tests for the animation bridge (turn in place, lean, recoil weight).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::parameters::*;
    use crate::components::CharacterKinematics;
    use crate::config::AnimationTuning;

    fn standing(actor_yaw: f32) -> CharacterKinematics {
        CharacterKinematics {
            actor_yaw,
            ..Default::default()
        }
    }

    fn idle_curves() -> TurnInPlaceCurves {
        TurnInPlaceCurves::default()
    }

    #[test]
    fn test_offset_state_priority() {
        assert_eq!(AimOffsetState::select(true, true, true), AimOffsetState::Reloading);
        assert_eq!(AimOffsetState::select(false, true, true), AimOffsetState::InAir);
        assert_eq!(AimOffsetState::select(false, false, true), AimOffsetState::Aiming);
        assert_eq!(AimOffsetState::select(false, false, false), AimOffsetState::Hip);
    }

    #[test]
    fn test_root_yaw_offset_accumulates_while_standing() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.update(&standing(0.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        params.update(&standing(30.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        assert!((params.root_yaw_offset + 30.0).abs() < 1e-4);

        params.update(&standing(50.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        assert!((params.root_yaw_offset + 50.0).abs() < 1e-4);
        assert!(!params.turning_in_place);
    }

    #[test]
    fn test_root_yaw_offset_wraps_into_half_turn() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.update(&standing(0.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        params.update(&standing(170.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        params.update(&standing(200.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);

        // -200 → 160
        assert!((params.root_yaw_offset - 160.0).abs() < 1e-3);
        assert!(params.root_yaw_offset.abs() <= 180.0);
    }

    #[test]
    fn test_moving_resets_offset() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.update(&standing(0.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        params.update(&standing(45.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        assert!(params.root_yaw_offset != 0.0);

        let moving = CharacterKinematics {
            velocity: Vec3::new(0.0, 0.0, -300.0),
            actor_yaw: 45.0,
            ..Default::default()
        };
        params.update(&moving, CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        assert_eq!(params.root_yaw_offset, 0.0);
        assert!(!params.turning_in_place);

        let airborne = CharacterKinematics {
            in_air: true,
            actor_yaw: 90.0,
            ..Default::default()
        };
        params.update(&airborne, CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        assert_eq!(params.root_yaw_offset, 0.0);
    }

    #[test]
    fn test_turning_curve_reduces_offset_and_clamps() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.update(&standing(0.0), CharacterFlags::default(), &idle_curves(), 0.016, &tuning);
        // Повернулись на -120: offset = +120 (поворот влево)
        let turning = TurnInPlaceCurves {
            turning: 1.0,
            rotation: 10.0,
        };
        params.update(&standing(-120.0), CharacterFlags::default(), &turning, 0.016, &tuning);

        assert!(params.turning_in_place);
        // 120 - 10 = 110 → clamp до 90
        assert!((params.root_yaw_offset - 90.0).abs() < 1e-4);

        let turning = TurnInPlaceCurves {
            turning: 1.0,
            rotation: 40.0,
        };
        params.update(&standing(-120.0), CharacterFlags::default(), &turning, 0.016, &tuning);
        // 90 - (40 - 10) = 60
        assert!((params.root_yaw_offset - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_offset_never_exceeds_max_after_correction() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();
        let turning = TurnInPlaceCurves {
            turning: 1.0,
            rotation: 0.0,
        };

        let mut yaw = 0.0;
        for _ in 0..40 {
            yaw += 17.0;
            params.update(&standing(yaw), CharacterFlags::default(), &turning, 0.016, &tuning);
            assert!(params.root_yaw_offset.abs() <= tuning.max_root_yaw_offset + 1e-4);
        }
    }

    #[test]
    fn test_recoil_weight_rules() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.update_recoil_weight(&tuning);
        assert_eq!(params.recoil_weight, 1.0);

        params.crouching = true;
        params.update_recoil_weight(&tuning);
        assert_eq!(params.recoil_weight, 0.25);

        params.turning_in_place = true;
        params.update_recoil_weight(&tuning);
        assert_eq!(params.recoil_weight, 0.0);

        params.reloading = true;
        params.update_recoil_weight(&tuning);
        assert_eq!(params.recoil_weight, 1.0);
    }

    #[test]
    fn test_lean_follows_turn_rate_and_clamps() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.lean(0.0, 0.1, &tuning);
        // 5° за 0.1 s = 50°/s, шаг 0.1 * 6 = 60% пути
        params.lean(5.0, 0.1, &tuning);
        assert!((params.yaw_delta - 30.0).abs() < 1e-3);

        for _ in 0..20 {
            let yaw = params.yaw_delta;
            params.lean(yaw + 170.0, 0.1, &tuning);
        }
        assert!(params.yaw_delta <= tuning.lean_clamp);
    }

    #[test]
    fn test_lean_ignores_zero_delta() {
        let tuning = AnimationTuning::default();
        let mut params = AnimationParameters::default();

        params.lean(90.0, 0.0, &tuning);
        assert_eq!(params.yaw_delta, 0.0);
        assert!(params.yaw_delta.is_finite());
    }

    #[test]
    fn test_movement_offset_yaw_and_last_offset() {
        let mut params = AnimationParameters::default();

        // Движемся вправо (+X), прицел вперёд (-Z)
        let strafing = CharacterKinematics {
            velocity: Vec3::new(300.0, 0.0, 0.0),
            aim_yaw: 0.0,
            ..Default::default()
        };
        params.update_locomotion(&strafing, CharacterFlags::default());
        assert!((params.movement_offset_yaw.abs() - 90.0).abs() < 1e-3);
        let strafe_offset = params.movement_offset_yaw;

        params.update_locomotion(&CharacterKinematics::default(), CharacterFlags::default());
        assert_eq!(params.speed, 0.0);
        assert_eq!(params.last_movement_offset_yaw, strafe_offset);
    }
}
