//! Combat controller — state machine стрельбы / reload / equip
//!
//! # Состояния
//! - `Unoccupied` — единственное состояние, где принимаются fire и reload
//! - `FireTimerInProgress` — ждём auto-fire cadence timer
//! - `Equipping` — играет equip montage (ждём `EquipFinished`)
//! - `Reloading` — играет reload montage (ждём `ReloadFinished`)
//!
//! Запросы в занятом состоянии отбрасываются (без очереди).
//! Методы чистые: без ECS доступа, timers тикаются через `tick()`.

use bevy::prelude::*;
use std::time::Duration;

use super::ammo::AmmoReserve;
use super::weapon::Weapon;

/// Состояние combat state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum CombatState {
    #[default]
    Unoccupied,
    FireTimerInProgress,
    Equipping,
    Reloading,
}

/// Почему выстрел не состоялся
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FireRejected {
    #[error("no weapon equipped")]
    NoWeapon,
    #[error("combat state is {0:?}")]
    Busy(CombatState),
    #[error("magazine is empty")]
    EmptyMagazine,
}

/// Почему reload не начался
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReloadRejected {
    #[error("no weapon equipped")]
    NoWeapon,
    #[error("combat state is {0:?}")]
    Busy(CombatState),
    #[error("magazine is already full")]
    MagazineFull,
    #[error("no reserve ammo for this weapon")]
    NoReserveAmmo,
}

/// Что сработало за `tick()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatTimerEvents {
    /// Auto-fire cadence закончился (state уже Unoccupied)
    pub auto_fire_reset: bool,
    /// Montage notify не пришёл вовремя: какое состояние надо завершить
    pub montage_timed_out: Option<CombatState>,
}

/// Combat controller персонажа
#[derive(Component, Debug, Clone, Default)]
pub struct CombatController {
    state: CombatState,

    /// Оружие в руках (entity с `Item` + `Weapon`)
    pub equipped_weapon: Option<Entity>,
    /// Fire button зажата (auto-fire продолжается после reset)
    pub fire_button_pressed: bool,
    /// Aim button зажата (aim возобновляется после reload/equip)
    pub aiming_button_pressed: bool,
    /// Transform магазина, запомненный на GrabClip
    pub clip_transform: Option<Transform>,

    auto_fire_timer: Option<Timer>,
    montage_fallback: Option<Timer>,
}

impl CombatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn is_unoccupied(&self) -> bool {
        self.state == CombatState::Unoccupied
    }

    /// Inventory exchange разрешён в Unoccupied и Equipping
    pub fn can_exchange(&self) -> bool {
        matches!(self.state, CombatState::Unoccupied | CombatState::Equipping)
    }

    /// Выстрел: -1 патрон и старт auto-fire cadence
    pub fn try_fire(&mut self, weapon: Option<&mut Weapon>) -> Result<(), FireRejected> {
        let weapon = weapon.ok_or(FireRejected::NoWeapon)?;

        if self.state != CombatState::Unoccupied {
            return Err(FireRejected::Busy(self.state));
        }
        if !weapon.has_ammo() {
            return Err(FireRejected::EmptyMagazine);
        }

        weapon.decrement_ammo();
        self.state = CombatState::FireTimerInProgress;
        self.auto_fire_timer = Some(Timer::from_seconds(weapon.auto_fire_rate, TimerMode::Once));
        Ok(())
    }

    /// Начать reload; returns секцию reload montage
    pub fn try_reload(
        &mut self,
        weapon: Option<&Weapon>,
        reserve: &AmmoReserve,
        fallback_time: f32,
    ) -> Result<String, ReloadRejected> {
        let weapon = weapon.ok_or(ReloadRejected::NoWeapon)?;

        if self.state != CombatState::Unoccupied {
            return Err(ReloadRejected::Busy(self.state));
        }
        if weapon.clip_is_full() {
            return Err(ReloadRejected::MagazineFull);
        }
        if !reserve.is_carrying(weapon.ammo_type()) {
            return Err(ReloadRejected::NoReserveAmmo);
        }

        self.state = CombatState::Reloading;
        self.montage_fallback = Some(Timer::from_seconds(fallback_time, TimerMode::Once));
        Ok(weapon.reload_section().to_string())
    }

    /// Конец reload montage: перекладываем патроны из запаса в магазин
    ///
    /// Returns сколько патронов зарядили, `None` если reload не шёл.
    pub fn finish_reloading(
        &mut self,
        weapon: Option<&mut Weapon>,
        reserve: &mut AmmoReserve,
    ) -> Option<u32> {
        if self.state != CombatState::Reloading {
            return None;
        }

        self.state = CombatState::Unoccupied;
        self.montage_fallback = None;
        self.clip_transform = None;

        let weapon = weapon?;
        weapon.moving_clip = false;

        let wanted = weapon.missing_rounds();
        let taken = reserve.take(weapon.ammo_type(), wanted);
        Some(weapon.reload_ammo(taken))
    }

    /// GrabClip notify: запомнить transform магазина (только во время reload)
    pub fn grab_clip(&mut self, weapon: Option<&mut Weapon>, clip_transform: Transform) -> bool {
        if self.state != CombatState::Reloading {
            return false;
        }
        let Some(weapon) = weapon else {
            return false;
        };

        self.clip_transform = Some(clip_transform);
        weapon.moving_clip = true;
        true
    }

    /// ReleaseClip notify: магазин вернулся в оружие
    pub fn release_clip(&mut self, weapon: Option<&mut Weapon>) -> bool {
        let Some(weapon) = weapon else {
            return false;
        };

        let was_moving = weapon.moving_clip;
        weapon.moving_clip = false;
        was_moving
    }

    /// Перейти в Equipping (inventory exchange)
    pub fn begin_equipping(&mut self, fallback_time: f32) {
        self.state = CombatState::Equipping;
        self.auto_fire_timer = None;
        self.montage_fallback = Some(Timer::from_seconds(fallback_time, TimerMode::Once));
    }

    /// Конец equip montage; returns true если действительно экипировались
    pub fn finish_equipping(&mut self) -> bool {
        if self.state != CombatState::Equipping {
            return false;
        }

        self.state = CombatState::Unoccupied;
        self.montage_fallback = None;
        true
    }

    /// Тикает cadence и fallback timers
    pub fn tick(&mut self, delta: Duration) -> CombatTimerEvents {
        let mut events = CombatTimerEvents::default();

        if let Some(timer) = self.auto_fire_timer.as_mut() {
            timer.tick(delta);
            if timer.finished() {
                self.auto_fire_timer = None;
                if self.state == CombatState::FireTimerInProgress {
                    self.state = CombatState::Unoccupied;
                    events.auto_fire_reset = true;
                }
            }
        }

        if let Some(timer) = self.montage_fallback.as_mut() {
            timer.tick(delta);
            if timer.finished() {
                self.montage_fallback = None;
                if matches!(self.state, CombatState::Reloading | CombatState::Equipping) {
                    events.montage_timed_out = Some(self.state);
                }
            }
        }

        events
    }

    /// Оставшееся время auto-fire cadence (для HUD / тестов)
    pub fn auto_fire_remaining(&self) -> Option<f32> {
        self.auto_fire_timer.as_ref().map(|timer| timer.remaining_secs())
    }
}
