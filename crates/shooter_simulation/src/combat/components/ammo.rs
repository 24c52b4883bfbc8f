//! Ammo: тип патронов, запас персонажа, ammo pickup item.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Тип патронов (ключ `AmmoReserve` и поле `Weapon`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub enum AmmoType {
    /// 9mm (SMG)
    NineMm,
    /// Assault rifle
    AssaultRifle,
}

impl AmmoType {
    pub const ALL: [AmmoType; 2] = [AmmoType::NineMm, AmmoType::AssaultRifle];
}

/// Запас патронов персонажа по типам
///
/// Инвариант: набор ключей фиксируется при создании, значения ≥ 0 (u32).
/// Reload только перекладывает патроны отсюда в магазин.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct AmmoReserve {
    carried: HashMap<AmmoType, u32>,
}

impl Default for AmmoReserve {
    /// Стартовый запас по умолчанию: 85 × 9mm, 120 × AR
    fn default() -> Self {
        Self::starting(85, 120)
    }
}

impl AmmoReserve {
    /// Создать запас с фиксированным набором типов
    pub fn new(initial: impl IntoIterator<Item = (AmmoType, u32)>) -> Self {
        Self {
            carried: initial.into_iter().collect(),
        }
    }

    /// Стартовый запас из tuning (9mm + AR)
    pub fn starting(nine_mm: u32, assault_rifle: u32) -> Self {
        Self::new([(AmmoType::NineMm, nine_mm), (AmmoType::AssaultRifle, assault_rifle)])
    }

    /// Сколько патронов типа несём (0 если тип не отслеживается)
    pub fn carried(&self, ammo_type: AmmoType) -> u32 {
        self.carried.get(&ammo_type).copied().unwrap_or(0)
    }

    pub fn tracks(&self, ammo_type: AmmoType) -> bool {
        self.carried.contains_key(&ammo_type)
    }

    /// Есть хотя бы один патрон типа
    pub fn is_carrying(&self, ammo_type: AmmoType) -> bool {
        self.carried(ammo_type) > 0
    }

    /// Добавить патроны (ammo pickup). Неизвестный тип игнорируется.
    ///
    /// Returns новый запас или `None` если тип не отслеживается.
    pub fn add(&mut self, ammo_type: AmmoType, count: u32) -> Option<u32> {
        let carried = self.carried.get_mut(&ammo_type)?;
        *carried = carried.saturating_add(count);
        Some(*carried)
    }

    /// Забрать до `amount` патронов; returns сколько реально забрали
    pub fn take(&mut self, ammo_type: AmmoType, amount: u32) -> u32 {
        let Some(carried) = self.carried.get_mut(&ammo_type) else {
            return 0;
        };

        let taken = amount.min(*carried);
        *carried -= taken;
        taken
    }
}

/// Ammo pickup item (side component рядом с `Item`, kind = Ammo)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AmmoPickup {
    pub ammo_type: AmmoType,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_add_and_take() {
        let mut reserve = AmmoReserve::starting(10, 0);

        assert_eq!(reserve.add(AmmoType::NineMm, 5), Some(15));
        assert_eq!(reserve.take(AmmoType::NineMm, 20), 15);
        assert_eq!(reserve.carried(AmmoType::NineMm), 0);
        assert!(!reserve.is_carrying(AmmoType::NineMm));
    }

    #[test]
    fn test_reserve_keys_are_fixed() {
        let mut reserve = AmmoReserve::new([(AmmoType::NineMm, 3)]);

        assert_eq!(reserve.add(AmmoType::AssaultRifle, 30), None);
        assert!(!reserve.tracks(AmmoType::AssaultRifle));
        assert_eq!(reserve.take(AmmoType::AssaultRifle, 5), 0);
    }
}
