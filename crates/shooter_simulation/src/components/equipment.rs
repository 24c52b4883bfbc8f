//! Equipment system components
//!
//! # Архитектура
//!
//! **Inventory** — 6 фиксированных слотов (hotkeys F, 1-5):
//! - Слот 0 обычно занят оружием по умолчанию
//! - Хранятся entity предметов (`Item` + `Weapon`)
//! - `highlighted_slot` — слот, подсвеченный в HUD (куда ляжет подбираемое оружие)
//!
//! **InterpAnchors** — точки перед камерой, к которым летят подобранные предметы:
//! - [0] weapon anchor
//! - [1-5] anchors иконок inventory
//! - `item_count` балансирует одновременные pickups между anchors
//!
//! **SoundCooldowns** — pickup/equip звуки не чаще раза в reset time.
//!
//! **ItemTraceState** — overlap counter + item под прицелом.

use bevy::prelude::*;
use std::time::Duration;

use super::character::FollowCamera;

/// Ёмкость inventory
pub const INVENTORY_CAPACITY: usize = 6;

/// Количество interp anchors (weapon + 5 inventory icons)
pub const INTERP_ANCHOR_COUNT: usize = 6;

// ============================================================================
// Inventory
// ============================================================================

/// Inventory персонажа (fixed-capacity упорядоченные слоты)
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<Entity>; INVENTORY_CAPACITY],
    /// Подсвеченный в HUD слот (None = ничего не подсвечено)
    pub highlighted_slot: Option<usize>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Item в слоте
    pub fn get(&self, slot: usize) -> Option<Entity> {
        self.slots.get(slot).copied().flatten()
    }

    /// Положить / очистить слот (индекс вне capacity игнорируется)
    pub fn set(&mut self, slot: usize, item: Option<Entity>) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = item;
        }
    }

    /// Первый свободный слот
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    /// Положить в первый свободный слот; returns индекс слота
    pub fn push(&mut self, item: Entity) -> Option<usize> {
        let slot = self.first_empty_slot()?;
        self.slots[slot] = Some(item);
        Some(slot)
    }

    /// Слот, в котором лежит item
    pub fn slot_of(&self, item: Entity) -> Option<usize> {
        self.slots.iter().position(|entry| *entry == Some(item))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// InterpAnchors
// ============================================================================

/// Anchor: точка в camera space + сколько предметов к ней сейчас летит
#[derive(Debug, Clone, PartialEq)]
pub struct InterpAnchor {
    pub name: String,
    /// Смещение относительно камеры (camera local space, -Z = вперёд)
    pub offset: Vec3,
    pub item_count: u32,
}

/// Таблица interp anchors персонажа (создаётся один раз, не удаляется)
#[derive(Component, Debug, Clone, PartialEq)]
pub struct InterpAnchors {
    anchors: Vec<InterpAnchor>,
}

impl Default for InterpAnchors {
    /// Weapon anchor перед камерой + 5 anchors иконок inventory по нижнему краю экрана
    fn default() -> Self {
        let mut anchors = Vec::with_capacity(INTERP_ANCHOR_COUNT);
        anchors.push(InterpAnchor {
            name: "WeaponInterpComp".to_string(),
            offset: Vec3::new(0.0, -20.0, -150.0),
            item_count: 0,
        });

        for i in 1..INTERP_ANCHOR_COUNT {
            anchors.push(InterpAnchor {
                name: format!("InterpComp{}", i),
                offset: Vec3::new(-80.0 + 40.0 * (i - 1) as f32, -60.0, -200.0),
                item_count: 0,
            });
        }

        Self { anchors }
    }
}

impl InterpAnchors {
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InterpAnchor> {
        self.anchors.get(index)
    }

    /// Индекс anchor'а с минимальным item_count (ничья → меньший индекс)
    pub fn lowest_count_index(&self) -> usize {
        let mut lowest_index = 0;
        let mut lowest_count = u32::MAX;

        for (index, anchor) in self.anchors.iter().enumerate() {
            if anchor.item_count < lowest_count {
                lowest_index = index;
                lowest_count = anchor.item_count;
            }
        }

        lowest_index
    }

    /// Изменить item_count anchor'а (не уходит ниже 0)
    pub fn increment_item_count(&mut self, index: usize, amount: i32) {
        let Some(anchor) = self.anchors.get_mut(index) else {
            return;
        };

        anchor.item_count = anchor.item_count.saturating_add_signed(amount);
    }

    pub fn item_count(&self, index: usize) -> u32 {
        self.anchors.get(index).map(|anchor| anchor.item_count).unwrap_or(0)
    }

    pub fn item_counts(&self) -> Vec<u32> {
        self.anchors.iter().map(|anchor| anchor.item_count).collect()
    }

    /// Мировая позиция anchor'а для текущей камеры
    pub fn world_location(&self, index: usize, camera: &FollowCamera) -> Vec3 {
        let offset = self.anchors.get(index).map(|anchor| anchor.offset).unwrap_or(Vec3::ZERO);
        camera.location + camera.rotation * offset
    }

    /// Выставить item_count всех anchors (тесты / restore)
    pub fn with_item_counts(mut self, counts: &[u32]) -> Self {
        for (anchor, count) in self.anchors.iter_mut().zip(counts) {
            anchor.item_count = *count;
        }
        self
    }
}

// ============================================================================
// SoundCooldowns
// ============================================================================

/// Pickup / equip sound cooldowns
#[derive(Component, Debug, Clone, Default)]
pub struct SoundCooldowns {
    pickup: Option<Timer>,
    equip: Option<Timer>,
}

impl SoundCooldowns {
    pub fn should_play_pickup_sound(&self) -> bool {
        self.pickup.is_none()
    }

    pub fn should_play_equip_sound(&self) -> bool {
        self.equip.is_none()
    }

    pub fn start_pickup_timer(&mut self, reset_time: f32) {
        self.pickup = Some(Timer::from_seconds(reset_time, TimerMode::Once));
    }

    pub fn start_equip_timer(&mut self, reset_time: f32) {
        self.equip = Some(Timer::from_seconds(reset_time, TimerMode::Once));
    }

    pub fn tick(&mut self, delta: Duration) {
        for slot in [&mut self.pickup, &mut self.equip] {
            if let Some(timer) = slot.as_mut() {
                timer.tick(delta);
                if timer.finished() {
                    *slot = None;
                }
            }
        }
    }
}

// ============================================================================
// ItemTraceState
// ============================================================================

/// Overlap counter + результат trace под прицелом
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTraceState {
    overlapped_item_count: u32,
    /// Item под прицелом в этом кадре
    pub trace_hit_item: Option<Entity>,
    /// Item под прицелом в прошлом кадре
    pub trace_hit_item_last_frame: Option<Entity>,
}

impl ItemTraceState {
    pub fn overlapped_item_count(&self) -> u32 {
        self.overlapped_item_count
    }

    /// Trace под прицелом нужен только пока пересекаемся хоть с одним item
    pub fn should_trace_for_items(&self) -> bool {
        self.overlapped_item_count > 0
    }

    pub fn increment_overlapped_item_count(&mut self, amount: i32) {
        self.overlapped_item_count = self.overlapped_item_count.saturating_add_signed(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_slots() {
        let mut inventory = Inventory::empty();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        assert_eq!(inventory.push(a), Some(0));
        assert_eq!(inventory.push(b), Some(1));
        assert_eq!(inventory.slot_of(b), Some(1));

        inventory.set(0, None);
        assert_eq!(inventory.first_empty_slot(), Some(0));
        assert_eq!(inventory.len(), 1);

        for i in 10..20 {
            inventory.push(Entity::from_raw(i));
        }
        assert!(inventory.is_full());
        assert_eq!(inventory.push(Entity::from_raw(99)), None);
    }

    #[test]
    fn test_lowest_count_anchor_tie_breaks_to_lowest_index() {
        let mut anchors = InterpAnchors::default().with_item_counts(&[0, 1, 0, 2, 0, 0]);

        let first = anchors.lowest_count_index();
        assert_eq!(first, 0);
        anchors.increment_item_count(first, 1);

        let second = anchors.lowest_count_index();
        assert_eq!(second, 2);
        anchors.increment_item_count(second, 1);

        assert_eq!(anchors.item_counts(), vec![1, 1, 1, 2, 0, 0]);
    }

    #[test]
    fn test_anchor_count_never_negative() {
        let mut anchors = InterpAnchors::default();
        anchors.increment_item_count(3, -1);
        assert_eq!(anchors.item_count(3), 0);
        // Индекс вне таблицы игнорируется
        anchors.increment_item_count(42, 1);
        assert_eq!(anchors.len(), INTERP_ANCHOR_COUNT);
    }

    #[test]
    fn test_sound_cooldowns() {
        let mut cooldowns = SoundCooldowns::default();
        assert!(cooldowns.should_play_pickup_sound());

        cooldowns.start_pickup_timer(0.2);
        assert!(!cooldowns.should_play_pickup_sound());
        assert!(cooldowns.should_play_equip_sound());

        cooldowns.tick(Duration::from_secs_f32(0.25));
        assert!(cooldowns.should_play_pickup_sound());
    }

    #[test]
    fn test_overlap_counter_clamps_at_zero() {
        let mut trace = ItemTraceState::default();
        trace.increment_overlapped_item_count(1);
        assert!(trace.should_trace_for_items());

        trace.increment_overlapped_item_count(-3);
        assert_eq!(trace.overlapped_item_count(), 0);
        assert!(!trace.should_trace_for_items());
    }
}
