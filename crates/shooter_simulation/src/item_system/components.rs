//! Item components: lifecycle state, rarity, physics profile, highlight, pulse
//!
//! `Item` — общий компонент для всех предметов в мире.
//! Kind-specific данные лежат в side components (`Weapon`, `AmmoPickup`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle предмета
///
/// `Pickup → EquipInterping → PickedUp → Equipped`,
/// `Pickup ↔ Falling` (бросок / spawn в воздухе), `Equipped → Falling` (drop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum ItemState {
    #[default]
    Pickup,
    EquipInterping,
    PickedUp,
    Equipped,
    Falling,
}

/// Kind предмета (ключ к side component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Ammo,
}

/// Редкость: количество звёзд и цвета из rarity row каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub enum ItemRarity {
    Damaged,
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Размер массива звёзд (элемент 0 не используется)
pub const STAR_SLOTS: usize = 6;

impl ItemRarity {
    pub const ALL: [ItemRarity; 5] = [
        ItemRarity::Damaged,
        ItemRarity::Common,
        ItemRarity::Uncommon,
        ItemRarity::Rare,
        ItemRarity::Legendary,
    ];

    /// Damaged = 1 ... Legendary = 5
    pub fn number_of_stars(self) -> usize {
        match self {
            ItemRarity::Damaged => 1,
            ItemRarity::Common => 2,
            ItemRarity::Uncommon => 3,
            ItemRarity::Rare => 4,
            ItemRarity::Legendary => 5,
        }
    }

    /// Активные звёзды для HUD (индекс 0 всегда false)
    pub fn active_stars(self) -> [bool; STAR_SLOTS] {
        let mut stars = [false; STAR_SLOTS];
        for star in stars.iter_mut().skip(1).take(self.number_of_stars()) {
            *star = true;
        }
        stars
    }
}

// ============================================================================
// Physics profile
// ============================================================================

/// Режим коллизии примитива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CollisionMode {
    NoCollision,
    QueryOnly,
    QueryAndPhysics,
}

/// Физика / коллизии / видимость предмета для конкретного state
///
/// Это часть состояния: меняется ТОЛЬКО вместе со state через `Item::set_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct ItemPhysicsProfile {
    pub mesh_visible: bool,
    pub simulate_physics: bool,
    pub gravity: bool,
    pub mesh_collision: CollisionMode,
    /// Mesh блокирует только static world (падение на пол)
    pub mesh_blocks_world_static: bool,
    /// Area sphere (overlap с персонажем → pickup widget)
    pub area_sphere: CollisionMode,
    pub collision_box: CollisionMode,
    /// Collision box блокирует visibility trace (item под прицелом)
    pub collision_box_blocks_visibility: bool,
    /// Ammo sphere (автоподбор патронов)
    pub ammo_sphere: CollisionMode,
    pub hide_pickup_widget: bool,
}

impl ItemPhysicsProfile {
    const INERT: Self = Self {
        mesh_visible: true,
        simulate_physics: false,
        gravity: false,
        mesh_collision: CollisionMode::NoCollision,
        mesh_blocks_world_static: false,
        area_sphere: CollisionMode::NoCollision,
        collision_box: CollisionMode::NoCollision,
        collision_box_blocks_visibility: false,
        ammo_sphere: CollisionMode::NoCollision,
        hide_pickup_widget: true,
    };

    /// Bundle для state (+ kind-specific ammo sphere)
    pub fn for_state(kind: ItemKind, state: ItemState) -> Self {
        match state {
            ItemState::Pickup => Self {
                area_sphere: CollisionMode::QueryOnly,
                collision_box: CollisionMode::QueryAndPhysics,
                collision_box_blocks_visibility: true,
                ammo_sphere: match kind {
                    ItemKind::Ammo => CollisionMode::QueryOnly,
                    ItemKind::Weapon => CollisionMode::NoCollision,
                },
                hide_pickup_widget: false,
                ..Self::INERT
            },
            ItemState::Equipped | ItemState::EquipInterping => Self::INERT,
            ItemState::PickedUp => Self {
                mesh_visible: false,
                ..Self::INERT
            },
            ItemState::Falling => Self {
                simulate_physics: true,
                gravity: true,
                mesh_collision: CollisionMode::QueryAndPhysics,
                mesh_blocks_world_static: true,
                hide_pickup_widget: false,
                ..Self::INERT
            },
        }
    }
}

// ============================================================================
// Item
// ============================================================================

/// Предмет в мире
///
/// Инвариант: `physics == ItemPhysicsProfile::for_state(kind, state)` всегда.
#[derive(Component, Debug, Clone)]
#[require(Transform, ItemHighlight, ItemPulse, ItemMaterial)]
pub struct Item {
    pub name: String,
    kind: ItemKind,
    state: ItemState,
    physics: ItemPhysicsProfile,

    pub rarity: ItemRarity,
    /// Для ammo = количество патронов, для оружия = 1
    pub item_count: u32,
    /// Слот в inventory персонажа
    pub slot_index: Option<usize>,
    /// Персонаж, к которому летит / у которого в руках (слабая ссылка)
    pub character: Option<Entity>,
    /// Inventory того, кто смотрит на item, полон (HUD widget)
    pub character_inventory_full: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, rarity: ItemRarity) -> Self {
        Self::with_state(name, kind, rarity, ItemState::Pickup)
    }

    pub fn with_state(name: impl Into<String>, kind: ItemKind, rarity: ItemRarity, state: ItemState) -> Self {
        Self {
            name: name.into(),
            kind,
            state,
            physics: ItemPhysicsProfile::for_state(kind, state),
            rarity,
            item_count: 1,
            slot_index: None,
            character: None,
            character_inventory_full: false,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn physics(&self) -> &ItemPhysicsProfile {
        &self.physics
    }

    /// Единственный способ сменить state: заодно пере-применяет physics profile
    pub fn set_state(&mut self, state: ItemState) {
        self.state = state;
        self.physics = ItemPhysicsProfile::for_state(self.kind, state);
    }

    pub fn is_interping(&self) -> bool {
        self.state == ItemState::EquipInterping
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Presentation данные из каталога (rarity row + weapon row), резолвятся при spawn
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ItemPresentation {
    pub active_stars: [bool; STAR_SLOTS],
    pub glow_color: [f32; 4],
    pub light_color: [f32; 4],
    pub dark_color: [f32; 4],
    pub icon_background: String,
    pub icon_item: String,
    pub icon_ammo: String,
    pub custom_depth_stencil: i32,
    pub pickup_sound: Option<String>,
    pub equip_sound: Option<String>,
}

/// Pickup widget + outline (custom depth) + glow
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHighlight {
    pub pickup_widget_visible: bool,
    custom_depth: bool,
    can_change_custom_depth: bool,
    glow: bool,
}

impl Default for ItemHighlight {
    fn default() -> Self {
        Self {
            pickup_widget_visible: false,
            custom_depth: false,
            can_change_custom_depth: true,
            glow: true,
        }
    }
}

impl ItemHighlight {
    pub fn custom_depth_enabled(&self) -> bool {
        self.custom_depth
    }

    pub fn can_change_custom_depth(&self) -> bool {
        self.can_change_custom_depth
    }

    pub fn glow_enabled(&self) -> bool {
        self.glow
    }

    /// Outline включается только если разрешено
    pub fn enable_custom_depth(&mut self) {
        if self.can_change_custom_depth {
            self.custom_depth = true;
        }
    }

    pub fn disable_custom_depth(&mut self) {
        if self.can_change_custom_depth {
            self.custom_depth = false;
        }
    }

    /// Заморозить outline в текущем виде (item летит / в руках)
    pub fn lock_custom_depth(&mut self) {
        self.can_change_custom_depth = false;
    }

    pub fn unlock_custom_depth(&mut self) {
        self.can_change_custom_depth = true;
    }

    pub fn enable_glow(&mut self) {
        self.glow = true;
    }

    pub fn disable_glow(&mut self) {
        self.glow = false;
    }
}

/// Текущие material parameters (host копирует в dynamic material instance)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ItemMaterial {
    pub glow_amount: f32,
    pub fresnel_exponent: f32,
    pub fresnel_reflect_fraction: f32,
}

impl Default for ItemMaterial {
    fn default() -> Self {
        Self {
            glow_amount: 150.0,
            fresnel_exponent: 3.0,
            fresnel_reflect_fraction: 4.0,
        }
    }
}

/// Looping pulse timer (активен только в Pickup)
#[derive(Component, Debug, Clone, Default)]
pub struct ItemPulse {
    timer: Option<Timer>,
}

impl ItemPulse {
    pub fn start(&mut self, period: f32) {
        self.timer = Some(Timer::from_seconds(period, TimerMode::Repeating));
    }

    pub fn clear(&mut self) {
        self.timer = None;
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        if let Some(timer) = self.timer.as_mut() {
            timer.tick(delta);
        }
    }

    pub fn elapsed_secs(&self) -> Option<f32> {
        self.timer.as_ref().map(Timer::elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_stars_skip_index_zero() {
        assert_eq!(
            ItemRarity::Damaged.active_stars(),
            [false, true, false, false, false, false]
        );
        assert_eq!(
            ItemRarity::Legendary.active_stars(),
            [false, true, true, true, true, true]
        );
    }

    #[test]
    fn test_set_state_reapplies_physics_profile() {
        let mut item = Item::new("SMG", ItemKind::Weapon, ItemRarity::Rare);
        assert_eq!(item.physics().area_sphere, CollisionMode::QueryOnly);
        assert!(item.physics().collision_box_blocks_visibility);

        item.set_state(ItemState::Falling);
        assert!(item.physics().simulate_physics);
        assert!(item.physics().gravity);
        assert!(item.physics().mesh_blocks_world_static);
        assert_eq!(item.physics().area_sphere, CollisionMode::NoCollision);
        assert_eq!(item.physics().collision_box, CollisionMode::NoCollision);

        item.set_state(ItemState::PickedUp);
        assert!(!item.physics().mesh_visible);
        assert!(item.physics().hide_pickup_widget);

        for state in [
            ItemState::Pickup,
            ItemState::EquipInterping,
            ItemState::PickedUp,
            ItemState::Equipped,
            ItemState::Falling,
        ] {
            item.set_state(state);
            assert_eq!(*item.physics(), ItemPhysicsProfile::for_state(ItemKind::Weapon, state));
        }
    }

    #[test]
    fn test_equipped_and_interping_disable_all_collision() {
        for state in [ItemState::Equipped, ItemState::EquipInterping] {
            let profile = ItemPhysicsProfile::for_state(ItemKind::Ammo, state);
            assert!(profile.hide_pickup_widget);
            assert!(profile.mesh_visible);
            assert_eq!(profile.mesh_collision, CollisionMode::NoCollision);
            assert_eq!(profile.area_sphere, CollisionMode::NoCollision);
            assert_eq!(profile.collision_box, CollisionMode::NoCollision);
            assert_eq!(profile.ammo_sphere, CollisionMode::NoCollision);
        }
    }

    #[test]
    fn test_ammo_sphere_only_for_ammo_in_pickup() {
        assert_eq!(
            ItemPhysicsProfile::for_state(ItemKind::Ammo, ItemState::Pickup).ammo_sphere,
            CollisionMode::QueryOnly
        );
        assert_eq!(
            ItemPhysicsProfile::for_state(ItemKind::Weapon, ItemState::Pickup).ammo_sphere,
            CollisionMode::NoCollision
        );
    }

    #[test]
    fn test_custom_depth_lock() {
        let mut highlight = ItemHighlight::default();
        highlight.enable_custom_depth();
        assert!(highlight.custom_depth_enabled());

        highlight.lock_custom_depth();
        highlight.disable_custom_depth();
        assert!(highlight.custom_depth_enabled());

        highlight.unlock_custom_depth();
        highlight.disable_custom_depth();
        assert!(!highlight.custom_depth_enabled());
    }
}
