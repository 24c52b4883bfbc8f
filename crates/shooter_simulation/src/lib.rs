//! Shooter Simulation Core
//!
//! ECS-симуляция third-person shooter'а на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state и правила (items, inventory, combat state machine, crosshair, animation params)
//! - Host (движок) = рендер, звук, animation playback, collision world
//!
//! Host → ECS: intent events, `CharacterKinematics`, `FollowCamera`, `AnimationNotify`, `PhysicsQueries`
//! ECS → Host: `WeaponFired`, `PlaySound`, `MontageRequest`, HUD events, rapier компоненты items

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod config;
pub mod equipment;
pub mod item_system;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod shared;
pub mod shooting;

// Re-export базовых типов для удобства
pub use animation::{AnimationParameters, AnimationPlugin, TurnInPlaceCurves};
pub use combat::{
    AmmoReserve, AmmoType, CombatController, CombatPlugin, CombatState, FireRejected, ReloadRejected, Weapon,
    WeaponType,
};
pub use components::*;
pub use config::ShooterTuning;
pub use equipment::{EquipmentPlugin, ExchangeRejected};
pub use item_system::{Item, ItemCatalog, ItemKind, ItemRarity, ItemState, ItemSystemPlugin};
pub use logger::init_logger;
pub use movement::MovementPlugin;
pub use physics::{ItemPhysicsPlugin, PhysicsQueries, PhysicsWorld, TraceHit};
pub use shooting::ShootingPlugin;

/// Порядок фаз кадра (все gameplay системы в `Update`)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShooterSet {
    /// Host intents → state (aim, crouch, select, exchange, overlaps)
    Input,
    /// Полёт items к персонажу, pulse, падение брошенного оружия
    Items,
    /// Долетевший item → inventory / swap / запас
    Pickup,
    /// Drop / equip оружия
    Equip,
    /// Combat state machine (fire, reload, notifies)
    Combat,
    /// Crosshair, camera zoom, capsule, item trace
    Character,
    /// Animation bridge
    Animation,
    /// Item state → rapier компоненты
    Sync,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct ShooterPlugin;

impl Plugin for ShooterPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ShooterSet::Input,
                ShooterSet::Items,
                ShooterSet::Pickup,
                ShooterSet::Equip,
                ShooterSet::Combat,
                ShooterSet::Character,
                ShooterSet::Animation,
                ShooterSet::Sync,
            )
                .chain(),
        );

        app.init_resource::<ShooterTuning>();

        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_plugins((
            ItemSystemPlugin,
            ItemPhysicsPlugin,
            EquipmentPlugin,
            CombatPlugin,
            ShootingPlugin,
            MovementPlugin,
            AnimationPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
