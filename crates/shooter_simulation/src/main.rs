//! Headless прогон shooter симуляции
//!
//! Персонаж со стартовым SMG подбирает AR и патроны, стреляет очередью
//! и перезаряжается. Animation notifies не шлём: reload завершается fallback таймером.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use shooter_simulation::combat::{FireButtonIntent, WeaponFired};
use shooter_simulation::equipment::give_default_weapon;
use shooter_simulation::item_system::{spawn_ammo, spawn_weapon, CatalogError, StartItemCurve};
use shooter_simulation::*;

fn run(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn main() -> Result<(), CatalogError> {
    let seed = 42;

    let mut app = create_headless_app(seed);
    app.add_plugins(ShooterPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    logger::log_info(&format!("Starting shooter headless simulation (seed: {})", seed));

    let tuning = app.world().resource::<ShooterTuning>().clone();
    let catalog = app.world().resource::<ItemCatalog>().clone();

    let shooter = app.world_mut().spawn(shooter_bundle(Transform::default(), &tuning)).id();
    give_default_weapon(app.world_mut(), shooter, WeaponType::SubmachineGun, ItemRarity::Common)?;

    let (rifle, ammo) = {
        let world = app.world_mut();
        let spawned = {
            let mut commands = world.commands();
            let rifle = spawn_weapon(
                &mut commands,
                &catalog,
                WeaponType::AssaultRifle,
                ItemRarity::Legendary,
                Transform::from_xyz(50.0, 0.0, -300.0),
            )?;
            let ammo = spawn_ammo(
                &mut commands,
                &catalog,
                AmmoType::NineMm,
                30,
                Transform::from_xyz(-50.0, 0.0, -200.0),
            )?;
            (rifle, ammo)
        };
        world.flush();
        spawned
    };

    run(&mut app, 2);

    for item in [rifle, ammo] {
        app.world_mut().send_event(StartItemCurve {
            item,
            character: shooter,
            force_play_sound: false,
        });
    }
    run(&mut app, 60);

    app.world_mut().send_event(FireButtonIntent {
        character: shooter,
        pressed: true,
    });
    run(&mut app, 30);
    app.world_mut().send_event(FireButtonIntent {
        character: shooter,
        pressed: false,
    });

    // Магазин пуст → reload → fallback
    run(&mut app, 240);

    let shots = app.world().resource::<Events<WeaponFired>>().len();
    let world = app.world_mut();
    let mut query = world.query::<(&CombatController, &AmmoReserve, &Inventory)>();
    if let Ok((controller, reserve, inventory)) = query.get(world, shooter) {
        logger::log_info(&format!(
            "State {:?}, inventory {} items, 9mm carried {}, shots in last frames {}",
            controller.state(),
            inventory.len(),
            reserve.carried(AmmoType::NineMm),
            shots
        ));
    }

    logger::log_info("Simulation complete!");
    Ok(())
}
