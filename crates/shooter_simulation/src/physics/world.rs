//! PhysicsWorld — узкий интерфейс к collision world host'а
//!
//! ECS не владеет физикой: host (движок / rapier context / тесты) отвечает на
//! line traces. По умолчанию мир пустой (trace никогда не попадает).

use bevy::prelude::*;

/// Попадание line trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    pub location: Vec3,
    /// Entity, в которую попали (None = статическая геометрия)
    pub entity: Option<Entity>,
}

/// Capability: line trace по visibility каналу
pub trait PhysicsWorld: Send + Sync + 'static {
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit>;
}

/// Closure как physics world (удобно для тестов и простых сцен)
impl<F> PhysicsWorld for F
where
    F: Fn(Vec3, Vec3) -> Option<TraceHit> + Send + Sync + 'static,
{
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit> {
        self(start, end)
    }
}

/// Мир без геометрии
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWorld;

impl PhysicsWorld for EmptyWorld {
    fn line_trace(&self, _start: Vec3, _end: Vec3) -> Option<TraceHit> {
        None
    }
}

/// Resource: injected physics world
#[derive(Resource)]
pub struct PhysicsQueries(Box<dyn PhysicsWorld>);

impl Default for PhysicsQueries {
    fn default() -> Self {
        Self::new(EmptyWorld)
    }
}

impl PhysicsQueries {
    pub fn new(world: impl PhysicsWorld) -> Self {
        Self(Box::new(world))
    }

    pub fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit> {
        self.0.line_trace(start, end)
    }
}

/// Результат двухэтапного trace выстрела
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamTrace {
    /// Куда реально пришёл луч (конец trail / impact)
    pub end: Vec3,
    /// Во что попали (второй trace от дула)
    pub hit: Option<TraceHit>,
}

/// Множитель длины второго trace (дуло → точка прицела), чтобы не "не долететь" до поверхности
const MUZZLE_TRACE_EXTENSION: f32 = 1.25;

/// Двухэтапный trace: сначала из камеры через прицел, затем от дула к найденной точке
///
/// Так направление ствола совпадает с намерением прицела, даже если между дулом
/// и целью есть препятствие.
pub fn resolve_beam_end(
    world: &PhysicsQueries,
    crosshair_origin: Vec3,
    crosshair_direction: Vec3,
    muzzle: Vec3,
    trace_distance: f32,
) -> BeamTrace {
    let crosshair_end = crosshair_origin + crosshair_direction.normalize_or_zero() * trace_distance;
    let aim_point = world
        .line_trace(crosshair_origin, crosshair_end)
        .map(|hit| hit.location)
        .unwrap_or(crosshair_end);

    let muzzle_end = muzzle + (aim_point - muzzle) * MUZZLE_TRACE_EXTENSION;
    match world.line_trace(muzzle, muzzle_end) {
        Some(hit) => BeamTrace {
            end: hit.location,
            hit: Some(hit),
        },
        None => BeamTrace {
            end: aim_point,
            hit: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Стена z = -100 (всё, что пересекает плоскость, попадает)
    fn wall(start: Vec3, end: Vec3) -> Option<TraceHit> {
        if (start.z > -100.0) == (end.z > -100.0) {
            return None;
        }
        let t = (-100.0 - start.z) / (end.z - start.z);
        Some(TraceHit {
            location: start + (end - start) * t,
            entity: None,
        })
    }

    #[test]
    fn test_empty_world_beam_ends_at_trace_distance() {
        let world = PhysicsQueries::default();
        let beam = resolve_beam_end(&world, Vec3::ZERO, Vec3::NEG_Z, Vec3::new(10.0, 0.0, 0.0), 500.0);

        assert_eq!(beam.end, Vec3::new(0.0, 0.0, -500.0));
        assert!(beam.hit.is_none());
    }

    #[test]
    fn test_beam_hits_wall_from_muzzle() {
        let world = PhysicsQueries::new(wall);
        let beam = resolve_beam_end(&world, Vec3::ZERO, Vec3::NEG_Z, Vec3::new(10.0, 0.0, -10.0), 50_000.0);

        let hit = beam.hit.expect("wall hit");
        assert!((hit.location.z + 100.0).abs() < 1e-3);
        assert!((beam.end - Vec3::new(0.0, 0.0, -100.0)).length() < 1e-2);
    }
}
