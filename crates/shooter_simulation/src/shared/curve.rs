//! Keyframe curves (float + vector)
//!
//! Замена animation curve assets: piecewise-linear ключи, clamp за краями.
//! Сэмплируются по elapsed time таймера (item interp, pulse).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Один ключ кривой
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

/// Float curve: ключи отсортированы по времени
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatCurve {
    keys: Vec<CurveKey>,
}

impl FloatCurve {
    pub fn new(keys: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut keys: Vec<CurveKey> = keys
            .into_iter()
            .map(|(time, value)| CurveKey { time, value })
            .collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn constant(value: f32) -> Self {
        Self::new([(0.0, value)])
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Время последнего ключа (0 для пустой кривой)
    pub fn duration(&self) -> f32 {
        self.keys.last().map(|key| key.time).unwrap_or(0.0)
    }

    /// Значение в момент `time`
    ///
    /// Пустая кривая → 0.0, до первого / после последнего ключа → крайние значения.
    pub fn sample(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };

        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // Первый ключ строго после time (существует, т.к. time < last.time)
        let next_index = self.keys.partition_point(|key| key.time <= time);
        let prev = self.keys[next_index - 1];
        let next = self.keys[next_index];

        let span = next.time - prev.time;
        if span <= f32::EPSILON {
            return next.value;
        }

        let alpha = (time - prev.time) / span;
        prev.value + (next.value - prev.value) * alpha
    }
}

/// Vector curve: три независимых float канала
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorCurve {
    pub x: FloatCurve,
    pub y: FloatCurve,
    pub z: FloatCurve,
}

impl VectorCurve {
    pub fn new(x: FloatCurve, y: FloatCurve, z: FloatCurve) -> Self {
        Self { x, y, z }
    }

    pub fn sample(&self, time: f32) -> Vec3 {
        Vec3::new(self.x.sample(time), self.y.sample(time), self.z.sample(time))
    }

    pub fn duration(&self) -> f32 {
        self.x.duration().max(self.y.duration()).max(self.z.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_curve_samples_zero() {
        assert_eq!(FloatCurve::default().sample(0.3), 0.0);
    }

    #[test]
    fn test_curve_interpolates_between_keys() {
        let curve = FloatCurve::new([(1.0, 10.0), (0.0, 0.0)]);
        assert_eq!(curve.sample(0.5), 5.0);
        assert_eq!(curve.sample(-1.0), 0.0);
        assert_eq!(curve.sample(2.0), 10.0);
        assert_eq!(curve.duration(), 1.0);
    }

    #[test]
    fn test_vector_curve_channels() {
        let curve = VectorCurve::new(
            FloatCurve::constant(1.0),
            FloatCurve::new([(0.0, 0.0), (2.0, 4.0)]),
            FloatCurve::default(),
        );
        assert_eq!(curve.sample(1.0), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(curve.duration(), 2.0);
    }
}
