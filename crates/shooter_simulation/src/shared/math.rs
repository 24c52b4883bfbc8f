//! Скалярные helper'ы интерполяции и углов (градусы, как в animation layer)

/// Экспоненциальный шаг `current → target`
///
/// Доля пути за кадр = `clamp(delta * speed, 0, 1)`.
/// Не полностью frame-rate independent при больших `delta` — оставлено как есть,
/// на этой формуле настроены все rates в `ShooterTuning`.
pub fn finterp_to(current: f32, target: f32, delta: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }

    let distance = target - current;
    if distance * distance < 1.0e-8 {
        return target;
    }

    current + distance * (delta * speed).clamp(0.0, 1.0)
}

/// Нормализует угол в (-180, 180]
pub fn normalize_axis(angle: f32) -> f32 {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Кратчайшая разница углов `a - b` в (-180, 180]
pub fn normalized_delta_degrees(a: f32, b: f32) -> f32 {
    normalize_axis(a - b)
}

/// Линейно переносит `value` из `input` в `output` с clamp по краям
pub fn map_range_clamped(input: (f32, f32), output: (f32, f32), value: f32) -> f32 {
    let span = input.1 - input.0;
    if span.abs() <= f32::EPSILON {
        return if value >= input.1 { output.1 } else { output.0 };
    }

    let alpha = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * alpha
}
