// ============================================
// Height Map - Карта высот поверхности
// ============================================
// Высота столбца считается по горизонтальной плоскости (x, y),
// вертикальная ось - z. Сырой шум отображается в 0..16.

use serde::{Deserialize, Serialize};

use super::noise::{layered_noise, perlin_noise};

/// Верхняя граница высоты поверхности (в вокселях чанка)
pub const MAX_HEIGHT: i32 = 16;

/// Способ вычисления высоты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightMode {
    /// Слоёный решётчатый шум (основной режим)
    #[default]
    Layered,
    /// Перлиноподобный шум со сглаживанием
    Perlin,
}

/// Высота поверхности в столбце (x, y).
/// Слоёный шум даёт примерно -7.5..7.5, перлиновский -2..2;
/// оба центрируются на 8 и зажимаются в 0..=16.
pub fn generate_height(x: f32, y: f32, seed: i32, mode: HeightMode) -> i32 {
    let raw = match mode {
        HeightMode::Layered => layered_noise(x, y, 0.0, seed) + 8.0,
        HeightMode::Perlin => perlin_noise(x / 16.0, y / 16.0, 0.0, seed) * 4.0 + 8.0,
    };
    (raw as i32).clamp(0, MAX_HEIGHT)
}
