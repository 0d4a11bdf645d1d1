// ============================================
// Noise Functions - Шумовые функции для генерации
// ============================================
// Целочисленный решётчатый шум с косинусным сглаживанием.
// Всё детерминировано от сида - одинаковый вход даёт
// одинаковый рельеф на любой платформе.

use std::f32::consts::PI;

/// Решётчатый шум в диапазоне -1..1
#[inline(always)]
pub fn lattice_noise(x: i32, y: i32, z: i32, seed: i32) -> f32 {
    let n = x
        .wrapping_add(y.wrapping_mul(57))
        .wrapping_add(z.wrapping_mul(57 * 57))
        .wrapping_add(seed);
    let n = (n << 13) ^ n;
    let m = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - m as f32 / 1_073_741_824.0
}

/// Косинусная интерполяция между двумя значениями
#[inline]
pub fn interpolate(a: f32, b: f32, blend: f32) -> f32 {
    let f = (1.0 - (blend * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

/// Сглаженный шум: углы/16 + рёбра/8 + центр/4 по окрестности 3x3x3
pub fn smooth_noise(x: i32, y: i32, z: i32, seed: i32) -> f32 {
    let mut corners = 0.0;
    let mut sides = 0.0;
    for dx in [-1, 1] {
        for dy in [-1, 1] {
            for dz in [-1, 1] {
                corners += lattice_noise(x + dx, y + dy, z + dz, seed);
            }
        }
    }
    for d in [-1, 1] {
        sides += lattice_noise(x + d, y, z - 1, seed) + lattice_noise(x + d, y, z + 1, seed);
        sides += lattice_noise(x, y + d, z - 1, seed) + lattice_noise(x, y + d, z + 1, seed);
        sides += lattice_noise(x + d, y - 1, z, seed) + lattice_noise(x + d, y + 1, z, seed);
    }
    let center = lattice_noise(x, y, z, seed);
    corners / 16.0 + sides / 8.0 + center / 4.0
}

/// Интерполированный шум: трилинейное косинусное смешивание
/// восьми сглаженных узлов решётки
pub fn interpolated_noise(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let iz = z.floor() as i32;
    let fx = x - ix as f32;
    let fy = y - iy as f32;
    let fz = z - iz as f32;

    let v1 = smooth_noise(ix, iy, iz, seed);
    let v2 = smooth_noise(ix + 1, iy, iz, seed);
    let v3 = smooth_noise(ix, iy + 1, iz, seed);
    let v4 = smooth_noise(ix + 1, iy + 1, iz, seed);
    let v5 = smooth_noise(ix, iy, iz + 1, seed);
    let v6 = smooth_noise(ix + 1, iy, iz + 1, seed);
    let v7 = smooth_noise(ix, iy + 1, iz + 1, seed);
    let v8 = smooth_noise(ix + 1, iy + 1, iz + 1, seed);

    let i1 = interpolate(v1, v2, fx);
    let i2 = interpolate(v3, v4, fx);
    let i3 = interpolate(v5, v6, fx);
    let i4 = interpolate(v7, v8, fx);
    let i5 = interpolate(i1, i2, fy);
    let i6 = interpolate(i3, i4, fy);
    interpolate(i5, i6, fz)
}

/// Перлиноподобный шум: 4 октавы интерполированного шума,
/// амплитуда затухает вдвое на октаву
pub fn perlin_noise(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let mut total = 0.0;
    for i in 0..4 {
        let frequency = (1 << i) as f32;
        let amplitude = 0.5f32.powi(i);
        total += interpolated_noise(x * frequency, y * frequency, z * frequency, seed) * amplitude;
    }
    total
}

/// Слоёный решётчатый шум: 4 октавы по узлам решётки,
/// частоты 1/8..1, амплитуды 0.5..4
pub fn layered_noise(x: f32, y: f32, z: f32, seed: i32) -> f32 {
    let d = 8.0;
    let mut total = 0.0;
    for i in 0..4 {
        let freq = (1 << i) as f32 / d;
        let amp = 2.0f32.powi(i - 1);
        total += lattice_noise(
            (x * freq) as i32,
            (y * freq) as i32,
            (z * freq) as i32,
            seed,
        ) * amp;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_deterministic() {
        assert_eq!(
            lattice_noise(10, -3, 7, 42),
            lattice_noise(10, -3, 7, 42)
        );
        assert_ne!(
            lattice_noise(10, -3, 7, 42),
            lattice_noise(10, -3, 7, 43)
        );
    }

    #[test]
    fn test_lattice_range() {
        for i in -50..50 {
            let v = lattice_noise(i, i * 2, -i, 1234);
            assert!((-1.0..=1.0).contains(&v), "вышли за диапазон: {}", v);
        }
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert!((interpolate(2.0, 8.0, 0.0) - 2.0).abs() < 1e-5);
        assert!((interpolate(2.0, 8.0, 1.0) - 8.0).abs() < 1e-5);
        // Середина косинусного смешивания - среднее арифметическое
        assert!((interpolate(2.0, 8.0, 0.5) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_layered_deterministic() {
        let a = layered_noise(3.5, -1.25, 0.0, 7);
        let b = layered_noise(3.5, -1.25, 0.0, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_perlin_deterministic() {
        let a = perlin_noise(0.3, 0.7, 1.1, 99);
        let b = perlin_noise(0.3, 0.7, 1.1, 99);
        assert_eq!(a, b);
    }
}
