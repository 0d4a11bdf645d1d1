// ============================================
// Position Hash - Хеш позиции чанка
// ============================================
// Побитовая свёртка трёх знаковых координат в 32-битный ключ.
// Детерминирован, без сида; коллизии допустимы и разрешаются
// пробированием в ChunkMap, а не самим хешем.

use crate::voxel::ChunkPos;

// По одной константе на ось
const X_SALT: u32 = 0x3b9a_ca07;
const Y_SALT: u32 = 0x61c8_8647;
const Z_SALT: u32 = 0x9e37_79b9;

/// Хеш позиции: 32 итерации по младшим битам координат.
/// Сдвиг арифметический, так что у отрицательных координат
/// старшие итерации продолжают подмешивать единицы знака.
pub fn hash_position(pos: ChunkPos) -> u32 {
    let mut key: u32 = 0;
    let mut x = pos.x;
    let mut y = pos.y;
    let mut z = pos.z;
    for _ in 0..32 {
        if x & 1 != 0 {
            key ^= X_SALT;
        }
        if y & 1 != 0 {
            key ^= Y_SALT;
        }
        if z & 1 != 0 {
            key ^= Z_SALT;
        }
        x >>= 1;
        y >>= 1;
        z >>= 1;
        key = key.rotate_left(1);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let pos = ChunkPos::new(12, -7, 3);
        assert_eq!(hash_position(pos), hash_position(pos));
    }

    #[test]
    fn test_axes_distinct() {
        // Одна и та же координата на разных осях даёт разные ключи
        let a = hash_position(ChunkPos::new(5, 0, 0));
        let b = hash_position(ChunkPos::new(0, 5, 0));
        let c = hash_position(ChunkPos::new(0, 0, 5));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_negative_coords() {
        let a = hash_position(ChunkPos::new(-1, -1, -1));
        let b = hash_position(ChunkPos::new(1, 1, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_spread_over_neighbors() {
        // Хеш линеен по битам координат, так что коллизий на плотном
        // кубе много - важно лишь, что он не схлопывается в горстку значений
        let mut keys = std::collections::HashSet::new();
        for x in -2..=2 {
            for y in -2..=2 {
                for z in -2..=2 {
                    keys.insert(hash_position(ChunkPos::new(x, y, z)));
                }
            }
        }
        assert!(keys.len() > 30);
    }
}
