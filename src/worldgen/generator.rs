// ============================================
// Terrain Generator - Генерация чанков по высотам
// ============================================
// Чистая функция от (позиция, сид): повторный вызов даёт
// побайтово тот же чанк. Состояния нет, вызовы можно
// раскидывать по воркерам без блокировок.

use crate::voxel::{Chunk, ChunkPos, Voxel, CHUNK_SIZE};

use super::height::{generate_height, HeightMode};

/// Генератор рельефа: сид и режим высот фиксируются при создании
#[derive(Debug, Clone, Copy)]
pub struct TerrainGenerator {
    seed: i32,
    mode: HeightMode,
}

impl TerrainGenerator {
    pub fn new(seed: i32, mode: HeightMode) -> Self {
        Self { seed, mode }
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Сгенерировать чанк: для каждого столбца (x, y) берём высоту
    /// поверхности, ниже неё земля, на уровне и выше воздух.
    /// Все 4096 ячеек записываются явно - частичных чанков не бывает.
    pub fn generate_chunk(&self, pos: ChunkPos) -> Chunk {
        let mut chunk = Chunk::filled(pos, Voxel::air());
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                let wx = pos.x * CHUNK_SIZE as i32 + x as i32;
                let wy = pos.y * CHUNK_SIZE as i32 + y as i32;
                let height = generate_height(wx as f32, wy as f32, self.seed, self.mode);
                for z in 0..CHUNK_SIZE {
                    let voxel = if (z as i32) < height {
                        Voxel::solid()
                    } else {
                        Voxel::air()
                    };
                    chunk.set(x, y, z, voxel);
                }
            }
        }
        chunk
    }
}

/// Детерминированный "случайный" чанк для тестов кодека:
/// xorshift от соли, никаких цепочек длиннее пары вокселей
pub fn random_chunk(pos: ChunkPos, salt: u32) -> Chunk {
    let mut chunk = Chunk::filled(pos, Voxel::air());
    let mut state = salt.wrapping_mul(0x9e37_79b9) | 1;
    for voxel in chunk.voxels_mut().iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *voxel = Voxel::new((state & 0x0fff) as u16, (state >> 12) as u8 & 0x0f);
    }
    chunk
}
