// ============================================
// Chunk - Куб 16x16x16 вокселей с позицией
// ============================================
// Плоский массив из 4096 вокселей, порядок фиксирован:
// x внешний, y средний, z внутренний (idx = x*256 + y*16 + z).
// Кодек и генератор обязаны использовать тот же порядок.

use super::Voxel;

/// Размер чанка по каждой оси
pub const CHUNK_SIZE: usize = 16;
/// Общее число вокселей в чанке
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Позиция чанка в сетке чанков (не в мировых координатах)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Позиция чанка, содержащего мировой воксель
    #[inline]
    pub fn of_voxel(wx: i32, wy: i32, wz: i32) -> Self {
        Self {
            x: wx.div_euclid(CHUNK_SIZE as i32),
            y: wy.div_euclid(CHUNK_SIZE as i32),
            z: wz.div_euclid(CHUNK_SIZE as i32),
        }
    }

    /// Локальные координаты мирового вокселя внутри своего чанка
    #[inline]
    pub fn local_of(wx: i32, wy: i32, wz: i32) -> (usize, usize, usize) {
        (
            wx.rem_euclid(CHUNK_SIZE as i32) as usize,
            wy.rem_euclid(CHUNK_SIZE as i32) as usize,
            wz.rem_euclid(CHUNK_SIZE as i32) as usize,
        )
    }
}

/// Чанк: позиция неизменна после создания, воксели мутабельны на месте.
/// Частичных чанков не бывает - все 4096 ячеек всегда заполнены.
#[derive(Clone)]
pub struct Chunk {
    pos: ChunkPos,
    voxels: Box<[Voxel; CHUNK_VOLUME]>,
}

/// Индекс в плоском массиве
#[inline]
const fn index(x: usize, y: usize, z: usize) -> usize {
    x * CHUNK_SIZE * CHUNK_SIZE + y * CHUNK_SIZE + z
}

impl Chunk {
    /// Чанк, целиком заполненный одним вокселем
    pub fn filled(pos: ChunkPos, fill: Voxel) -> Self {
        Self {
            pos,
            voxels: Box::new([fill; CHUNK_VOLUME]),
        }
    }

    #[inline]
    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, v: Voxel) {
        self.voxels[index(x, y, z)] = v;
    }

    /// Воксели в линейном порядке (для кодека)
    #[inline]
    pub fn voxels(&self) -> &[Voxel; CHUNK_VOLUME] {
        &self.voxels
    }

    #[inline]
    pub fn voxels_mut(&mut self) -> &mut [Voxel; CHUNK_VOLUME] {
        &mut self.voxels
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.voxels[..] == other.voxels[..]
    }
}

impl Eq for Chunk {}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let non_air = self.voxels.iter().filter(|v| !v.is_air()).count();
        f.debug_struct("Chunk")
            .field("pos", &self.pos)
            .field("non_air", &non_air)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        // z внутренний: соседние по z воксели лежат рядом
        assert_eq!(index(0, 0, 0), 0);
        assert_eq!(index(0, 0, 1), 1);
        assert_eq!(index(0, 1, 0), 16);
        assert_eq!(index(1, 0, 0), 256);
        assert_eq!(index(15, 15, 15), CHUNK_VOLUME - 1);
    }

    #[test]
    fn test_filled_and_set() {
        let mut chunk = Chunk::filled(ChunkPos::new(1, 2, 3), Voxel::air());
        assert_eq!(chunk.pos(), ChunkPos::new(1, 2, 3));
        assert!(chunk.voxels().iter().all(|v| v.is_air()));

        chunk.set(4, 5, 6, Voxel::solid());
        assert_eq!(chunk.get(4, 5, 6), Voxel::solid());
        assert_eq!(chunk.voxels()[index(4, 5, 6)], Voxel::solid());
    }

    #[test]
    fn test_chunk_equality() {
        let a = Chunk::filled(ChunkPos::new(0, 0, 0), Voxel::air());
        let mut b = a.clone();
        assert_eq!(a, b);

        b.set(0, 0, 0, Voxel::solid());
        assert_ne!(a, b);

        let c = Chunk::filled(ChunkPos::new(1, 0, 0), Voxel::air());
        assert_ne!(a, c);
    }

    #[test]
    fn test_voxel_to_chunk_coords() {
        assert_eq!(ChunkPos::of_voxel(0, 0, 0), ChunkPos::new(0, 0, 0));
        assert_eq!(ChunkPos::of_voxel(15, 16, 31), ChunkPos::new(0, 1, 1));
        // Отрицательные координаты округляются вниз
        assert_eq!(ChunkPos::of_voxel(-1, -16, -17), ChunkPos::new(-1, -1, -2));
        assert_eq!(ChunkPos::local_of(-1, -16, -17), (15, 0, 15));
    }
}
