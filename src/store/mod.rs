// ============================================
// Store Module - Пространственное хранилище чанков
// ============================================
// Открытая адресация с линейным пробированием поверх
// 32-битного хеша позиции чанка.

mod hash;
mod chunk_map;

pub use hash::hash_position;
pub use chunk_map::{ChunkMap, INITIAL_CAPACITY};
