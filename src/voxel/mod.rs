// ============================================
// Voxel Module - Модель данных вокселей и чанков
// ============================================

mod block;
mod chunk;

pub use block::{Voxel, BlockType, SOLID, AIR};
pub use chunk::{Chunk, ChunkPos, CHUNK_SIZE, CHUNK_VOLUME};
