// ============================================
// Endless - Разреженный воксельный мир
// ============================================
// Чанки 16x16x16, открытая адресация по хешу позиции,
// RLE-кодек для файлов и детерминированная генерация рельефа.

pub mod codec;
pub mod config;
pub mod save;
pub mod store;
pub mod voxel;
pub mod world;
pub mod worldgen;

pub use config::WorldConfig;
pub use voxel::{Chunk, ChunkPos, Voxel, CHUNK_SIZE, CHUNK_VOLUME};
pub use world::{World, WorldError};
