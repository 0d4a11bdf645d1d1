// ============================================
// Worldgen Module - Процедурная генерация рельефа
// ============================================
// Чистые детерминированные функции от (позиция, сид):
// никакого состояния, пригодны для параллельных вызовов.

mod noise;
mod height;
mod generator;

pub use height::{generate_height, HeightMode, MAX_HEIGHT};
pub use generator::{random_chunk, TerrainGenerator};
pub use noise::{interpolated_noise, lattice_noise, layered_noise, perlin_noise};
