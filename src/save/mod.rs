// ============================================
// Save Module - Сохранение мира на диск
// ============================================
// Один файл на чанк в формате кодека плюс бинарный
// заголовок world.dat с сидом.

mod meta;
mod chunk_file;

pub use chunk_file::{chunk_file_name, read_chunk, write_chunk, SaveError};
pub use meta::{read_meta, write_meta, WorldMeta, MAGIC_NUMBER, SAVE_VERSION};
