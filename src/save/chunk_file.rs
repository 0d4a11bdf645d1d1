// ============================================
// Chunk File - Чтение/запись файла чанка
// ============================================
// Файл содержит ровно байтовый поток кодека: 16-байтовый
// заголовок позиции и цепочки вокселей. Длина отдельно не
// хранится - её задаёт размер файла.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::codec::{decode_chunk, encode_chunk, CodecError};
use crate::voxel::{Chunk, ChunkPos};

/// Ошибки сохранения/загрузки
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    /// Битый файл чанка - не путать с отсутствующим
    Codec(CodecError),
    Serialize(String),
    Deserialize(String),
    InvalidMagic,
    UnsupportedVersion(u32),
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<CodecError> for SaveError {
    fn from(e: CodecError) -> Self {
        SaveError::Codec(e)
    }
}

/// Имя файла чанка по позиции
pub fn chunk_file_name(pos: ChunkPos) -> String {
    format!("chunk_{}_{}_{}.vxc", pos.x, pos.y, pos.z)
}

/// Записать чанк в каталог мира
pub fn write_chunk(dir: &Path, chunk: &Chunk) -> Result<(), SaveError> {
    let bytes = encode_chunk(chunk);
    let path = dir.join(chunk_file_name(chunk.pos()));
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Прочитать чанк из каталога мира.
/// Отсутствие файла - обычный промах (None), битый файл - ошибка.
pub fn read_chunk(dir: &Path, pos: ChunkPos) -> Result<Option<Chunk>, SaveError> {
    let path = dir.join(chunk_file_name(pos));
    if !path.exists() {
        return Ok(None);
    }

    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let chunk = decode_chunk(&bytes)?;
    Ok(Some(chunk))
}
