// ============================================
// RLE Codec - Сжатие чанка цепочками
// ============================================
// Раскладка (big-endian):
//   0..4   X чанка (i32, дополнительный код)
//   4..8   Y чанка
//   8..12  Z чанка
//   12..16 зарезервировано: пишем нули, при чтении игнорируем
//   16..   поток цепочек: u16 заголовок + u16 воксель
//
// Заголовок цепочки: бит 15 = 1 для повтора (длина >= 2),
// 0 для одиночного вокселя; биты 14..0 - длина. Каждый воксель
// учтён ровно одной цепочкой, хвостовая цепочка всегда
// сбрасывается - поток без остатка раскрывается в 4096 вокселей.
//
// Цель - детерминированный побайтовый round-trip, не степень сжатия:
// худший случай (все воксели разные) занимает 16 + 4096*4 байт.

use crate::voxel::{Chunk, ChunkPos, Voxel, CHUNK_VOLUME};

/// Размер заголовка позиции
pub const HEADER_SIZE: usize = 16;
/// Худший случай: каждый воксель - отдельная цепочка
pub const MAX_ENCODED_SIZE: usize = HEADER_SIZE + CHUNK_VOLUME * 4;

/// Бит повторной цепочки
const REPEAT_FLAG: u16 = 0x8000;
/// Маска длины цепочки
const COUNT_MASK: u16 = 0x7fff;

/// Ошибки разбора потока. Отличаются от "чанк не найден" -
/// битый файл никогда не маскируется под промах.
#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Буфер короче 16-байтового заголовка
    TruncatedHeader { len: usize },
    /// Пара (заголовок, воксель) обрезана посреди
    UnexpectedEof { offset: usize },
    /// Цепочка нулевой длины
    EmptyRun { offset: usize },
    /// Цепочка выводит сумму вокселей за 4096
    RunOverflow { decoded: usize, count: usize },
    /// Поток кончился, а вокселей меньше 4096
    Incomplete { decoded: usize },
    /// После 4096 вокселей остались лишние байты
    TrailingBytes { extra: usize },
}

/// Закодировать чанк в байтовый буфер
pub fn encode_chunk(chunk: &Chunk) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_ENCODED_SIZE);

    let pos = chunk.pos();
    out.extend_from_slice(&pos.x.to_be_bytes());
    out.extend_from_slice(&pos.y.to_be_bytes());
    out.extend_from_slice(&pos.z.to_be_bytes());
    out.extend_from_slice(&[0u8; 4]);

    let voxels = chunk.voxels();
    let mut i = 0;
    while i < CHUNK_VOLUME {
        let value = voxels[i];
        // Максимальная цепочка равных вокселей
        let mut run = 1;
        while i + run < CHUNK_VOLUME && voxels[i + run] == value {
            run += 1;
        }

        let header = if run >= 2 {
            REPEAT_FLAG | run as u16
        } else {
            run as u16
        };
        out.extend_from_slice(&header.to_be_bytes());
        out.extend_from_slice(&value.to_bits().to_be_bytes());
        i += run;
    }
    // Цикл всегда доходит до 4096 - хвост сброшен по построению

    out
}

#[inline]
fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([bytes[at], bytes[at + 1]])
}

/// Раскодировать чанк из байтового буфера.
/// Поток обязан дать ровно 4096 вокселей и закончиться.
pub fn decode_chunk(bytes: &[u8]) -> Result<Chunk, CodecError> {
    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::TruncatedHeader { len: bytes.len() });
    }

    let pos = ChunkPos::new(
        read_i32(bytes, 0),
        read_i32(bytes, 4),
        read_i32(bytes, 8),
    );
    // Байты 12..16 зарезервированы и не проверяются

    let mut chunk = Chunk::filled(pos, Voxel::default());
    let slots = chunk.voxels_mut();

    let mut decoded = 0;
    let mut offset = HEADER_SIZE;
    while decoded < CHUNK_VOLUME {
        if offset + 4 > bytes.len() {
            if offset == bytes.len() {
                return Err(CodecError::Incomplete { decoded });
            }
            return Err(CodecError::UnexpectedEof { offset });
        }

        // Флаг повтора на раскодирование не влияет - длина самодостаточна
        let header = read_u16(bytes, offset);
        let count = (header & COUNT_MASK) as usize;
        if count == 0 {
            return Err(CodecError::EmptyRun { offset });
        }
        if decoded + count > CHUNK_VOLUME {
            return Err(CodecError::RunOverflow { decoded, count });
        }

        let value = Voxel::from_bits(read_u16(bytes, offset + 2));
        for slot in &mut slots[decoded..decoded + count] {
            *slot = value;
        }
        decoded += count;
        offset += 4;
    }

    if offset != bytes.len() {
        return Err(CodecError::TrailingBytes {
            extra: bytes.len() - offset,
        });
    }
    Ok(chunk)
}
