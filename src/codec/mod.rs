// ============================================
// Codec Module - Бинарный кодек чанков
// ============================================
// RLE-формат для файлов чанков: фиксированный заголовок
// позиции плюс поток цепочек вокселей.

mod rle;

pub use rle::{decode_chunk, encode_chunk, CodecError, HEADER_SIZE, MAX_ENCODED_SIZE};
