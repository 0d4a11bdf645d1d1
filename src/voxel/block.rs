// ============================================
// Voxel - Упакованная ячейка мира
// ============================================
// 16 бит на воксель: тип в битах 15..4, ориентация в битах 3..0.
// Та же раскладка используется кодеком при записи на диск.

/// BlockType - numeric_id типа вокселя (12 бит, 0..4095)
pub type BlockType = u16;

// Константы типов (соответствуют генератору высот)
pub const SOLID: BlockType = 0;
pub const AIR: BlockType = 1;

/// Маска типа (12 бит)
const TYPE_MASK: u16 = 0x0fff;
/// Маска ориентации (4 бита)
const ORIENT_MASK: u16 = 0x000f;

/// Воксель: тип + ориентация, упакованные в u16.
/// Равенство по обоим полям - именно оно группирует RLE-цепочки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Voxel {
    data: u16,
}

impl Voxel {
    /// Создать воксель; лишние биты обрезаются масками
    #[inline]
    pub fn new(block_type: BlockType, orientation: u8) -> Self {
        Self {
            data: ((block_type & TYPE_MASK) << 4) | (orientation as u16 & ORIENT_MASK),
        }
    }

    /// Воксель земли
    #[inline]
    pub fn solid() -> Self {
        Self::new(SOLID, 0)
    }

    /// Воксель воздуха
    #[inline]
    pub fn air() -> Self {
        Self::new(AIR, 0)
    }

    /// Тип вокселя (биты 15..4)
    #[inline]
    pub fn block_type(&self) -> BlockType {
        self.data >> 4
    }

    /// Ориентация (биты 3..0)
    #[inline]
    pub fn orientation(&self) -> u8 {
        (self.data & ORIENT_MASK) as u8
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.block_type() == AIR
    }

    /// Упакованное представление (для кодека)
    #[inline]
    pub fn to_bits(&self) -> u16 {
        self.data
    }

    /// Из упакованного представления
    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        Self { data: bits }
    }
}
