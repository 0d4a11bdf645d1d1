// ============================================
// World Meta - Заголовок файла мира
// ============================================
// world.dat: магия + версия + сид, сериализуется bincode.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::chunk_file::SaveError;

/// Магическое число "EVOX" в ASCII
pub const MAGIC_NUMBER: [u8; 4] = [0x45, 0x56, 0x4f, 0x58];

/// Версия формата сохранения
pub const SAVE_VERSION: u32 = 1;

/// Имя файла метаданных в каталоге мира
const META_FILE: &str = "world.dat";

/// Метаданные мира
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Магическое число для валидации
    pub magic: [u8; 4],
    /// Версия формата
    pub version: u32,
    /// Сид генерации
    pub seed: i32,
}

impl WorldMeta {
    pub fn new(seed: i32) -> Self {
        Self {
            magic: MAGIC_NUMBER,
            version: SAVE_VERSION,
            seed,
        }
    }

    /// Проверка валидности заголовка
    pub fn is_valid(&self) -> bool {
        self.magic == MAGIC_NUMBER && self.version == SAVE_VERSION
    }
}

/// Записать метаданные мира
pub fn write_meta(dir: &Path, meta: &WorldMeta) -> Result<(), SaveError> {
    let bytes = bincode::serialize(meta).map_err(|e| SaveError::Serialize(e.to_string()))?;
    fs::write(dir.join(META_FILE), bytes)?;
    Ok(())
}

/// Прочитать метаданные мира; None если файла ещё нет
pub fn read_meta(dir: &Path) -> Result<Option<WorldMeta>, SaveError> {
    let path = dir.join(META_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(path)?;
    let meta: WorldMeta =
        bincode::deserialize(&bytes).map_err(|e| SaveError::Deserialize(e.to_string()))?;

    if meta.magic != MAGIC_NUMBER {
        return Err(SaveError::InvalidMagic);
    }
    if meta.version != SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion(meta.version));
    }
    Ok(Some(meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("endless_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_meta_roundtrip() {
        let dir = temp_dir("meta_roundtrip");
        write_meta(&dir, &WorldMeta::new(-12345)).unwrap();

        let meta = read_meta(&dir).unwrap().unwrap();
        assert!(meta.is_valid());
        assert_eq!(meta.seed, -12345);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_meta_missing_is_none() {
        let dir = temp_dir("meta_missing");
        assert!(read_meta(&dir).unwrap().is_none());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_bad_magic_rejected() {
        let dir = temp_dir("meta_bad_magic");
        let mut meta = WorldMeta::new(1);
        meta.magic = [0xde, 0xad, 0xbe, 0xef];
        write_meta(&dir, &meta).unwrap();

        match read_meta(&dir) {
            Err(SaveError::InvalidMagic) => {}
            other => panic!("ожидали InvalidMagic, получили {:?}", other),
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_version_rejected() {
        let dir = temp_dir("meta_bad_version");
        let mut meta = WorldMeta::new(1);
        meta.version = 99;
        write_meta(&dir, &meta).unwrap();

        match read_meta(&dir) {
            Err(SaveError::UnsupportedVersion(99)) => {}
            other => panic!("ожидали UnsupportedVersion, получили {:?}", other),
        }
        std::fs::remove_dir_all(&dir).ok();
    }
}
