// ============================================
// Config - Конфигурация мира
// ============================================
// JSON-файл с сидом, каталогом сохранения и режимом высот.
// Любая проблема с файлом - предупреждение в лог и дефолты,
// запуск не срывается.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::worldgen::HeightMode;

/// Конфигурация мира
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Сид генерации (для нового мира; существующий хранит свой)
    pub seed: i32,
    /// Каталог сохранения мира
    pub save_dir: PathBuf,
    /// Режим карты высот
    pub height_mode: HeightMode,
    /// Радиус стартовой области в чанках
    pub region_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            save_dir: PathBuf::from("world"),
            height_mode: HeightMode::default(),
            region_radius: 2,
        }
    }
}

impl WorldConfig {
    /// Загрузить конфиг из JSON-файла; при любой ошибке - дефолты
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "Failed to read config {}: {}, using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to parse config {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
