// ============================================
// World - Оркестрация чанков
// ============================================
// Мир владеет единственным хранилищем резидентных чанков и сидом.
// Резидентность и сохранённость независимы: unload не пишет на
// диск, save не выгружает из памяти. Все операции однопоточные;
// rayon используется только для чистой генерации до вставки.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::config::WorldConfig;
use crate::save::{self, SaveError, WorldMeta};
use crate::store::{hash_position, ChunkMap};
use crate::voxel::{Chunk, ChunkPos, Voxel};
use crate::worldgen::TerrainGenerator;

/// Ошибки операций мира
#[derive(Debug)]
pub enum WorldError {
    Save(SaveError),
    /// Операция требует резидентного чанка
    NotResident(ChunkPos),
}

impl From<SaveError> for WorldError {
    fn from(e: SaveError) -> Self {
        WorldError::Save(e)
    }
}

impl From<std::io::Error> for WorldError {
    fn from(e: std::io::Error) -> Self {
        WorldError::Save(SaveError::Io(e))
    }
}

/// Мир: хранилище чанков + генератор + каталог сохранения
pub struct World {
    chunks: ChunkMap,
    generator: TerrainGenerator,
    save_dir: PathBuf,
    seed: i32,
}

impl World {
    /// Открыть мир в каталоге из конфига. Существующий world.dat
    /// побеждает сид конфига - иначе загруженные чанки разойдутся
    /// с догенерированными.
    pub fn open(config: &WorldConfig) -> Result<Self, WorldError> {
        std::fs::create_dir_all(&config.save_dir)?;

        let seed = match save::read_meta(&config.save_dir)? {
            Some(meta) => {
                log::info!(
                    "Opened world at {} (seed {})",
                    config.save_dir.display(),
                    meta.seed
                );
                meta.seed
            }
            None => {
                save::write_meta(&config.save_dir, &WorldMeta::new(config.seed))?;
                log::info!(
                    "Created world at {} (seed {})",
                    config.save_dir.display(),
                    config.seed
                );
                config.seed
            }
        };

        Ok(Self {
            chunks: ChunkMap::new(),
            generator: TerrainGenerator::new(seed, config.height_mode),
            save_dir: config.save_dir.clone(),
            seed,
        })
    }

    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Число резидентных чанков
    #[inline]
    pub fn resident_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_resident(&self, pos: ChunkPos) -> bool {
        self.chunks.contains(hash_position(pos))
    }

    /// Воксель по мировым координатам. При промахе чанк
    /// загружается или генерируется.
    pub fn get(&mut self, x: i32, y: i32, z: i32) -> Result<Voxel, WorldError> {
        let pos = ChunkPos::of_voxel(x, y, z);
        let key = self.ensure_resident(pos)?;
        let (lx, ly, lz) = ChunkPos::local_of(x, y, z);
        let chunk = self.chunks.get(key).ok_or(WorldError::NotResident(pos))?;
        Ok(chunk.get(lx, ly, lz))
    }

    /// Изменить воксель по мировым координатам.
    /// На диск не пишет - сохранение явное, через save_chunk.
    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> Result<(), WorldError> {
        let pos = ChunkPos::of_voxel(x, y, z);
        let key = self.ensure_resident(pos)?;
        let (lx, ly, lz) = ChunkPos::local_of(x, y, z);
        let chunk = self
            .chunks
            .get_mut(key)
            .ok_or(WorldError::NotResident(pos))?;
        chunk.set(lx, ly, lz, voxel);
        Ok(())
    }

    /// Сгенерировать чанк и вставить в хранилище,
    /// замещая резидентный с той же позицией
    pub fn generate_chunk(&mut self, pos: ChunkPos) {
        let chunk = self.generator.generate_chunk(pos);
        self.chunks.insert(hash_position(pos), chunk);
        log::debug!("Generated chunk ({}, {}, {})", pos.x, pos.y, pos.z);
    }

    /// Загрузить чанк с диска; без файла - сгенерировать.
    /// Битый файл - ошибка, а не тихая регенерация.
    pub fn load_chunk(&mut self, pos: ChunkPos) -> Result<(), WorldError> {
        match save::read_chunk(&self.save_dir, pos)? {
            Some(chunk) => {
                log::debug!("Loaded chunk ({}, {}, {}) from disk", pos.x, pos.y, pos.z);
                self.chunks.insert(hash_position(pos), chunk);
            }
            None => self.generate_chunk(pos),
        }
        Ok(())
    }

    /// Выгрузить чанк из памяти без сохранения.
    /// Для долговечности сперва save_chunk.
    pub fn unload_chunk(&mut self, pos: ChunkPos) -> bool {
        self.chunks.remove(hash_position(pos)).is_some()
    }

    /// Сохранить резидентный чанк на диск
    pub fn save_chunk(&self, pos: ChunkPos) -> Result<(), WorldError> {
        let chunk = self
            .chunks
            .get(hash_position(pos))
            .ok_or(WorldError::NotResident(pos))?;
        save::write_chunk(&self.save_dir, chunk)?;
        Ok(())
    }

    /// Сохранить все резидентные чанки (снимок в порядке слотов)
    pub fn save_all_chunks(&self) -> Result<usize, WorldError> {
        let entries = self.chunks.entries();
        for &(_, chunk) in &entries {
            save::write_chunk(&self.save_dir, chunk)?;
        }
        log::info!("Saved {} chunks", entries.len());
        Ok(entries.len())
    }

    /// Сгенерировать прямоугольную область чанков (включительно).
    /// Генерация чистая и идёт на воркерах, вставка последовательная -
    /// хранилище мутирует только владелец.
    pub fn generate_region(&mut self, min: ChunkPos, max: ChunkPos) -> usize {
        let mut positions = Vec::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    positions.push(ChunkPos::new(x, y, z));
                }
            }
        }

        let generator = self.generator;
        let chunks: Vec<Chunk> = positions
            .par_iter()
            .map(|pos| generator.generate_chunk(*pos))
            .collect();

        let count = chunks.len();
        for chunk in chunks {
            self.chunks.insert(hash_position(chunk.pos()), chunk);
        }
        log::info!("Generated region of {} chunks", count);
        count
    }

    /// Ключ резидентного чанка; при промахе загрузить-или-сгенерировать
    fn ensure_resident(&mut self, pos: ChunkPos) -> Result<u32, WorldError> {
        let key = hash_position(pos);
        if !self.chunks.contains(key) {
            self.load_chunk(pos)?;
        }
        Ok(key)
    }
}
