// ============================================
// Chunk Map - Хешмапа открытой адресации
// ============================================
// Слоты в три состояния: Empty / Tombstone / Occupied.
// Tombstone сохраняет цепочку пробирования после удаления -
// иначе поиск ключа, вставленного за удалённым слотом,
// обрывался бы ложным промахом.
//
// Ключ - это хеш позиции, не сама позиция: мапа не умеет
// восстановить (x,y,z) из ключа, вызывающий обязан хешировать
// позицию сам. Две разные позиции с одинаковым хешем мапа
// различить не может.

use crate::voxel::Chunk;

/// Начальная ёмкость (всегда степень двойки - только удваивается)
pub const INITIAL_CAPACITY: usize = 16;

enum Slot {
    Empty,
    Tombstone,
    Occupied { key: u32, chunk: Chunk },
}

/// Хранилище чанков по 32-битному ключу
pub struct ChunkMap {
    slots: Vec<Slot>,
    size: usize,
    tombstones: usize,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        Self {
            slots,
            size: 0,
            tombstones: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Вставить чанк по ключу. Существующий чанк с тем же ключом
    /// заменяется и возвращается.
    pub fn insert(&mut self, key: u32, chunk: Chunk) -> Option<Chunk> {
        let capacity = self.capacity();
        let mut index = key as usize % capacity;
        let mut reuse: Option<usize> = None;

        loop {
            match &mut self.slots[index] {
                Slot::Occupied {
                    key: slot_key,
                    chunk: slot_chunk,
                } if *slot_key == key => {
                    return Some(std::mem::replace(slot_chunk, chunk));
                }
                Slot::Occupied { .. } => {
                    index = (index + 1) % capacity;
                }
                Slot::Tombstone => {
                    // Запоминаем первый могильник, но пробируем дальше:
                    // тот же ключ может лежать глубже в цепочке
                    if reuse.is_none() {
                        reuse = Some(index);
                    }
                    index = (index + 1) % capacity;
                }
                Slot::Empty => {
                    let target = reuse.unwrap_or(index);
                    if matches!(self.slots[target], Slot::Tombstone) {
                        self.tombstones -= 1;
                    }
                    self.slots[target] = Slot::Occupied { key, chunk };
                    self.size += 1;

                    if self.size >= capacity / 2 {
                        self.resize(capacity * 2);
                    } else if self.size + self.tombstones >= capacity / 2 {
                        // Могильники накопились - уплотняем без роста
                        self.rehash();
                    }
                    return None;
                }
            }
        }
    }

    /// Найти чанк по ключу. Промах - не ошибка.
    pub fn get(&self, key: u32) -> Option<&Chunk> {
        self.find(key).map(|index| match &self.slots[index] {
            Slot::Occupied { chunk, .. } => chunk,
            _ => unreachable!(),
        })
    }

    pub fn get_mut(&mut self, key: u32) -> Option<&mut Chunk> {
        let index = self.find(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { chunk, .. } => Some(chunk),
            _ => unreachable!(),
        }
    }

    /// Удалить чанк по ключу; слот становится могильником
    pub fn remove(&mut self, key: u32) -> Option<Chunk> {
        let index = self.find(key)?;
        let old = std::mem::replace(&mut self.slots[index], Slot::Tombstone);
        self.size -= 1;
        self.tombstones += 1;
        match old {
            Slot::Occupied { chunk, .. } => Some(chunk),
            _ => unreachable!(),
        }
    }

    #[inline]
    pub fn contains(&self, key: u32) -> bool {
        self.find(key).is_some()
    }

    /// Сбросить все слоты; ёмкость не меняется
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
        self.tombstones = 0;
    }

    /// Снимок занятых ключей в порядке слотов
    pub fn keys(&self) -> Vec<u32> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, .. } => Some(*key),
                _ => None,
            })
            .collect()
    }

    /// Снимок занятых пар (ключ, чанк) в порядке слотов
    pub fn entries(&self) -> Vec<(u32, &Chunk)> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, chunk } => Some((*key, chunk)),
                _ => None,
            })
            .collect()
    }

    /// Перестроить таблицу в новую ёмкость. Могильники пропадают,
    /// занятые записи переносятся линейным проходом по старому массиву.
    /// Синхронная операция - O(старой ёмкости).
    pub fn resize(&mut self, new_capacity: usize) {
        let old_slots = std::mem::take(&mut self.slots);
        self.slots = Vec::with_capacity(new_capacity);
        self.slots.resize_with(new_capacity, || Slot::Empty);
        self.tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, chunk } = slot {
                Self::place(&mut self.slots, key, chunk);
            }
        }
    }

    /// Перестройка в текущую ёмкость - уплотнение после удалений
    pub fn rehash(&mut self) {
        self.resize(self.capacity());
    }

    /// Индекс слота с данным ключом. Пробируем +1 с переносом,
    /// могильники не обрывают цепочку, пустой слот - промах.
    fn find(&self, key: u32) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = key as usize % capacity;
        loop {
            match &self.slots[index] {
                Slot::Occupied { key: slot_key, .. } if *slot_key == key => return Some(index),
                Slot::Empty => return None,
                _ => index = (index + 1) % capacity,
            }
        }
    }

    /// Сырое размещение при перестройке: ключи уникальны,
    /// могильников в свежем массиве нет
    fn place(slots: &mut [Slot], key: u32, chunk: Chunk) {
        let capacity = slots.len();
        let mut index = key as usize % capacity;
        loop {
            match slots[index] {
                Slot::Empty => {
                    slots[index] = Slot::Occupied { key, chunk };
                    return;
                }
                _ => index = (index + 1) % capacity,
            }
        }
    }
}

impl Default for ChunkMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::hash_position;
    use crate::voxel::{Chunk, ChunkPos, Voxel};

    fn chunk_at(x: i32, y: i32, z: i32) -> Chunk {
        Chunk::filled(ChunkPos::new(x, y, z), Voxel::air())
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = ChunkMap::new();
        let pos = ChunkPos::new(2, -1, 0);
        let key = hash_position(pos);

        assert!(map.insert(key, chunk_at(2, -1, 0)).is_none());
        assert_eq!(map.len(), 1);
        assert!(map.contains(key));
        assert_eq!(map.get(key).unwrap().pos(), pos);
    }

    #[test]
    fn test_get_absent_is_miss() {
        let map = ChunkMap::new();
        assert!(map.get(12345).is_none());
        assert!(!map.contains(12345));
    }

    #[test]
    fn test_insert_same_key_replaces() {
        let mut map = ChunkMap::new();
        map.insert(7, chunk_at(0, 0, 0));
        let old = map.insert(7, chunk_at(9, 9, 9));
        assert_eq!(old.unwrap().pos(), ChunkPos::new(0, 0, 0));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(7).unwrap().pos(), ChunkPos::new(9, 9, 9));
    }

    #[test]
    fn test_resize_preserves_membership() {
        let mut map = ChunkMap::new();
        let mut keys = Vec::new();
        // Несколько кратных начальной ёмкости - пройдёт серию ресайзов
        for i in 0..40 {
            let pos = ChunkPos::new(i, -i, i * 3);
            let key = hash_position(pos);
            map.insert(key, Chunk::filled(pos, Voxel::air()));
            keys.push((key, pos));
        }

        assert_eq!(map.len(), 40);
        assert!(map.capacity() >= 128);
        for (key, pos) in keys {
            assert_eq!(map.get(key).unwrap().pos(), pos);
        }
    }

    #[test]
    fn test_remove() {
        let mut map = ChunkMap::new();
        map.insert(3, chunk_at(1, 0, 0));
        let removed = map.remove(3);
        assert_eq!(removed.unwrap().pos(), ChunkPos::new(1, 0, 0));
        assert_eq!(map.len(), 0);
        assert!(map.get(3).is_none());
        // Повторное удаление - обычный промах
        assert!(map.remove(3).is_none());
    }

    #[test]
    fn test_removal_keeps_probe_chain() {
        // Три ключа с одним домашним слотом (5 mod 16): цепочка 5 -> 6 -> 7.
        // Удаление среднего не должно прятать хвост цепочки.
        let mut map = ChunkMap::new();
        map.insert(5, chunk_at(1, 0, 0));
        map.insert(21, chunk_at(2, 0, 0));
        map.insert(37, chunk_at(3, 0, 0));

        map.remove(21);
        assert_eq!(map.get(5).unwrap().pos(), ChunkPos::new(1, 0, 0));
        assert_eq!(map.get(37).unwrap().pos(), ChunkPos::new(3, 0, 0));

        // Новый ключ той же цепочки переиспользует могильник
        map.insert(53, chunk_at(4, 0, 0));
        assert_eq!(map.get(53).unwrap().pos(), ChunkPos::new(4, 0, 0));
        assert_eq!(map.get(37).unwrap().pos(), ChunkPos::new(3, 0, 0));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_rehash_compacts() {
        let mut map = ChunkMap::new();
        for key in [5u32, 21, 37, 53] {
            map.insert(key, chunk_at(key as i32, 0, 0));
        }
        map.remove(21);
        map.remove(53);

        map.rehash();
        assert_eq!(map.len(), 2);
        assert!(map.get(5).is_some());
        assert!(map.get(37).is_some());
        assert!(map.get(21).is_none());
    }

    #[test]
    fn test_clear() {
        let mut map = ChunkMap::new();
        for i in 0..10 {
            let pos = ChunkPos::new(i, 0, 0);
            map.insert(hash_position(pos), Chunk::filled(pos, Voxel::air()));
        }
        let capacity = map.capacity();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert!(map.keys().is_empty());
    }

    #[test]
    fn test_entries_snapshot() {
        let mut map = ChunkMap::new();
        let a = hash_position(ChunkPos::new(1, 2, 3));
        let b = hash_position(ChunkPos::new(-4, 5, -6));
        map.insert(a, chunk_at(1, 2, 3));
        map.insert(b, chunk_at(-4, 5, -6));

        let entries = map.entries();
        assert_eq!(entries.len(), 2);
        let keys = map.keys();
        assert!(keys.contains(&a));
        assert!(keys.contains(&b));
        // Порядок снимка - порядок слотов
        assert_eq!(
            entries.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            keys
        );
    }

    #[test]
    fn test_many_insert_remove_cycles_terminate() {
        // Могильники не должны съесть таблицу: уплотнение
        // срабатывает до того, как пропадут пустые слоты
        let mut map = ChunkMap::new();
        for round in 0..200u32 {
            let key = round.wrapping_mul(0x9e37_79b9) | 1;
            map.insert(key, chunk_at(round as i32, 0, 0));
            assert!(map.contains(key));
            map.remove(key);
        }
        assert!(map.is_empty());
    }
}
