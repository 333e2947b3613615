/// 評価値キャッシュの1エントリ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalEntry {
    pub hash: u64,
    pub score: i32,
}

/// 葉の静的評価だけを覚える固定長テーブル
///
/// 探索値は保存しないので、キャッシュの有無で探索結果は変わらない。
/// 衝突時は新しい方で上書きする。
pub struct EvalCache {
    entries: Vec<Option<EvalEntry>>,
    hits: usize,
}

impl EvalCache {
    pub fn new(num_entries: usize) -> Self {
        let num_entries = num_entries.max(1);
        Self {
            entries: vec![None; num_entries],
            hits: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = None;
        }
        self.hits = 0;
    }

    fn index(&self, hash: u64) -> usize {
        (hash % self.entries.len() as u64) as usize
    }

    pub fn get(&mut self, hash: u64) -> Option<i32> {
        let idx = self.index(hash);
        match self.entries[idx] {
            Some(entry) if entry.hash == hash => {
                self.hits += 1;
                Some(entry.score)
            }
            _ => None,
        }
    }

    pub fn store(&mut self, hash: u64, score: i32) {
        let idx = self.index(hash);
        self.entries[idx] = Some(EvalEntry { hash, score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let mut cache = EvalCache::new(16);
        assert!(cache.is_empty());
        cache.store(42, -90);
        assert_eq!(cache.get(42), Some(-90));
        assert_eq!(cache.get(43), None);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_collision_overwrites() {
        let mut cache = EvalCache::new(4);
        cache.store(1, 10);
        cache.store(5, 20);
        // 同じスロットなので古い方は消える
        assert_eq!(cache.get(1), None);
        assert_eq!(cache.get(5), Some(20));
    }

    #[test]
    fn test_clear() {
        let mut cache = EvalCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.store(7, 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
    }
}
