use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values, keyed by index
pub trait Backend<I, K> {
    fn get(&self, index: &I) -> Option<&K>;

    /// Store `value` for `index`; an existing value is kept
    fn insert(&mut self, index: I, value: K);

    /// Number of indices holding a value
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense table for `usize` indices, grown to the largest index stored
#[derive(Debug)]
pub struct VecBackend<K> {
    slots: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            filled: 0,
        }
    }

    /// Table pre-sized for indices `0..len`
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots, filled: 0 }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.slots.get(*index).and_then(Option::as_ref)
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        let slot = &mut self.slots[index];
        if slot.is_none() {
            *slot = Some(value);
            self.filled += 1;
        }
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// Sparse table for any hashable index
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    map: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.map.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.map.entry(index).or_insert(value);
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
