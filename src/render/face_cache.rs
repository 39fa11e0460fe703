//! Bounded LRU cache of [`FaceSet`]s keyed by UI scale.
//!
//! Every distinct scale needs its own faces, and parsing a font is far more
//! expensive than drawing a wallpaper's worth of glyphs. The cache is shared
//! by all renders in the process; one mutex guards lookup-and-promote and
//! load-insert-evict so the recency order can't be torn by concurrent
//! requests.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::fonts::{FaceSet, FontSource};
use crate::error::WallpaperError;

/// Default number of scales kept alive.
pub const DEFAULT_CAPACITY: usize = 64;

/// Cache key for a scale factor.
///
/// Fixed precision keeps float noise (1.0 vs 0.99999994) from splitting
/// what is logically the same scale into separate entries.
pub fn scale_key(scale: f32) -> String {
    format!("{:.4}", scale)
}

// ============================================================================
// LRU ARENA
// ============================================================================

struct Slot<V> {
    key: String,
    value: V,
    /// Toward the most recently used end
    prev: Option<usize>,
    /// Toward the least recently used end
    next: Option<usize>,
}

/// Fixed-capacity LRU map: slots live in a `Vec`, linked by index into a
/// recency list, with a `HashMap` from key to slot.
///
/// Once full, inserting reuses the least recently used slot in place, so
/// the arena never grows past `capacity`.
pub struct LruMap<V> {
    slots: Vec<Slot<V>>,
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<V> LruMap<V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Membership test that leaves the recency order alone.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Look up `key` and mark it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.detach(idx);
        self.push_front(idx);
        Some(&self.slots[idx].value)
    }

    /// Insert or replace `key` as most recently used.
    ///
    /// Returns the key evicted to make room, if any.
    pub fn insert(&mut self, key: String, value: V) -> Option<String> {
        if let Some(&idx) = self.index.get(&key) {
            self.slots[idx].value = value;
            self.detach(idx);
            self.push_front(idx);
            return None;
        }

        if self.slots.len() < self.capacity {
            let idx = self.slots.len();
            self.slots.push(Slot {
                key: key.clone(),
                value,
                prev: None,
                next: None,
            });
            self.index.insert(key, idx);
            self.push_front(idx);
            return None;
        }

        // Full: recycle the least recently used slot
        let idx = self.tail?;
        self.detach(idx);
        let slot = &mut self.slots[idx];
        let evicted = std::mem::replace(&mut slot.key, key.clone());
        slot.value = value;
        self.index.remove(&evicted);
        self.index.insert(key, idx);
        self.push_front(idx);
        Some(evicted)
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.slots.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            keys.push(self.slots[idx].key.as_str());
            cursor = self.slots[idx].next;
        }
        keys
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None if self.head == Some(idx) => self.head = next,
            None => {}
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None if self.tail == Some(idx) => self.tail = prev,
            None => {}
        }
        self.slots[idx].prev = None;
        self.slots[idx].next = None;
    }

    fn push_front(&mut self, idx: usize) {
        self.slots[idx].next = self.head;
        if let Some(h) = self.head {
            self.slots[h].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

// ============================================================================
// FACE CACHE
// ============================================================================

/// Process-wide cache of ready-to-draw faces.
///
/// Share it between renders with an `Arc`.
pub struct FaceCache {
    source: Box<dyn FontSource>,
    entries: Mutex<LruMap<Arc<FaceSet>>>,
}

impl FaceCache {
    pub fn new(source: impl FontSource + 'static, capacity: usize) -> Self {
        Self {
            source: Box::new(source),
            entries: Mutex::new(LruMap::new(capacity)),
        }
    }

    pub fn with_default_capacity(source: impl FontSource + 'static) -> Self {
        Self::new(source, DEFAULT_CAPACITY)
    }

    /// Faces for `scale`, loading and parsing the font on a miss.
    ///
    /// The lock is held across the load so two requests for the same new
    /// scale never both parse and insert it.
    pub fn get(&self, scale: f32) -> Result<Arc<FaceSet>, WallpaperError> {
        let key = scale_key(scale);
        let mut entries = self.lock();

        if let Some(faces) = entries.get(&key) {
            debug!("[faces] hit {}", key);
            return Ok(Arc::clone(faces));
        }

        debug!("[faces] miss {}, loading font", key);
        let faces = Arc::new(FaceSet::load(self.source.read_bytes()?, scale)?);
        if let Some(evicted) = entries.insert(key, Arc::clone(&faces)) {
            debug!("[faces] evicted {}", evicted);
        }
        Ok(faces)
    }

    /// Whether faces for `scale` are cached. Does not affect eviction order.
    pub fn contains(&self, scale: f32) -> bool {
        self.lock().contains(&scale_key(scale))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    fn lock(&self) -> MutexGuard<'_, LruMap<Arc<FaceSet>>> {
        // No statement leaves the map half-linked
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
