//! Open-addressing hash table used as the primary store
//!
//! Linear probing with tombstones. Slots are a three-state enum so that
//! empty, occupied, and logically-deleted are mutually exclusive by
//! construction.
//!
//! # Invariants Enforced
//!
//! - live slots / capacity never exceeds 0.65
//! - capacity only grows, via 2×capacity + 1 with full rehash
//! - `keys()` reports live keys in physical slot order

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Load-factor ceiling checked before every insertion.
const MAX_LOAD_FACTOR: f64 = 0.65;

/// Small prime starting capacity, chosen to reduce clustering.
const INITIAL_CAPACITY: usize = 17;

enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

/// Polynomial rolling hasher: `h = 31·h + byte`, folded to a non-negative
/// value by magnitude. Deliberately simple; probe behavior under this hash
/// is part of the table's tested contract.
struct PolyHasher {
    state: i64,
}

impl PolyHasher {
    fn new() -> Self {
        Self { state: 0 }
    }
}

impl Hasher for PolyHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(31).wrapping_add(i64::from(byte));
        }
    }

    fn finish(&self) -> u64 {
        self.state.unsigned_abs()
    }
}

/// A resizable open-addressing hash table.
pub struct HashTable<K, V> {
    slots: Vec<Slot<K, V>>,
    live: usize,
}

impl<K: Eq + Hash, V> HashTable<K, V> {
    /// Creates an empty table with the initial capacity of 17.
    pub fn new() -> Self {
        Self {
            slots: Self::empty_slots(INITIAL_CAPACITY),
            live: 0,
        }
    }

    /// Inserts or overwrites the value under `key`.
    ///
    /// Resizes first when the insertion would push the load factor past
    /// 0.65. A probe that passes tombstones reuses the earliest one seen,
    /// which bounds probe-sequence growth.
    pub fn put(&mut self, key: K, value: V) {
        if (self.live + 1) as f64 / self.slots.len() as f64 > MAX_LOAD_FACTOR {
            self.grow();
        }

        let start = self.probe_start(&key);
        let mut idx = start;
        let mut first_tombstone: Option<usize> = None;

        loop {
            match &self.slots[idx] {
                Slot::Empty => {
                    let target = first_tombstone.unwrap_or(idx);
                    self.slots[target] = Slot::Occupied { key, value };
                    self.live += 1;
                    return;
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(idx);
                    }
                }
                Slot::Occupied { key: existing, .. } => {
                    if *existing == key {
                        self.slots[idx] = Slot::Occupied { key, value };
                        return;
                    }
                }
            }
            idx = (idx + 1) % self.slots.len();
            if idx == start {
                break;
            }
        }

        // Full wrap without an empty slot: every slot is occupied or
        // tombstoned. The load-factor ceiling guarantees a tombstone exists.
        if let Some(target) = first_tombstone {
            self.slots[target] = Slot::Occupied { key, value };
            self.live += 1;
        }
    }

    /// Looks up the value under `key`.
    ///
    /// Probing stops at the first genuinely empty slot or after one full
    /// wrap; tombstones and non-matching live entries are skipped.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.probe_start(key);
        let mut idx = start;

        loop {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, value } if k.borrow() == key => return Some(value),
                _ => {}
            }
            idx = (idx + 1) % self.slots.len();
            if idx == start {
                return None;
            }
        }
    }

    /// True when `key` has a live entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Logically deletes the entry under `key`.
    ///
    /// The slot is tombstoned and stays eligible for reuse by a later
    /// insertion; capacity never shrinks. Returns true if a live entry
    /// was found.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.probe_start(key);
        let mut idx = start;

        loop {
            match &self.slots[idx] {
                Slot::Empty => return false,
                Slot::Occupied { key: k, .. } if k.borrow() == key => {
                    self.slots[idx] = Slot::Tombstone;
                    self.live -= 1;
                    return true;
                }
                _ => {}
            }
            idx = (idx + 1) % self.slots.len();
            if idx == start {
                return false;
            }
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when the table holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All live keys in physical slot order.
    ///
    /// Slot order, not insertion order, is the documented contract.
    pub fn keys(&self) -> Vec<&K> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, .. } => Some(key),
                _ => None,
            })
            .collect()
    }

    fn probe_start<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = PolyHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }

    /// Grows to 2×capacity + 1 and rehashes every live entry by reinserting
    /// it. Tombstones are dropped in the process.
    fn grow(&mut self) {
        let new_capacity = self.slots.len() * 2 + 1;
        let old = std::mem::replace(&mut self.slots, Self::empty_slots(new_capacity));
        self.live = 0;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.put(key, value);
            }
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Slot<K, V>> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        slots
    }
}

impl<K: Eq + Hash, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let mut table = HashTable::new();
        table.put("alpha".to_string(), 1);
        table.put("beta".to_string(), 2);

        assert_eq!(table.get("alpha"), Some(&1));
        assert_eq!(table.get("beta"), Some(&2));
        assert_eq!(table.get("gamma"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let mut table = HashTable::new();
        table.put("k".to_string(), 1);
        table.put("k".to_string(), 2);

        assert_eq!(table.get("k"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_factor_never_exceeded() {
        let mut table = HashTable::new();
        for i in 0..200 {
            table.put(format!("key{}", i), i);
            let load = table.len() as f64 / table.capacity() as f64;
            assert!(load <= MAX_LOAD_FACTOR, "load factor {} too high", load);
        }
    }

    #[test]
    fn test_capacity_only_grows() {
        let mut table = HashTable::new();
        assert_eq!(table.capacity(), 17);

        let mut last = table.capacity();
        for i in 0..80 {
            table.put(format!("key{}", i), i);
            assert!(table.capacity() >= last);
            last = table.capacity();
        }
        // 17 -> 35 -> 71 -> 143; the ceiling 0.65 * 143 is not reached by 80.
        assert_eq!(table.capacity(), 143);
    }

    #[test]
    fn test_resize_retains_all_entries() {
        let mut table = HashTable::new();
        for i in 0..100 {
            table.put(format!("key{}", i), i);
        }
        // Multiple resizes happened (17 -> 35 -> 71 -> 143 -> 287);
        // everything survives.
        for i in 0..100 {
            assert_eq!(table.get(format!("key{}", i).as_str()), Some(&i));
        }
    }

    #[test]
    fn test_remove_is_logical() {
        let mut table = HashTable::new();
        table.put("a".to_string(), 1);
        let capacity = table.capacity();

        assert!(table.remove("a"));
        assert!(!table.remove("a"));
        assert_eq!(table.get("a"), None);
        assert_eq!(table.len(), 0);
        assert_eq!(table.capacity(), capacity);
    }

    #[test]
    fn test_tombstone_slot_reused() {
        let mut table = HashTable::new();
        table.put("a".to_string(), 1);
        table.put("b".to_string(), 2);
        table.remove("a");

        table.put("a".to_string(), 3);
        assert_eq!(table.get("a"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_probes_past_tombstone() {
        // Force a collision chain, then tombstone the first link and make
        // sure the second link is still reachable.
        let mut table: HashTable<String, i32> = HashTable::new();
        let mut colliding: Vec<String> = Vec::new();
        let probe = |t: &HashTable<String, i32>, k: &str| t.probe_start(k);

        let mut i = 0;
        while colliding.len() < 2 {
            let key = format!("c{}", i);
            if colliding.is_empty() || probe(&table, &key) == probe(&table, &colliding[0]) {
                colliding.push(key);
            }
            i += 1;
        }

        table.put(colliding[0].clone(), 10);
        table.put(colliding[1].clone(), 20);
        table.remove(colliding[0].as_str());

        assert_eq!(table.get(colliding[1].as_str()), Some(&20));
    }

    #[test]
    fn test_keys_in_physical_slot_order() {
        let mut table = HashTable::new();
        for key in ["delta", "alpha", "omega"] {
            table.put(key.to_string(), ());
        }

        let keys = table.keys();
        assert_eq!(keys.len(), 3);

        // Repeated calls agree, and the order matches a raw slot walk.
        assert_eq!(keys, table.keys());

        let expected: Vec<&String> = table
            .slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, .. } => Some(key),
                _ => None,
            })
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_poly_hash_matches_reference() {
        // "Ab" -> 31*'A' + 'b' = 31*65 + 98 = 2113
        let mut hasher = PolyHasher::new();
        hasher.write(b"Ab");
        assert_eq!(hasher.finish(), 2113);
    }

    #[test]
    fn test_poly_hash_folds_by_magnitude() {
        // A wrapped-negative state folds to its magnitude.
        let hasher = PolyHasher { state: -2113 };
        assert_eq!(hasher.finish(), 2113);
    }
}
