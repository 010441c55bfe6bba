//! Owning ordered map on top of the intrusive tree.
//!
//! [`SplayMap`] keeps its nodes in a [`NodeArena`] and its root and key
//! comparator in its own fields, driving the algorithms in [`crate::ops`]
//! directly. Lookups splay, so they take `&mut self`.

use crate::arena::NodeArena;
use crate::error::ArenaError;
use crate::iter::Iter;
use crate::ops;
use crate::types::{default_comparator, Node};

/// Arena node of a [`SplayMap`].
#[derive(Clone, Debug)]
pub struct MapNode<K, V> {
    l: Option<u32>,
    r: Option<u32>,
    k: K,
    // `None` for lookup probes and for slots whose value was removed.
    v: Option<V>,
}

impl<K, V> MapNode<K, V> {
    fn new(k: K, v: V) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v: Some(v),
        }
    }

    fn probe(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn value(&self) -> Option<&V> {
        self.v.as_ref()
    }
}

impl<K, V> Node for MapNode<K, V> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

pub struct SplayMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    len: usize,
    comparator: C,
    arena: NodeArena<MapNode<K, V>>,
}

impl<K, V> SplayMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for SplayMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> SplayMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            arena: NodeArena::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.arena.clear();
    }

    /// Key at the root, i.e. the most recently touched key.
    pub fn root_key(&self) -> Option<&K> {
        let root = self.root?;
        self.arena.get(root).map(MapNode::key)
    }

    fn entry(&self, handle: u32) -> Option<(&K, &V)> {
        let node = self.arena.get(handle)?;
        Some((&node.k, node.v.as_ref()?))
    }

    /// Smallest entry. Does not splay.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry(ops::first(self.arena.as_slice(), self.root)?)
    }

    /// Largest entry. Does not splay.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry(ops::last(self.arena.as_slice(), self.root)?)
    }

    /// Entries in ascending key order. Does not splay.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        Iter::new(self.arena.as_slice(), self.root).filter_map(move |h| self.entry(h))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }
}

impl<K, V, C> SplayMap<K, V, C>
where
    K: Clone,
    C: Fn(&K, &K) -> i32,
{
    fn find(&mut self, key: &K) -> Option<u32> {
        let probe = MapNode::probe(key.clone());
        let cmp = &self.comparator;
        ops::search(
            self.arena.as_mut_slice(),
            &mut self.root,
            &probe,
            &|a: &MapNode<K, V>, b: &MapNode<K, V>| cmp(&a.k, &b.k),
        )
    }

    /// Inserts a new entry. Returns `Ok(false)` and leaves the existing value
    /// untouched if the key is already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<bool, ArenaError> {
        let handle = self.arena.alloc(MapNode::new(key, value))?;
        let cmp = &self.comparator;
        let linked = ops::insert(
            self.arena.as_mut_slice(),
            &mut self.root,
            handle,
            &|a: &MapNode<K, V>, b: &MapNode<K, V>| cmp(&a.k, &b.k),
        );
        if linked {
            self.len += 1;
        } else {
            // Duplicate: drop the rejected value and hand the slot back.
            if let Some(node) = self.arena.get_mut(handle) {
                node.v = None;
            }
            self.arena.release(handle)?;
        }
        Ok(linked)
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        let handle = self.find(key)?;
        self.arena.get(handle)?.v.as_ref()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.find(key)?;
        self.arena.get_mut(handle)?.v.as_mut()
    }

    pub fn contains_key(&mut self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Entry with the smallest key strictly greater than `key`.
    pub fn lower_bound(&mut self, key: &K) -> Option<(&K, &V)> {
        let probe = MapNode::probe(key.clone());
        let cmp = &self.comparator;
        let handle = ops::lower_bound(
            self.arena.as_mut_slice(),
            &mut self.root,
            &probe,
            &|a: &MapNode<K, V>, b: &MapNode<K, V>| cmp(&a.k, &b.k),
        )?;
        self.entry(handle)
    }

    /// Removes the entry and returns its value. The slot goes back to the
    /// arena for reuse.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let probe = MapNode::probe(key.clone());
        let cmp = &self.comparator;
        let handle = ops::remove(
            self.arena.as_mut_slice(),
            &mut self.root,
            &probe,
            &|a: &MapNode<K, V>, b: &MapNode<K, V>| cmp(&a.k, &b.k),
        )?;
        self.len -= 1;
        let value = self.arena.get_mut(handle).and_then(|node| node.v.take());
        let released = self.arena.release(handle);
        debug_assert!(released.is_ok(), "unlinked slot {handle} was not live");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_is_strict() {
        let mut map = SplayMap::new();
        for k in [10, 20, 30] {
            assert_eq!(map.insert(k, k * 100), Ok(true));
        }
        assert_eq!(map.lower_bound(&10), Some((&20, &2000)));
        assert_eq!(map.lower_bound(&15), Some((&20, &2000)));
        assert_eq!(map.lower_bound(&5), Some((&10, &1000)));
        assert_eq!(map.lower_bound(&30), None);
    }

    #[test]
    fn duplicate_insert_keeps_value_and_len() {
        let mut map = SplayMap::new();
        assert_eq!(map.insert("a", 1), Ok(true));
        assert_eq!(map.insert("a", 2), Ok(false));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"a"), Some(&1));
    }

    #[test]
    fn duplicate_insert_returns_its_slot() {
        let mut map = SplayMap::new();
        map.insert(1, "one").unwrap();
        map.insert(5, "five").unwrap();
        assert_eq!(map.insert(1, "uno"), Ok(false));
        assert_eq!(map.root_key(), Some(&1));
        assert_eq!(map.arena.len(), 2);
        assert_eq!(map.arena.capacity(), 3);

        map.insert(3, "three").unwrap();
        assert_eq!(map.arena.capacity(), 3);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(&1, &"one"), (&3, &"three"), (&5, &"five")]
        );
    }

    #[test]
    fn remove_keeps_len_and_arena_in_step() {
        let mut map = SplayMap::new();
        for k in 0..4 {
            map.insert(k, k).unwrap();
        }
        assert_eq!(map.remove(&2), Some(2));
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 3);
        assert_eq!(map.arena.len(), 3);
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn removed_slot_is_recycled() {
        let mut map = SplayMap::new();
        map.insert(1, "one").unwrap();
        map.insert(2, "two").unwrap();
        assert_eq!(map.remove(&1), Some("one"));
        assert_eq!(map.remove(&1), None);
        map.insert(3, "three").unwrap();
        assert_eq!(map.arena.capacity(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&2, &"two"), (&3, &"three")]);
    }
}
