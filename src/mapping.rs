use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use dashmap::DashMap;
use indexmap::IndexMap;

/// Keyed container operations shared by every map backing.
///
/// Lookups and removals of absent keys are not errors: they return `None`.
pub trait Mapping<K, V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn get(&self, key: &K) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    /// Keys in the backing's own iteration order.
    fn keys(&self) -> Box<dyn Iterator<Item = K> + '_>;
}

impl<K, V> Mapping<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        HashMap::get(self, key).cloned()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(HashMap::keys(self).cloned())
    }
}

impl<K, V> Mapping<K, V> for IndexMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        IndexMap::get(self, key).cloned()
    }

    // shift_remove keeps the remaining entries in insertion order
    fn remove(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(IndexMap::keys(self).cloned())
    }
}

impl<K, V> Mapping<K, V> for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        BTreeMap::get(self, key).cloned()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(BTreeMap::keys(self).cloned())
    }
}

impl<K, V> Mapping<K, V> for DashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn len(&self) -> usize {
        DashMap::len(self)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        DashMap::get(self, key).map(|entry| entry.value().clone())
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        DashMap::remove(self, key).map(|(_, value)| value)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(self.iter().map(|entry| entry.key().clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Hash,
    Indexed,
    BTree,
    Concurrent,
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [
        MapKind::Hash,
        MapKind::Indexed,
        MapKind::BTree,
        MapKind::Concurrent,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MapKind::Hash => "HashMap",
            MapKind::Indexed => "IndexMap",
            MapKind::BTree => "BTreeMap",
            MapKind::Concurrent => "DashMap",
        }
    }

    /// Only the concurrent backing may be mutated from several threads.
    pub const fn is_concurrent(self) -> bool {
        matches!(self, MapKind::Concurrent)
    }

    pub fn backing<K, V>(self) -> Box<dyn Mapping<K, V>>
    where
        K: Eq + Hash + Ord + Clone + 'static,
        V: Clone + 'static,
    {
        match self {
            MapKind::Hash => Box::new(HashMap::new()),
            MapKind::Indexed => Box::new(IndexMap::new()),
            MapKind::BTree => Box::new(BTreeMap::new()),
            MapKind::Concurrent => Box::new(DashMap::new()),
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct MapCollection<K, V> {
    kind: MapKind,
    items: Box<dyn Mapping<K, V>>,
}

impl<K, V> MapCollection<K, V>
where
    K: Eq + Hash + Ord + Clone + 'static,
    V: Clone + 'static,
{
    pub fn new(kind: MapKind) -> MapCollection<K, V> {
        MapCollection {
            kind,
            items: kind.backing(),
        }
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts or overwrites, returning the value that was replaced.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.items.put(key, value)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.items.get(key)
    }

    pub fn remove_key(&mut self, key: &K) -> Option<V> {
        self.items.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.items.keys()
    }
}
