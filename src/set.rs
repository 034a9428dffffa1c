use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

/// Membership operations shared by every set backing.
pub trait Set<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `false` when an equal element was already present.
    fn add(&mut self, item: T) -> bool;

    fn remove(&mut self, item: &T) -> bool;

    fn contains(&self, item: &T) -> bool;

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T: Eq + Hash> Set<T> for HashSet<T> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(HashSet::iter(self))
    }
}

impl<T: Eq + Hash> Set<T> for IndexSet<T> {
    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.shift_remove(item)
    }

    fn contains(&self, item: &T) -> bool {
        IndexSet::contains(self, item)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(IndexSet::iter(self))
    }
}

impl<T: Ord> Set<T> for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        BTreeSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BTreeSet::iter(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Hash,
    Indexed,
    BTree,
}

impl SetKind {
    pub const ALL: [SetKind; 3] = [SetKind::Hash, SetKind::Indexed, SetKind::BTree];

    pub const fn name(self) -> &'static str {
        match self {
            SetKind::Hash => "HashSet",
            SetKind::Indexed => "IndexSet",
            SetKind::BTree => "BTreeSet",
        }
    }

    pub fn backing<T: Eq + Hash + Ord + 'static>(self) -> Box<dyn Set<T>> {
        match self {
            SetKind::Hash => Box::new(HashSet::new()),
            SetKind::Indexed => Box::new(IndexSet::new()),
            SetKind::BTree => Box::new(BTreeSet::new()),
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct SetCollection<T> {
    kind: SetKind,
    items: Box<dyn Set<T>>,
}

impl<T: Eq + Hash + Ord + 'static> SetCollection<T> {
    pub fn new(kind: SetKind) -> SetCollection<T> {
        SetCollection {
            kind,
            items: kind.backing(),
        }
    }

    pub fn kind(&self) -> SetKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: T) -> bool {
        self.items.add(item)
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TaggedPerson;
    use proptest::prelude::*;

    #[test]
    fn add_is_idempotent() {
        for kind in SetKind::ALL {
            let mut set = SetCollection::new(kind);
            assert!(set.add(TaggedPerson::new(1, 20, "Name - 1")));
            assert!(!set.add(TaggedPerson::new(1, 55, "Name - 1")), "{kind}");
            assert_eq!(set.len(), 1, "{kind}");
        }
    }

    #[test]
    fn same_name_different_id_are_distinct() {
        for kind in SetKind::ALL {
            let mut set = SetCollection::new(kind);
            for id in 1..=3 {
                set.add(TaggedPerson::new(id, 20, "Name - 1"));
            }
            assert_eq!(set.len(), 3, "{kind}");
            assert!(set.contains(&TaggedPerson::new(2, 0, "Name - 1")), "{kind}");
        }
    }

    #[test]
    fn removing_absent_element_is_a_no_op() {
        for kind in SetKind::ALL {
            let mut set = SetCollection::new(kind);
            set.add(TaggedPerson::new(1, 20, "Name - 1"));
            assert!(!set.remove(&TaggedPerson::new(1, 30, "Name 1")), "{kind}");
            assert!(!set.remove(&TaggedPerson::new(2, 20, "Name - 1")), "{kind}");
            assert_eq!(set.len(), 1, "{kind}");
            assert!(set.remove(&TaggedPerson::new(1, 0, "Name - 1")), "{kind}");
            assert!(set.is_empty(), "{kind}");
        }
    }

    #[test]
    fn indexed_set_iterates_in_insertion_order() {
        let mut set = SetCollection::new(SetKind::Indexed);
        for name in ["c", "a", "d", "b"] {
            set.add(TaggedPerson::new(1, 0, name));
        }
        set.remove(&TaggedPerson::new(1, 0, "a"));
        let names: Vec<&str> = set.iter().map(TaggedPerson::name).collect();
        assert_eq!(names, ["c", "d", "b"]);
    }

    #[test]
    fn btree_set_iterates_by_name() {
        let mut set = SetCollection::new(SetKind::BTree);
        for (id, name) in [(3, "b"), (1, "c"), (2, "a"), (1, "b")] {
            set.add(TaggedPerson::new(id, 0, name));
        }
        let seen: Vec<(&str, u32)> = set.iter().map(|p| (p.name(), p.id())).collect();
        assert_eq!(seen, [("a", 2), ("b", 1), ("b", 3), ("c", 1)]);
    }

    proptest! {
        #[test]
        fn btree_set_ascends(values in prop::collection::vec(any::<i32>(), 0..300)) {
            let mut set = SetCollection::new(SetKind::BTree);
            for v in &values {
                set.add(*v);
            }
            let seen: Vec<i32> = set.iter().copied().collect();
            prop_assert!(seen.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn backings_agree_on_membership(
            ops in prop::collection::vec((any::<bool>(), 0..24_u8), 0..200)
        ) {
            for kind in SetKind::ALL {
                let mut set = SetCollection::new(kind);
                let mut model = BTreeSet::new();
                for &(add, value) in &ops {
                    if add {
                        prop_assert_eq!(set.add(value), model.insert(value));
                    } else {
                        prop_assert_eq!(set.remove(&value), model.remove(&value));
                    }
                    prop_assert_eq!(set.len(), model.len());
                }
                for value in 0..24_u8 {
                    prop_assert_eq!(set.contains(&value), model.contains(&value));
                }
            }
        }
    }
}
