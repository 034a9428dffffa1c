use std::collections::LinkedList;
use std::fmt;

use parking_lot::Mutex;

use crate::error::{Error, Result, check_index, check_position};

/// Positional container operations shared by every list backing.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: T);

    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    fn get(&self, index: usize) -> Result<T>;

    fn remove(&mut self, index: usize) -> Result<T>;
}

impl<T: Clone> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_position(index, Vec::len(self))?;
        Vec::insert(self, index, item);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, Vec::len(self))?;
        Ok(self[index].clone())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }
}

// std's LinkedList has no positional insert or remove on stable, so both
// split at the index (walking from the nearer end) and splice back.
impl<T: Clone> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_position(index, LinkedList::len(self))?;
        let mut tail = self.split_off(index);
        self.push_back(item);
        self.append(&mut tail);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, LinkedList::len(self))?;
        let len = LinkedList::len(self);
        let found = if index < len / 2 {
            self.iter().nth(index)
        } else {
            self.iter().rev().nth(len - 1 - index)
        };
        found
            .cloned()
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let len = LinkedList::len(self);
        check_index(index, len)?;
        let mut tail = self.split_off(index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed.ok_or(Error::IndexOutOfRange { index, len })
    }
}

/// A vector whose every operation goes through a lock, the way a
/// synchronized list pays for thread safety on each call.
#[derive(Debug)]
pub struct SyncVec<T> {
    inner: Mutex<Vec<T>>,
}

impl<T> SyncVec<T> {
    pub fn new() -> SyncVec<T> {
        SyncVec {
            inner: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for SyncVec<T> {
    fn default() -> SyncVec<T> {
        SyncVec::new()
    }
}

impl<T: Clone> Sequence<T> for SyncVec<T> {
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn push(&mut self, item: T) {
        self.inner.lock().push(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let mut items = self.inner.lock();
        check_position(index, items.len())?;
        items.insert(index, item);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<T> {
        let items = self.inner.lock();
        check_index(index, items.len())?;
        Ok(items[index].clone())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let mut items = self.inner.lock();
        check_index(index, items.len())?;
        Ok(items.remove(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Vec,
    LinkedList,
    SyncVec,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 3] = [
        SequenceKind::Vec,
        SequenceKind::LinkedList,
        SequenceKind::SyncVec,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SequenceKind::Vec => "Vec",
            SequenceKind::LinkedList => "LinkedList",
            SequenceKind::SyncVec => "Mutex<Vec>",
        }
    }

    pub fn backing<T: Clone + 'static>(self) -> Box<dyn Sequence<T>> {
        match self {
            SequenceKind::Vec => Box::new(Vec::new()),
            SequenceKind::LinkedList => Box::new(LinkedList::new()),
            SequenceKind::SyncVec => Box::new(SyncVec::new()),
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// List facade owning exactly one backing for its whole life.
pub struct ListCollection<T> {
    kind: SequenceKind,
    items: Box<dyn Sequence<T>>,
}

impl<T: Clone + 'static> ListCollection<T> {
    pub fn new(kind: SequenceKind) -> ListCollection<T> {
        ListCollection {
            kind,
            items: kind.backing(),
        }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts before `index`; `index == len` appends.
    pub fn insert_at(&mut self, item: T, index: usize) -> Result<()> {
        self.items.insert(index, item)
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.items.get(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.items.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Person;
    use proptest::prelude::*;

    fn seeded(kind: SequenceKind, rounds: usize) -> ListCollection<Person> {
        let mut list = ListCollection::new(kind);
        for _ in 0..rounds {
            list.append(Person::new(30, "Name 1"));
            list.append(Person::new(22, "Name 2"));
            list.append(Person::new(40, "Name 3"));
        }
        list
    }

    #[test]
    fn append_then_get_last() {
        for kind in SequenceKind::ALL {
            let mut list = seeded(kind, 2);
            list.append(Person::new(7, "tail"));
            let last = list.get(list.len() - 1).unwrap();
            assert_eq!(last.name(), "tail", "{kind}");
            assert_eq!(last.age(), 7, "{kind}");
        }
    }

    #[test]
    fn insert_at_shifts_previous_element() {
        for kind in SequenceKind::ALL {
            let mut list = seeded(kind, 3);
            let before = list.get(4).unwrap();
            list.insert_at(Person::new(25, "Name 4"), 4).unwrap();
            assert_eq!(list.get(4).unwrap().name(), "Name 4", "{kind}");
            assert_eq!(list.get(5).unwrap().name(), before.name(), "{kind}");
            assert_eq!(list.len(), 10, "{kind}");
        }
    }

    #[test]
    fn insert_at_len_appends() {
        for kind in SequenceKind::ALL {
            let mut list = seeded(kind, 1);
            list.insert_at(Person::new(1, "end"), 3).unwrap();
            assert_eq!(list.get(3).unwrap().name(), "end", "{kind}");
        }
    }

    #[test]
    fn get_fifth_of_three_rounds() {
        for kind in SequenceKind::ALL {
            let list = seeded(kind, 3);
            assert_eq!(list.len(), 9);
            assert_eq!(list.get(4).unwrap().name(), "Name 2", "{kind}");
        }
    }

    #[test]
    fn remove_at_returns_and_closes_gap() {
        for kind in SequenceKind::ALL {
            let mut list = seeded(kind, 2);
            let removed = list.remove_at(1).unwrap();
            assert_eq!(removed.name(), "Name 2", "{kind}");
            assert_eq!(list.len(), 5, "{kind}");
            assert_eq!(list.get(1).unwrap().name(), "Name 3", "{kind}");
        }
    }

    #[test]
    fn out_of_range_is_an_error() {
        for kind in SequenceKind::ALL {
            let mut list = seeded(kind, 1);
            assert!(matches!(
                list.get(3),
                Err(Error::IndexOutOfRange { index: 3, len: 3 })
            ));
            assert!(matches!(
                list.remove_at(3),
                Err(Error::IndexOutOfRange { index: 3, len: 3 })
            ));
            assert!(matches!(
                list.insert_at(Person::new(0, "x"), 4),
                Err(Error::IndexOutOfRange { index: 4, len: 3 })
            ));
            assert_eq!(list.len(), 3, "{kind}");
        }
    }

    #[test]
    fn empty_list_rejects_reads() {
        for kind in SequenceKind::ALL {
            let mut list: ListCollection<Person> = ListCollection::new(kind);
            assert!(list.is_empty());
            assert!(list.get(0).is_err());
            assert!(list.remove_at(0).is_err());
            list.insert_at(Person::new(0, "only"), 0).unwrap();
            assert_eq!(list.get(0).unwrap().name(), "only");
        }
    }

    #[test]
    fn vec_backing_get_goes_through_bounds_check() {
        let items = vec![1_u8, 2, 3];
        assert_eq!(Sequence::get(&items, 2).ok(), Some(3));
        assert!(matches!(
            Sequence::get(&items, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(items.as_slice().get(3), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(u8),
        Insert(usize, u8),
        Get(usize),
        Remove(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Push),
            (0..40_usize, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (0..40_usize).prop_map(Op::Get),
            (0..40_usize).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn backings_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
            for kind in SequenceKind::ALL {
                let mut list: ListCollection<u8> = ListCollection::new(kind);
                let mut model: Vec<u8> = Vec::new();

                for op in &ops {
                    match *op {
                        Op::Push(v) => {
                            list.append(v);
                            model.push(v);
                        }
                        Op::Insert(i, v) => {
                            let result = list.insert_at(v, i);
                            if i <= model.len() {
                                prop_assert!(result.is_ok());
                                model.insert(i, v);
                            } else {
                                prop_assert!(result.is_err());
                            }
                        }
                        Op::Get(i) => {
                            prop_assert_eq!(list.get(i).ok(), model.as_slice().get(i).copied());
                        }
                        Op::Remove(i) => {
                            let expected = (i < model.len()).then(|| model.remove(i));
                            prop_assert_eq!(list.remove_at(i).ok(), expected);
                        }
                    }
                    prop_assert_eq!(list.len(), model.len());
                }
            }
        }
    }
}
