#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate arbitrary;
extern crate collbench;

use arbitrary::Arbitrary;
use collbench::{SetCollection, SetKind, TaggedPerson};

#[derive(Debug, Arbitrary)]
enum Op {
    Add(u8, u8),
    Remove(u8, u8),
    Contains(u8, u8),
}

fn person(id: u8, name: u8) -> TaggedPerson {
    // few ids and names so that hash collisions between ids are common
    TaggedPerson::new(u32::from(id % 4), 0, format!("Name - {}", name % 16))
}

fuzz_target!(|ops: Vec<Op>| {
    for kind in SetKind::ALL {
        let mut set = SetCollection::new(kind);
        let mut model = std::collections::BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Add(id, name) => {
                    assert_eq!(set.add(person(id, name)), model.insert(person(id, name)));
                }
                Op::Remove(id, name) => {
                    assert_eq!(set.remove(&person(id, name)), model.remove(&person(id, name)));
                }
                Op::Contains(id, name) => {
                    assert_eq!(
                        set.contains(&person(id, name)),
                        model.contains(&person(id, name))
                    );
                }
            }
            assert_eq!(set.len(), model.len());
        }

        if kind == SetKind::BTree {
            let a = set.iter().collect::<Vec<_>>();
            let m = model.iter().collect::<Vec<_>>();
            assert_eq!(a, m);
        }
    }
});
