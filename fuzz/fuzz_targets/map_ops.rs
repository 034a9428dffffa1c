#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate arbitrary;
extern crate collbench;

use arbitrary::Arbitrary;
use collbench::{MapCollection, MapKind};

#[derive(Debug, Arbitrary)]
enum Op {
    Put(u8, u8),
    Get(u8),
    RemoveKey(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    for kind in MapKind::ALL {
        let mut map = MapCollection::new(kind);
        let mut model = std::collections::BTreeMap::new();
        // first-insertion order, the order IndexMap must reproduce
        let mut inserted: Vec<u8> = Vec::new();

        for op in &ops {
            match *op {
                Op::Put(k, v) => {
                    let old = model.insert(k, v);
                    if old.is_none() {
                        inserted.push(k);
                    }
                    assert_eq!(map.put(k, v), old);
                }
                Op::Get(k) => {
                    assert_eq!(map.get(&k), model.get(&k).copied());
                }
                Op::RemoveKey(k) => {
                    let old = model.remove(&k);
                    if old.is_some() {
                        inserted.retain(|x| *x != k);
                    }
                    assert_eq!(map.remove_key(&k), old);
                }
            }
            assert_eq!(map.len(), model.len());
        }

        let keys = map.keys().collect::<Vec<_>>();
        match kind {
            MapKind::BTree => {
                assert_eq!(keys, model.keys().copied().collect::<Vec<_>>());
            }
            MapKind::Indexed => {
                assert_eq!(keys, inserted);
            }
            MapKind::Hash | MapKind::Concurrent => {
                let mut keys = keys;
                keys.sort_unstable();
                assert_eq!(keys, model.keys().copied().collect::<Vec<_>>());
            }
        }
    }
});
