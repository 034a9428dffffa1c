#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate arbitrary;
extern crate collbench;

use arbitrary::Arbitrary;
use collbench::{ListCollection, SequenceKind};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(u8),
    InsertAt(u8, u8),
    Get(u8),
    RemoveAt(u8),
    Len,
}

fuzz_target!(|ops: Vec<Op>| {
    for kind in SequenceKind::ALL {
        let mut list = ListCollection::new(kind);
        let mut model = Vec::new();

        for op in &ops {
            match *op {
                Op::Append(v) => {
                    list.append(v);
                    model.push(v);
                }
                Op::InsertAt(i, v) => {
                    let i = i as usize;
                    let ok = list.insert_at(v, i).is_ok();
                    assert_eq!(ok, i <= model.len());
                    if ok {
                        model.insert(i, v);
                    }
                }
                Op::Get(i) => {
                    let i = i as usize;
                    assert_eq!(list.get(i).ok(), model.get(i).copied());
                }
                Op::RemoveAt(i) => {
                    let i = i as usize;
                    let expected = if i < model.len() {
                        Some(model.remove(i))
                    } else {
                        None
                    };
                    assert_eq!(list.remove_at(i).ok(), expected);
                }
                Op::Len => {
                    assert_eq!(list.len(), model.len());
                }
            }
        }

        assert_eq!(list.len(), model.len());
        for (i, v) in model.iter().enumerate() {
            assert_eq!(list.get(i).ok(), Some(*v));
        }
    }
});
