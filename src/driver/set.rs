use std::io::Write;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::record::TaggedPerson;
use crate::set::{SetCollection, SetKind};

const IDS: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetTest {
    Fill,
    ShowOrder,
    Remove,
}

impl SetTest {
    pub const MENU: [(i64, SetTest); 3] = [
        (1, SetTest::Fill),
        (2, SetTest::ShowOrder),
        (3, SetTest::Remove),
    ];

    pub const PROMPT: &'static str =
        "Enter collection test (fill - 1, show collection order - 2, remove - 3): ";

    pub fn from_selector(selector: i64) -> Option<SetTest> {
        super::lookup(&SetTest::MENU, selector)
    }

    pub fn run(self, config: &BenchConfig, out: &mut impl Write) -> Result<()> {
        tracing::debug!(test = ?self, count = config.count, "running set test");
        for kind in SetKind::ALL {
            self.run_on(kind, config, out)?;
        }
        Ok(())
    }

    fn run_on<W: Write>(self, kind: SetKind, config: &BenchConfig, out: &mut W) -> Result<()> {
        let label = kind.name();

        match self {
            SetTest::Fill => {
                let mut set = SetCollection::new(kind);
                super::timed(label, out, |_| {
                    seed(&mut set, config);
                    Ok(())
                })?;
            }
            SetTest::ShowOrder => {
                let set = seeded(kind, config);
                let names = set.iter().map(TaggedPerson::name);
                super::show_order(label, "name", names, config.sample, out)?;
            }
            SetTest::Remove => {
                let mut set = seeded(kind, config);
                let misses = removal_misses();
                super::timed(label, out, |_| {
                    for _ in 0..config.count {
                        for miss in &misses {
                            set.remove(miss);
                        }
                    }
                    Ok(())
                })?;
            }
        }
        Ok(())
    }
}

fn seed(set: &mut SetCollection<TaggedPerson>, config: &BenchConfig) {
    for i in 1..config.seed_volume() {
        let name = format!("Name - {i}");
        for id in IDS {
            set.add(TaggedPerson::new(id, 20, name.as_str()));
        }
    }
}

/// Six removals per round, each id twice. None of them are present, so the
/// timed section measures misses.
fn removal_misses() -> Vec<TaggedPerson> {
    IDS.iter()
        .chain(IDS.iter())
        .map(|&id| TaggedPerson::new(id, 30, "Name 1"))
        .collect()
}

fn seeded(kind: SetKind, config: &BenchConfig) -> SetCollection<TaggedPerson> {
    let mut set = SetCollection::new(kind);
    seed(&mut set, config);
    set
}
