use std::hint::black_box;
use std::io::Write;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::mapping::{MapCollection, MapKind};
use crate::record::Person;

const LOOKUP_KEYS: usize = 6;
const REMOVE_KEYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTest {
    Fill,
    ShowOrder,
    Get,
    Remove,
}

impl MapTest {
    pub const MENU: [(i64, MapTest); 4] = [
        (1, MapTest::Fill),
        (2, MapTest::ShowOrder),
        (3, MapTest::Get),
        (4, MapTest::Remove),
    ];

    pub const PROMPT: &'static str =
        "Enter collection test (fill - 1, show collection order - 2, get - 3, remove - 4): ";

    pub fn from_selector(selector: i64) -> Option<MapTest> {
        super::lookup(&MapTest::MENU, selector)
    }

    pub fn run(self, config: &BenchConfig, out: &mut impl Write) -> Result<()> {
        tracing::debug!(test = ?self, count = config.count, "running map test");
        for kind in MapKind::ALL {
            self.run_on(kind, config, out)?;
        }
        Ok(())
    }

    fn run_on<W: Write>(self, kind: MapKind, config: &BenchConfig, out: &mut W) -> Result<()> {
        let label = kind.name();

        match self {
            MapTest::Fill => {
                let mut map = MapCollection::new(kind);
                super::timed(label, out, |_| {
                    seed(&mut map, config);
                    Ok(())
                })?;
            }
            MapTest::ShowOrder => {
                let map = seeded(kind, config);
                super::show_order(label, "key", map.keys(), config.sample, out)?;
            }
            MapTest::Get => {
                let map = seeded(kind, config);
                let keys = numbered_keys(LOOKUP_KEYS);
                super::timed(label, out, |_| {
                    for _ in 0..config.count {
                        for key in &keys {
                            black_box(map.get(key));
                        }
                    }
                    Ok(())
                })?;
            }
            MapTest::Remove => {
                let mut map = seeded(kind, config);
                let keys = numbered_keys(REMOVE_KEYS);
                super::timed(label, out, |_| {
                    for _ in 0..config.count {
                        for key in &keys {
                            black_box(map.remove_key(key));
                        }
                    }
                    Ok(())
                })?;
            }
        }
        Ok(())
    }
}

/// Keys `"1"` up to but excluding the seed volume, each mapped to a
/// distinct person.
fn seed(map: &mut MapCollection<String, Person>, config: &BenchConfig) {
    for i in 1..config.seed_volume() {
        map.put(i.to_string(), Person::new(20, format!("Name - {i}")));
    }
}

fn seeded(kind: MapKind, config: &BenchConfig) -> MapCollection<String, Person> {
    let mut map = MapCollection::new(kind);
    seed(&mut map, config);
    map
}

fn numbered_keys(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}
