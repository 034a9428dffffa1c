use std::io::Write;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::record::Person;
use crate::sequence::{ListCollection, SequenceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTest {
    Fill,
    Get,
    RemoveMiddle,
    /// Removes the record at `len - 1`, a true tail removal. Linked backings
    /// are fast here, unlike at the middle.
    RemoveEnd,
    AddMiddle,
}

impl ListTest {
    pub const MENU: [(i64, ListTest); 5] = [
        (1, ListTest::Fill),
        (2, ListTest::Get),
        (3, ListTest::RemoveMiddle),
        (4, ListTest::RemoveEnd),
        (5, ListTest::AddMiddle),
    ];

    pub const PROMPT: &'static str = "Enter collection test (fill - 1, get - 2, remove middle - 3, remove end - 4, add middle - 5): ";

    pub fn from_selector(selector: i64) -> Option<ListTest> {
        super::lookup(&ListTest::MENU, selector)
    }

    pub fn run(self, config: &BenchConfig, out: &mut impl Write) -> Result<()> {
        tracing::debug!(test = ?self, count = config.count, "running list test");
        for kind in SequenceKind::ALL {
            self.run_on(kind, config, out)?;
        }
        Ok(())
    }

    fn run_on<W: Write>(self, kind: SequenceKind, config: &BenchConfig, out: &mut W) -> Result<()> {
        let label = kind.name();
        let middle = config.middle();

        match self {
            ListTest::Fill => {
                let mut list = ListCollection::new(kind);
                super::timed(label, out, |_| {
                    seed(&mut list, config);
                    Ok(())
                })?;
            }
            ListTest::Get => {
                let list = seeded(kind, config);
                super::timed(label, out, |out| {
                    let person = list.get(middle)?;
                    writeln!(out, "Person: {}", person.name())?;
                    Ok(())
                })?;
            }
            ListTest::RemoveMiddle => {
                let mut list = seeded(kind, config);
                super::timed(label, out, |_| list.remove_at(middle).map(drop))?;
            }
            ListTest::RemoveEnd => {
                let mut list = seeded(kind, config);
                let last = tail_index(&list);
                super::timed(label, out, |_| list.remove_at(last).map(drop))?;
            }
            ListTest::AddMiddle => {
                let mut list = seeded(kind, config);
                super::timed(label, out, |_| {
                    list.insert_at(Person::new(25, "Name 4"), middle)
                })?;
            }
        }
        Ok(())
    }
}

fn seed(list: &mut ListCollection<Person>, config: &BenchConfig) {
    for _ in 0..config.count {
        list.append(Person::new(30, "Name 1"));
        list.append(Person::new(22, "Name 2"));
        list.append(Person::new(40, "Name 3"));
    }
}

fn tail_index(list: &ListCollection<Person>) -> usize {
    list.len().saturating_sub(1)
}

fn seeded(kind: SequenceKind, config: &BenchConfig) -> ListCollection<Person> {
    let mut list = ListCollection::new(kind);
    seed(&mut list, config);
    list
}
