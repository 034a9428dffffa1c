//! Synthetic records used to populate the collections under test.
//!
//! `Person` compares by name only and is what the list and map tests store.
//! `TaggedPerson` also carries an id that takes part in equality, so three
//! records sharing a name but not an id are three distinct set members.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct Person {
    age: u32,
    name: String,
}

impl Person {
    pub fn new(age: u32, name: impl Into<String>) -> Person {
        Person {
            age,
            name: name.into(),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Person) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Person) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[derive(Debug, Clone)]
pub struct TaggedPerson {
    id: u32,
    age: u32,
    name: String,
}

impl TaggedPerson {
    pub fn new(id: u32, age: u32, name: impl Into<String>) -> TaggedPerson {
        TaggedPerson {
            id,
            age,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for TaggedPerson {
    fn eq(&self, other: &TaggedPerson) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for TaggedPerson {}

// hashing the name alone keeps equal records in the same bucket while
// records that differ only by id collide
impl Hash for TaggedPerson {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for TaggedPerson {
    fn partial_cmp(&self, other: &TaggedPerson) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaggedPerson {
    fn cmp(&self, other: &TaggedPerson) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}
