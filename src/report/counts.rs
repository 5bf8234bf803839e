use std::ops::AddAssign;

use serde::{ser::SerializeMap, Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

use crate::lexer::tokens::Category;

/// Per-category tallies for one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    counts: [usize; Category::COUNT],
}

impl Counts {
    pub fn new() -> Self {
        Counts::default()
    }

    pub fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Number of lexemes counted, errors included.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every category with its count, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::iter().map(|category| (category, self.get(category)))
    }

    pub fn merge(&mut self, other: &Counts) {
        for (slot, count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *slot += count;
        }
    }
}

impl AddAssign<&Counts> for Counts {
    fn add_assign(&mut self, other: &Counts) {
        self.merge(other);
    }
}

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, count) in self.iter() {
            map.serialize_entry(&category, &count)?;
        }
        map.end()
    }
}
