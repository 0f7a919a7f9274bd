//! Iterator: walk a collection without exposing how it stores its elements.
//!
//! `Bag` is a multiset. Its iterator yields each distinct item once, with its
//! multiplicity, in the order items were first added.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    #[error("item not in bag: {0}")]
    Missing(String),
}

#[derive(Debug, Clone)]
pub struct Bag<T> {
    counts: HashMap<T, usize>,
    order: Vec<T>,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> Bag<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        let count = self.counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            self.order.push(item);
        }
        *count += 1;
    }

    /// Take one copy of `item` out; the item disappears when its count hits zero.
    pub fn remove(&mut self, item: &T) -> Result<(), BagError> {
        let Some(count) = self.counts.get_mut(item) else {
            return Err(BagError::Missing(format!("{item:?}")));
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(item);
            self.order.retain(|existing| existing != item);
        }
        Ok(())
    }

    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> BagIter<'_, T> {
        BagIter {
            bag: self,
            position: 0,
        }
    }
}

pub struct BagIter<'a, T> {
    bag: &'a Bag<T>,
    position: usize,
}

impl<'a, T: Eq + Hash> Iterator for BagIter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.bag.order.get(self.position)?;
        self.position += 1;
        let count = self.bag.counts.get(item).copied().unwrap_or(0);
        Some((item, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bag.order.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Eq + Hash> ExactSizeIterator for BagIter<'_, T> {}

impl<'a, T: Eq + Hash + Clone + Debug> IntoIterator for &'a Bag<T> {
    type Item = (&'a T, usize);
    type IntoIter = BagIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash + Clone + Debug> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for item in iter {
            bag.add(item);
        }
        bag
    }
}

pub fn demo() -> Vec<String> {
    let mut bag: Bag<&str> = "apple pear apple plum apple pear".split(' ').collect();
    let mut lines: Vec<String> = bag
        .iter()
        .map(|(item, count)| format!("{item} x{count}"))
        .collect();

    if let Err(err) = bag.remove(&"kiwi") {
        lines.push(err.to_string());
    }
    lines.push(format!("{} items, {} distinct", bag.len(), bag.distinct()));
    lines
}
