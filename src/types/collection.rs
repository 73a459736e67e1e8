//! Collections keyed by an entity identifier.

use std::collections::HashMap;

/// An entity that can live in a [`KeyedCollection`].
pub trait Keyed {
    /// Identifier used as collection key.
    fn key(&self) -> String;
}

/// Insertion-ordered collection without duplicate keys.
///
/// Adding an entity whose key is already present replaces the stored entity
/// in place; its position stays that of the first insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedCollection<T> {
    items: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Keyed> KeyedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, replacing any entity with the same key.
    pub fn add(&mut self, item: T) -> &mut Self {
        let key = item.key();
        match self.positions.get(&key) {
            Some(&position) => self.items[position] = item,
            None => {
                self.positions.insert(key, self.items.len());
                self.items.push(item);
            }
        }
        self
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, item: T) -> Self {
        self.add(item);
        self
    }

    /// Look an entity up by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.positions.get(key).map(|&position| &self.items[position])
    }

    /// Whether an entity with the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// All entities in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the collection, returning the entities in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Keyed> FromIterator<T> for KeyedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = KeyedCollection::new();
        for item in iter {
            collection.add(item);
        }
        collection
    }
}

impl<T> IntoIterator for KeyedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a KeyedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    #[test]
    fn test_insertion_order() {
        let collection: KeyedCollection<Item> = vec![
            Item { id: 3, label: "c" },
            Item { id: 1, label: "a" },
            Item { id: 2, label: "b" },
        ]
        .into_iter()
        .collect();

        let ids: Vec<u32> = collection.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(collection.get("1").map(|i| i.label), Some("a"));
        assert!(collection.get("4").is_none());
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let mut collection = KeyedCollection::new();
        collection
            .add(Item { id: 1, label: "first" })
            .add(Item { id: 2, label: "second" })
            .add(Item { id: 1, label: "replaced" });

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.all()[0].label, "replaced");
        assert_eq!(collection.all()[1].label, "second");
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut collection = KeyedCollection::new().with(Item { id: 1, label: "a" });
        let snapshot = collection.all().to_vec();
        collection.add(Item { id: 2, label: "b" });

        assert_eq!(snapshot.len(), 1);
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
        assert!(KeyedCollection::<Item>::new().is_empty());
    }
}
