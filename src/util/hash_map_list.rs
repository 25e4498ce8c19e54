use std::{borrow::Borrow, collections::HashMap, hash::Hash};

/// Simple wrapper to make functionality easier for interfacing with `HashMap<K, Vec<T>>`. Handles
/// the logic surrounding initialising a new [Vec] when a new value is inserted with a unique key.
/// Allows for key collisions to be handled by appending the value to a [Vec], rather than over
/// writing it.
pub struct HashMapList<K, V>(HashMap<K, Vec<V>>);

impl<K, V> HashMapList<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty [HashMapList].
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Retrieves a list of values by key, in insertion order. Will return an empty slice if there
    /// are no items that match the provided key.
    pub fn get<Q>(&self, k: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.0.get(k).map(|v| v.as_slice()).unwrap_or_default()
    }

    /// Inserts a value with a given key into the collection. If there is no existing [Vec] for the
    /// key, an empty one will be initialised before the value is inserted.
    pub fn insert(&mut self, k: K, v: V) {
        self.0.entry(k).or_default().push(v);
    }

    /// Removes the first value under `k` that satisfies `predicate`. Keys left without values are
    /// dropped from the map.
    pub fn remove_first<Q, P>(&mut self, k: &Q, predicate: P) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        P: FnMut(&V) -> bool,
    {
        let list = self.0.get_mut(k)?;
        let position = list.iter().position(predicate)?;
        let value = list.remove(position);

        if list.is_empty() {
            self.0.remove(k);
        }

        Some(value)
    }
}

impl<K, V> Default for HashMapList<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
