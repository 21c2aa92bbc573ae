/// Keyed accumulator that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    index: std::collections::HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    /// Returns the value for `key`, inserting `init()` first if `key` is new.
    pub fn entry_or_insert_with<F>(&mut self, key: K, init: F) -> &mut V
    where
        K: Clone + Eq + std::hash::Hash,
        F: FnOnce() -> V,
    {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, init()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Clone + Eq + std::hash::Hash,
        V: Default + std::ops::AddAssign,
    {
        *self.entry_or_insert_with(key, V::default) += value;
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

#[cfg(test)]
impl<K, V> Aggregate<K, V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
        Q: Eq + std::hash::Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Iterates in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate() {
        let mut agg = Aggregate::<&'static str, i32>::default();
        assert!(agg.is_empty());

        agg.add("b", 10);
        agg.add("a", -100);
        assert!(!agg.is_empty());
        assert_eq!(agg.get("b"), Some(&10));
        assert_eq!(agg.get("a"), Some(&-100));
        assert!(agg.get("c").is_none());

        agg.add("b", -3);
        agg.add("c", 0);
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.get("b"), Some(&7));
        assert!(agg.contains_key("c"));

        let got = agg.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>();
        assert_eq!(got, vec![("b", 7), ("a", -100), ("c", 0)]);

        let agg2 = got.into_iter().collect::<Aggregate<_, _>>();
        assert_eq!(agg, agg2);
    }

    #[test]
    fn test_entry_or_insert_with_runs_init_once() {
        let mut agg = Aggregate::<String, Vec<u8>>::default();
        let mut calls = 0;
        for i in 0..3 {
            agg.entry_or_insert_with("k".to_string(), || {
                calls += 1;
                Vec::new()
            })
            .push(i);
        }
        assert_eq!(calls, 1);
        assert_eq!(agg.get("k"), Some(&vec![0, 1, 2]));
        assert_eq!(agg.keys().collect::<Vec<_>>(), vec!["k"]);
    }
}
