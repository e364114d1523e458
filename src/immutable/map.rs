use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::{Entry, Iter, Keys, Values};

use super::DuplicateKey;
use crate::util::result::ResultExtension;

/// A read-only, shared map from unique keys to values, iterated in the order entries were
/// provided.
///
/// Two maps are equal if they contain the same entries, regardless of order. There is no way to
/// insert, replace or remove entries after construction:
/// ```compile_fail
/// # use startup_common::immutable::ImmutableMap;
/// let mut map = ImmutableMap::of([("a", 1)]);
/// map.insert("b", 2);
/// ```
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `clone` | `O(1)` |
/// | `copy_of` | `O(n)` |
///
/// \* Average case.
pub struct ImmutableMap<K, V> {
    inner: Arc<IndexMap<K, V>>,
}

impl<K, V> ImmutableMap<K, V> {
    /// Creates a new, empty ImmutableMap.
    pub fn new() -> ImmutableMap<K, V> {
        ImmutableMap {
            inner: Arc::new(IndexMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over all entries in the map, in the order they were provided.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.inner.keys()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.inner.values()
    }
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Creates an ImmutableMap containing exactly the provided entries.
    ///
    /// # Errors
    /// Returns a [`DuplicateKey`] holding the position of the first entry with a key equal to one
    /// before it.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::{DuplicateKey, ImmutableMap};
    /// assert!(ImmutableMap::try_of([("a", 1), ("b", 2)]).is_ok());
    /// assert_eq!(
    ///     ImmutableMap::try_of([("a", 1), ("a", 2)]).err(),
    ///     Some(DuplicateKey { index: 1 })
    /// );
    /// ```
    pub fn try_of<const N: usize>(entries: [(K, V); N]) -> Result<ImmutableMap<K, V>, DuplicateKey> {
        let mut map = IndexMap::with_capacity(N);

        for (index, (key, value)) in entries.into_iter().enumerate() {
            match map.entry(key) {
                Entry::Occupied(_) => return Err(DuplicateKey { index }),
                Entry::Vacant(entry) => {
                    entry.insert(value);
                },
            }
        }

        Ok(ImmutableMap {
            inner: Arc::new(map),
        })
    }

    /// Creates an ImmutableMap containing exactly the provided entries.
    ///
    /// # Panics
    /// Panics if any two of the keys are equal. See [`ImmutableMap::try_of`] for a non-panicking
    /// alternative.
    #[track_caller]
    pub fn of<const N: usize>(entries: [(K, V); N]) -> ImmutableMap<K, V> {
        Self::try_of(entries).throw()
    }

    /// Creates an ImmutableMap by cloning every entry yielded by a borrowed map. If the same key is
    /// yielded more than once, the last value wins. Later changes to the source map don't affect
    /// the copy.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use startup_common::immutable::ImmutableMap;
    /// let mut source = BTreeMap::from([("a", 1)]);
    /// let copy = ImmutableMap::copy_of(&source);
    /// source.insert("b", 2);
    /// assert_eq!(copy, ImmutableMap::of([("a", 1)]));
    /// ```
    pub fn copy_of<'a, I>(map: I) -> ImmutableMap<K, V>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: Clone + 'a,
        V: Clone + 'a,
    {
        map.into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }
}

impl<K, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ImmutableMap<K, V> {
    fn clone(&self) -> Self {
        ImmutableMap {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, Q> Index<&Q> for ImmutableMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    /// Panics if `key` isn't present in the map.
    fn index(&self, key: &Q) -> &Self::Output {
        &self.inner[key]
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ImmutableMap {
            inner: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: Debug, V: Debug> Debug for ImmutableMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
