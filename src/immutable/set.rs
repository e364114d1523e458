use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexSet;
use indexmap::set::Iter;

use super::DuplicateElement;
use crate::util::result::ResultExtension;

/// A read-only, shared set of unique elements, iterated in the order they were provided.
///
/// Two sets are equal if they contain the same elements, regardless of order. There is no way to
/// add or remove elements after construction:
/// ```compile_fail
/// # use startup_common::immutable::ImmutableSet;
/// let mut set = ImmutableSet::of([1, 2, 3]);
/// set.insert(4);
/// ```
pub struct ImmutableSet<T> {
    inner: Arc<IndexSet<T>>,
}

impl<T> ImmutableSet<T> {
    /// Creates a new, empty ImmutableSet.
    pub fn new() -> ImmutableSet<T> {
        ImmutableSet {
            inner: Arc::new(IndexSet::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over all elements in the set, in the order they were provided.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Hash + Eq> ImmutableSet<T> {
    /// Creates an ImmutableSet containing exactly the provided elements.
    ///
    /// # Errors
    /// Returns a [`DuplicateElement`] holding the position of the first element that is equal to
    /// one before it.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::{DuplicateElement, ImmutableSet};
    /// assert!(ImmutableSet::try_of([1, 2, 3]).is_ok());
    /// assert_eq!(ImmutableSet::try_of([1, 2, 1]).err(), Some(DuplicateElement { index: 2 }));
    /// ```
    pub fn try_of<const N: usize>(elements: [T; N]) -> Result<ImmutableSet<T>, DuplicateElement> {
        let mut set = IndexSet::with_capacity(N);

        for (index, item) in elements.into_iter().enumerate() {
            if !set.insert(item) {
                return Err(DuplicateElement { index });
            }
        }

        Ok(ImmutableSet {
            inner: Arc::new(set),
        })
    }

    /// Creates an ImmutableSet containing exactly the provided elements.
    ///
    /// # Panics
    /// Panics if any two of the elements are equal. See [`ImmutableSet::try_of`] for a
    /// non-panicking alternative.
    #[track_caller]
    pub fn of<const N: usize>(elements: [T; N]) -> ImmutableSet<T> {
        Self::try_of(elements).throw()
    }

    /// Creates an ImmutableSet by cloning every element yielded by a borrowed collection. Equal
    /// elements are collapsed into the first one seen. Later changes to the source collection
    /// don't affect the copy.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::ImmutableSet;
    /// let set = ImmutableSet::copy_of(&vec!["a", "b", "a"]);
    /// assert_eq!(set, ImmutableSet::of(["b", "a"]));
    /// ```
    pub fn copy_of<'a, I>(collection: I) -> ImmutableSet<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        collection.into_iter().cloned().collect()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &ImmutableSet<T>) -> bool {
        self.inner.is_subset(&*other.inner)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &ImmutableSet<T>) -> bool {
        other.is_subset(self)
    }
}

impl<T> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ImmutableSet<T> {
    fn clone(&self) -> Self {
        ImmutableSet {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableSet {
            inner: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Hash + Eq> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<T: Hash + Eq> Eq for ImmutableSet<T> {}

impl<T: Debug> Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}
