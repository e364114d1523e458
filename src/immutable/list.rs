use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::slice::Iter;
use std::sync::Arc;

/// A read-only, shared sequence of elements. Similar to an [`Arc<[T]>`](Arc).
///
/// An ImmutableList dereferences to a slice, so all of the read-only slice methods (`len`, `get`,
/// `iter`, `contains`, ...) are available. There is no way to push, insert or remove elements:
/// ```compile_fail
/// # use startup_common::immutable::ImmutableList;
/// let mut list = ImmutableList::of([1, 2, 3]);
/// list[0] = 4;
/// ```
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clone` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `copy_of` | `O(n)` |
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImmutableList<T> {
    inner: Arc<[T]>,
}

impl<T> ImmutableList<T> {
    /// Creates a new, empty ImmutableList.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::ImmutableList;
    /// let list: ImmutableList<u8> = ImmutableList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> ImmutableList<T> {
        ImmutableList {
            inner: Arc::new([]),
        }
    }

    /// Creates an ImmutableList containing exactly the provided elements, in order.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::ImmutableList;
    /// let list = ImmutableList::of(["a", "b", "c"]);
    /// assert_eq!(list, ["a", "b", "c"]);
    /// ```
    pub fn of<const N: usize>(elements: [T; N]) -> ImmutableList<T> {
        ImmutableList {
            inner: Arc::from(elements),
        }
    }

    /// Creates an ImmutableList by cloning every element of the provided slice.
    pub fn from_slice(elements: &[T]) -> ImmutableList<T>
    where
        T: Clone,
    {
        ImmutableList {
            inner: Arc::from(elements),
        }
    }

    /// Creates an ImmutableList by cloning every element yielded by a borrowed collection, keeping
    /// the order of iteration. Later changes to the source collection don't affect the copy.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::immutable::ImmutableList;
    /// let mut source = vec![1, 2];
    /// let copy = ImmutableList::copy_of(&source);
    /// source.push(3);
    /// assert_eq!(copy, [1, 2]);
    /// ```
    pub fn copy_of<'a, I>(collection: I) -> ImmutableList<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        collection.into_iter().cloned().collect()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        ImmutableList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deref for ImmutableList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

impl<T> Borrow<[T]> for ImmutableList<T> {
    fn borrow(&self) -> &[T] {
        &self.inner
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(value: Vec<T>) -> Self {
        ImmutableList {
            inner: Arc::from(value),
        }
    }
}

impl<T> From<Box<[T]>> for ImmutableList<T> {
    fn from(value: Box<[T]>) -> Self {
        ImmutableList {
            inner: Arc::from(value),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for ImmutableList<T> {
    fn eq(&self, other: &[U]) -> bool {
        *self.inner == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for ImmutableList<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        *self.inner == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for ImmutableList<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        *self.inner == **other
    }
}

impl<T: Debug> Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
