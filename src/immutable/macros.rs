/// Creates an [`ImmutableList`](crate::immutable::ImmutableList) containing the provided elements,
/// in order.
///
/// # Examples
/// ```
/// # use startup_common::immutable_list;
/// let list = immutable_list![1, 2, 3];
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! immutable_list {
    () => {
        $crate::immutable::ImmutableList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::immutable::ImmutableList::of([$($item),+])
    };
}

/// Creates an [`ImmutableSet`](crate::immutable::ImmutableSet) containing the provided elements.
///
/// # Panics
/// Panics if any two of the elements are equal.
///
/// # Examples
/// ```
/// # use startup_common::immutable_set;
/// let set = immutable_set!["a", "b"];
/// assert!(set.contains("a"));
/// ```
#[macro_export]
macro_rules! immutable_set {
    () => {
        $crate::immutable::ImmutableSet::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::immutable::ImmutableSet::of([$($item),+])
    };
}

/// Creates an [`ImmutableMap`](crate::immutable::ImmutableMap) containing the provided entries.
///
/// # Panics
/// Panics if any two of the keys are equal.
///
/// # Examples
/// ```
/// # use startup_common::immutable_map;
/// let map = immutable_map! { "overworld" => 0, "nether" => -1 };
/// assert_eq!(map["nether"], -1);
/// ```
#[macro_export]
macro_rules! immutable_map {
    () => {
        $crate::immutable::ImmutableMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::immutable::ImmutableMap::of([$(($key, $value)),+])
    };
}
