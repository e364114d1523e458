use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use super::{
    ArgumentError, ArgumentType, ArgumentTypeMismatch, ArgumentValue, MissingArgument,
    StartupArgument,
};

/// A registry of named [`StartupArgument`]s, populated with defaults ahead of use and queried by
/// key.
///
/// Keys are unique. Adding an argument under a key that is already registered replaces the old
/// argument outright, including any value that had been set on it. There is no way to remove an
/// argument once added.
///
/// Iteration follows the order in which keys were first registered.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of arguments in the registry.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `get` | `O(1)`* |
/// | `set` | `O(1)`* |
/// | `build` | `O(n)` in the number of raw arguments |
///
/// \* Average case, as with any hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentRegistry {
    arguments: IndexMap<String, StartupArgument<ArgumentValue>>,
}

impl ArgumentRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> ArgumentRegistry {
        ArgumentRegistry {
            arguments: IndexMap::new(),
        }
    }

    /// Returns the number of registered arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Registers a new argument under `key` with the provided default and no explicit value,
    /// returning the registry to allow chaining.
    ///
    /// If `key` is already registered, the existing argument is discarded.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::startup::{ArgumentRegistry, ArgumentValue};
    /// let mut args = ArgumentRegistry::new();
    /// args.add("port", 8080).add("port", 25565);
    ///
    /// assert_eq!(args.len(), 1);
    /// assert_eq!(args.get("port").map(|a| a.value()), Some(&ArgumentValue::Int(25565)));
    /// ```
    pub fn add<K, V>(&mut self, key: K, default_value: V) -> &mut ArgumentRegistry
    where
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        let argument = StartupArgument::new(default_value.into());

        match self.arguments.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                trace!(key = entry.key().as_str(), "replacing registered startup argument");
                entry.insert(argument);
            },
            Entry::Vacant(entry) => {
                entry.insert(argument);
            },
        }

        self
    }

    /// Returns the argument registered under `key`, or [`None`] if there isn't one.
    pub fn get(&self, key: &str) -> Option<&StartupArgument<ArgumentValue>> {
        self.arguments.get(key)
    }

    /// Returns a mutable reference to the argument registered under `key`, or [`None`] if there
    /// isn't one.
    ///
    /// Setting a value through this reference skips the kind check performed by
    /// [`ArgumentRegistry::set`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut StartupArgument<ArgumentValue>> {
        self.arguments.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    /// Returns the effective value of the argument under `key` as a `T`.
    ///
    /// # Errors
    /// Returns [`ArgumentError::Missing`] if nothing is registered under `key` and
    /// [`ArgumentError::TypeMismatch`] if the value isn't of the kind `T` is stored as, or is an
    /// integer out of range for `T`.
    ///
    /// # Examples
    /// ```
    /// # use startup_common::startup::ArgumentRegistry;
    /// let mut args = ArgumentRegistry::new();
    /// args.add("host", "localhost");
    ///
    /// assert_eq!(args.get_as::<String>("host").ok().as_deref(), Some("localhost"));
    /// assert!(args.get_as::<i32>("host").is_err_and(|e| e.is_type_mismatch()));
    /// assert!(args.get_as::<i32>("port").is_err_and(|e| e.is_missing()));
    /// ```
    pub fn get_as<T: ArgumentType>(&self, key: &str) -> Result<T, ArgumentError> {
        let value = self.get(key).ok_or_else(|| missing(key))?.value();

        T::from_value(value).ok_or_else(|| {
            ArgumentTypeMismatch {
                key: key.to_owned(),
                expected: T::KIND,
                found: value.kind(),
            }
            .into()
        })
    }

    /// Sets the explicit value of the argument under `key`, after checking that it is the same kind
    /// of value as the argument's default.
    ///
    /// # Errors
    /// Returns [`ArgumentError::Missing`] if nothing is registered under `key` and
    /// [`ArgumentError::TypeMismatch`] if `value` is of a different kind to the default. The
    /// argument is left unchanged on error.
    pub fn set<V: Into<ArgumentValue>>(&mut self, key: &str, value: V) -> Result<(), ArgumentError> {
        let argument = self.arguments.get_mut(key).ok_or_else(|| missing(key))?;
        let value = value.into();

        let expected = argument.default_value().kind();
        if value.kind() != expected {
            return Err(ArgumentTypeMismatch {
                key: key.to_owned(),
                expected,
                found: value.kind(),
            }
            .into());
        }

        trace!(key, %value, "setting startup argument");
        argument.set_value(value);
        Ok(())
    }

    /// Accepts the raw arguments the process was started with.
    ///
    /// Raw arguments are not bound to registered keys yet, so this leaves every registered argument
    /// exactly as it was. Callers that need command-line overrides should apply them with
    /// [`ArgumentRegistry::set`].
    pub fn build<I>(&mut self, raw_arguments: I) -> &mut ArgumentRegistry
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let count = raw_arguments.into_iter().count();
        debug!(count, "received raw startup arguments, registered arguments left unchanged");
        self
    }

    /// Returns an iterator over all registered keys and their arguments, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StartupArgument<ArgumentValue>)> {
        self.arguments.iter().map(|(key, argument)| (key.as_str(), argument))
    }
}

impl<'a> IntoIterator for &'a ArgumentRegistry {
    type Item = (&'a String, &'a StartupArgument<ArgumentValue>);
    type IntoIter = indexmap::map::Iter<'a, String, StartupArgument<ArgumentValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

fn missing(key: &str) -> MissingArgument {
    MissingArgument {
        key: key.to_owned(),
    }
}
