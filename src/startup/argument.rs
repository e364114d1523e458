/// A single startup value, made up of a default fixed at construction and an optional explicit
/// value that overrides it.
///
/// An argument is in one of two states: default-only, or explicitly set. Setting a value moves it
/// into the second state and there is no way back, although the explicit value can be replaced any
/// number of times.
///
/// Two arguments are equal when both their explicit values and their defaults are equal, so an
/// argument explicitly set to its own default is not equal to one that was never set.
///
/// # Examples
/// ```
/// # use startup_common::startup::StartupArgument;
/// let mut threads = StartupArgument::new(4);
/// assert_eq!(*threads.value(), 4);
///
/// threads.set_value(8);
/// assert_eq!(*threads.value(), 8);
/// assert_eq!(*threads.default_value(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartupArgument<T> {
    value: Option<T>,
    default_value: T,
}

impl<T> StartupArgument<T> {
    /// Creates a new argument with no explicit value.
    pub const fn new(default_value: T) -> StartupArgument<T> {
        StartupArgument {
            value: None,
            default_value,
        }
    }

    /// Creates a new argument that has already been explicitly set to `value`.
    pub const fn with_value(value: T, default_value: T) -> StartupArgument<T> {
        StartupArgument {
            value: Some(value),
            default_value,
        }
    }

    /// Returns the effective value of the argument: the explicit value if one has been set,
    /// otherwise the default.
    pub const fn value(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => &self.default_value,
        }
    }

    pub const fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Returns true if an explicit value has been set.
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the explicit value of the argument, returning the explicit value it replaced, if any.
    /// The default is never touched.
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Consumes the argument, returning its effective value.
    pub fn into_value(self) -> T {
        self.value.unwrap_or(self.default_value)
    }
}
