use derive_more::{Display, From, IsVariant};

/// The type of value held by an [`ArgumentValue`], without the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ArgumentKind {
    #[display("bool")]
    Bool,
    #[display("integer")]
    Int,
    #[display("float")]
    Float,
    #[display("string")]
    Str,
}

/// A value that can be stored in an [`ArgumentRegistry`](super::ArgumentRegistry).
///
/// All integer types are widened into [`ArgumentValue::Int`] when converted, while reading them back
/// out checks that the stored value fits. No other coercion happens between kinds: an integer
/// argument can't be read as a float, or a string as anything but a string.
#[derive(Debug, Clone, PartialEq, Display, From, IsVariant)]
pub enum ArgumentValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ArgumentValue {
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            ArgumentValue::Bool(_) => ArgumentKind::Bool,
            ArgumentValue::Int(_) => ArgumentKind::Int,
            ArgumentValue::Float(_) => ArgumentKind::Float,
            ArgumentValue::Str(_) => ArgumentKind::Str,
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::Str(value.to_owned())
    }
}

macro_rules! impl_widening_from {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ArgumentValue {
                fn from(value: $int) -> Self {
                    ArgumentValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_widening_from!(i8, i16, i32, u8, u16, u32);

/// A type that can be read back out of an [`ArgumentValue`].
pub trait ArgumentType: Into<ArgumentValue> + Sized {
    /// The kind of [`ArgumentValue`] that this type is stored as.
    const KIND: ArgumentKind;

    /// Recovers a value of this type, returning [`None`] if `value` is of another kind or doesn't
    /// fit.
    fn from_value(value: &ArgumentValue) -> Option<Self>;
}

impl ArgumentType for bool {
    const KIND: ArgumentKind = ArgumentKind::Bool;

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl ArgumentType for f64 {
    const KIND: ArgumentKind = ArgumentKind::Float;

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl ArgumentType for String {
    const KIND: ArgumentKind = ArgumentKind::Str;

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

macro_rules! impl_int_argument_type {
    ($($int:ty),*) => {
        $(
            impl ArgumentType for $int {
                const KIND: ArgumentKind = ArgumentKind::Int;

                fn from_value(value: &ArgumentValue) -> Option<Self> {
                    match value {
                        ArgumentValue::Int(i) => <$int>::try_from(*i).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_int_argument_type!(i8, i16, i32, i64, u8, u16, u32);
