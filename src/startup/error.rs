use derive_more::{Display, Error, From, IsVariant};

use super::ArgumentKind;

#[derive(Debug, Display, Error)]
#[display("no startup argument registered under key {key:?}")]
pub struct MissingArgument {
    pub key: String,
}

#[derive(Debug, Display, Error)]
#[display("startup argument {key:?} holds a {found} value, which can't be used as a {expected}")]
pub struct ArgumentTypeMismatch {
    pub key: String,
    pub expected: ArgumentKind,
    pub found: ArgumentKind,
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ArgumentError {
    Missing(MissingArgument),
    TypeMismatch(ArgumentTypeMismatch),
}
