use derive_more::{Display, Error};

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("duplicate element at position {index}")]
pub struct DuplicateElement {
    pub index: usize,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("duplicate key at position {index}")]
pub struct DuplicateKey {
    pub index: usize,
}
