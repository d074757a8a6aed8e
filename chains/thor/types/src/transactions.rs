//! Thor transaction requests: the clause model, signature states and the RLP codec.
pub mod clause;
pub mod codec;
pub mod request;
pub mod signed;
#[cfg(test)]
pub(crate) mod fixtures;
