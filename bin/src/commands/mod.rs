//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod inspect;
