//! Domain modules, one vertical slice per governance concept.

pub mod drep;
pub mod metadata;
pub mod proposal;
