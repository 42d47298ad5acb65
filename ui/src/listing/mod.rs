//! Pure list coordination: sorting and location grouping. Nothing here
//! touches the network or component state.

pub mod group;
pub mod sort;
