//! Problems which can be solved by uninformed search.

pub mod navigation;
pub mod npuzzle;
