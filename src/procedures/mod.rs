//! The procedures of a solve, implemented as context methods.
//!
//! For the most part these are methods accessed via a context, placed here
//! for documentation.

pub mod colour;
pub mod expand;
pub mod solve;
