//! The array model shown by the visualizer.
//!
//! - [`array`]: the mutable sequence of integers being sorted ([`SortArray`])
//! - [`layout`]: bar geometry derived from the array on reset ([`LayoutMetrics`])

pub mod array;
pub mod layout;

pub use array::SortArray;
pub use layout::{Canvas, LayoutMetrics};
