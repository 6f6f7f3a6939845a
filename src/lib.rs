pub mod clamp;
pub mod config;
pub mod demo;

pub use clamp::{BoundedRange, InvalidRangeError, RangePolicy, clamp, clamp_with, try_clamp};
