//! Thin call sites over `serde_json` and `f64` math.

pub mod point;
pub mod record;

pub use point::Point;
pub use record::Record;
