use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `(0, 0)`.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn describe(&self) -> String {
        format!(
            "Distance from ({:.1}, {:.1}) to origin: {:.2}",
            self.x,
            self.y,
            self.distance_from_origin()
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(3.0, 4.0)
    }
}
