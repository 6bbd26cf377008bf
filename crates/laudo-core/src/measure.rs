use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format;

/// Three-axis measurement in centimeters.
///
/// Zero on every axis means "not yet entered", not "measured as zero";
/// the form starts each finding at an all-zero measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Measurement {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Largest of the three axes, the dimension recommendation cutoffs use.
    pub fn max_dimension(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// True while no axis has been entered.
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Report-text rendering: "1,0 x 0,8 x 0,6 cm". Empty while unentered.
    pub fn format_cm(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!(
            "{} x {} x {} cm",
            format::cm(self.x),
            format::cm(self.y),
            format::cm(self.z),
        )
    }
}
