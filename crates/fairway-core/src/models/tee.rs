//! Rating data for one set of tees.

use serde::{Deserialize, Serialize};

use super::de;

/// Slope rating of a course of standard relative difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeeBlock {
    #[serde(alias = "teeName", alias = "tee_name", default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::i32_value")]
    pub par: i32,
    #[serde(rename = "courseRating", alias = "course_rating", alias = "rating", deserialize_with = "de::f64_value")]
    pub course_rating: f64,
    #[serde(rename = "slopeRating", alias = "slope_rating", alias = "slope", deserialize_with = "de::f64_value")]
    pub slope_rating: f64,
}

impl TeeBlock {
    pub fn new(par: i32, course_rating: f64, slope_rating: f64) -> Self {
        Self {
            name: None,
            par,
            course_rating,
            slope_rating,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Course rating minus par, the fixed part of the course handicap
    pub fn rating_adjustment(&self) -> f64 {
        self.course_rating - f64::from(self.par)
    }
}
