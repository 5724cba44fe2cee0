//! Feature inputs accepted by the classifier.
//!
//! The model was fitted on exactly two columns, in this order:
//! `price` and `price_ratio_category`.

use serde::{Deserialize, Serialize};

/// Number of columns the artifact must accept.
pub const FEATURE_COUNT: usize = 2;

/// Bounds, default and step of one numeric form control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl FieldSpec {
    pub const PRICE_MIN: f64 = 0.0;
    pub const PRICE_MAX: f64 = 10_000.0;
    pub const PRICE_DEFAULT: f64 = 735.0;

    pub const RATIO_MIN: f64 = 0.0;
    pub const RATIO_MAX: f64 = 100.0;
    pub const RATIO_DEFAULT: f64 = 1.48;

    pub const STEP: f64 = 0.1;
    /// Precision shown and kept by the form (1.48 needs two places).
    pub const DECIMALS: usize = 2;

    /// Builds a spec, pulling an out-of-range default back into bounds.
    pub fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        let mut spec = Self {
            min,
            max,
            default: min,
            step,
        };
        spec.default = spec.clamp(default);
        spec
    }

    pub fn price(default: f64) -> Self {
        Self::new(Self::PRICE_MIN, Self::PRICE_MAX, default, Self::STEP)
    }

    pub fn price_ratio(default: f64) -> Self {
        Self::new(Self::RATIO_MIN, Self::RATIO_MAX, default, Self::STEP)
    }

    /// Clamps a raw control value into `[min, max]`.
    /// NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamps, then rounds to [`Self::DECIMALS`] places so stepping never drifts.
    pub fn normalize(&self, value: f64) -> f64 {
        let scale = 10f64.powi(Self::DECIMALS as i32);
        self.clamp((self.clamp(value) * scale).round() / scale)
    }

    /// Moves `value` by whole steps, staying inside the bounds.
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        self.normalize(self.clamp(value) + self.step * f64::from(steps))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Single-row input `[price, price_ratio_category]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub price: f64,
    pub price_ratio_category: f64,
}

impl FeatureVector {
    pub fn new(price: f64, price_ratio_category: f64) -> Self {
        Self {
            price,
            price_ratio_category,
        }
    }

    /// Column order matches the training data.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [self.price, self.price_ratio_category]
    }
}
