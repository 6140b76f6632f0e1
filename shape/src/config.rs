//! Icon parameter set, defaults, and range validation.
//!
//! [`IconConfig::default`] reproduces the stock icon. Callers that build a
//! config from user input should run [`IconConfig::validate`] before handing
//! it to [`crate::icon::generate_icon_path`], which validates again anyway.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

pub const DEFAULT_SIZE: u32 = 1512;
pub const DEFAULT_THICKNESS: f64 = 51.0;
pub const DEFAULT_MARGIN_PCT: f64 = 0.021;
pub const DEFAULT_CORNER_SIZE_PCT: f64 = 0.12;
pub const DEFAULT_CORNER_ROUNDNESS: f64 = 0.55;
pub const DEFAULT_OUTER_ARCH_RATIO: f64 = 0.86;
pub const DEFAULT_OUTER_ARCH_WIDTH_PCT: f64 = 0.97;
pub const DEFAULT_INNER_ARCH_RATIO: f64 = 0.61;
pub const DEFAULT_INNER_ARCH_WIDTH_PCT: f64 = 0.63;

/// Six hex digits, stored without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(IconError::InvalidColor(s.to_owned()))
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three-stop vertical gradient, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientColors {
    pub bottom: HexColor,
    pub middle: HexColor,
    pub top: HexColor,
}

impl Default for GradientColors {
    fn default() -> Self {
        Self {
            bottom: HexColor("1b1b1b".to_owned()),
            middle: HexColor("585858".to_owned()),
            top: HexColor("7c7c7c".to_owned()),
        }
    }
}

/// Every tunable parameter of the icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Canvas width and height.
    pub size: u32,
    /// Stroke width. Not part of the geometry; the stroke straddles the path.
    pub thickness: f64,
    pub stroke_color: HexColor,
    /// Fraction of `size` left empty on each side. `0 <= x < 0.5`.
    pub margin_pct: f64,
    /// Fraction of the inner width that is rounded at each corner. `0 <= x < 0.5`.
    pub corner_size_pct: f64,
    /// 0 cuts the corners diagonally, 1 is as round as possible.
    pub corner_roundness: f64,
    /// Width-to-height ratio of the outer arch. `> 0`.
    pub outer_arch_ratio: f64,
    /// Fraction of the bottom straight edge taken by the outer arch. `0 < x <= 1`.
    pub outer_arch_width_pct: f64,
    /// Width-to-height ratio of the inner arch. `> 0`.
    pub inner_arch_ratio: f64,
    /// Inner arch width as a fraction of the outer arch width. `0 < x <= 1`.
    pub inner_arch_width_pct: f64,
    pub gradient: GradientColors,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            stroke_color: HexColor("ff4f4f".to_owned()),
            margin_pct: DEFAULT_MARGIN_PCT,
            corner_size_pct: DEFAULT_CORNER_SIZE_PCT,
            corner_roundness: DEFAULT_CORNER_ROUNDNESS,
            outer_arch_ratio: DEFAULT_OUTER_ARCH_RATIO,
            outer_arch_width_pct: DEFAULT_OUTER_ARCH_WIDTH_PCT,
            inner_arch_ratio: DEFAULT_INNER_ARCH_RATIO,
            inner_arch_width_pct: DEFAULT_INNER_ARCH_WIDTH_PCT,
            gradient: GradientColors::default(),
        }
    }
}

impl IconConfig {
    /// Check every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.size == 0 {
            return Err(IconError::invalid("size", "must be > 0"));
        }
        positive("thickness", self.thickness)?;
        half_open("margin_pct", self.margin_pct)?;
        half_open("corner_size_pct", self.corner_size_pct)?;
        if !(0.0..=1.0).contains(&self.corner_roundness) {
            return Err(IconError::invalid(
                "corner_roundness",
                format!("must be in 0 <= x <= 1, got {}", self.corner_roundness),
            ));
        }
        positive("outer_arch_ratio", self.outer_arch_ratio)?;
        unit_fraction("outer_arch_width_pct", self.outer_arch_width_pct)?;
        positive("inner_arch_ratio", self.inner_arch_ratio)?;
        unit_fraction("inner_arch_width_pct", self.inner_arch_width_pct)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), IconError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(IconError::invalid(name, format!("must be > 0, got {value}")))
    }
}

fn half_open(name: &'static str, value: f64) -> Result<(), IconError> {
    if (0.0..0.5).contains(&value) {
        Ok(())
    } else {
        Err(IconError::invalid(name, format!("must be in 0 <= x < 0.5, got {value}")))
    }
}

fn unit_fraction(name: &'static str, value: f64) -> Result<(), IconError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(IconError::invalid(name, format!("must be in 0 < x <= 1, got {value}")))
    }
}
